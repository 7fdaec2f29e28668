use super::error::PmError;
use super::pm::{PlotPoint, PmObject};
use super::CANVAS_PX;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Plots the PM series as a single line with points and writes it to `fout`.
/// A `.svg` extension selects the svg backend, anything else is written as a bitmap.
/// When drawing fails the partially written file is removed.
pub fn plot_series(pm: &PmObject, points: &[PlotPoint], fout: &Path) -> Result<(), PmError> {
    if points.is_empty() {
        return Err(PmError::EmptySeries);
    }
    let is_svg = fout
        .extension()
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);
    debug!(
        "drawing {} points to {} ({})",
        points.len(),
        fout.display(),
        if is_svg { "svg" } else { "bitmap" }
    );
    let result = if is_svg {
        let root = SVGBackend::new(fout, (CANVAS_PX, CANVAS_PX)).into_drawing_area();
        draw_chart(root, pm, points)
    } else {
        let root = BitMapBackend::new(fout, (CANVAS_PX, CANVAS_PX)).into_drawing_area();
        draw_chart(root, pm, points)
    };
    if result.is_err() && fout.exists() {
        if let Err(e) = fs::remove_file(fout) {
            warn!("could not remove partial chart {}: {}", fout.display(), e);
        }
    }
    result
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    pm: &PmObject,
    points: &[PlotPoint],
) -> Result<(), PmError> {
    let offsets: Vec<f64> = points.iter().map(|p| p.offset).collect();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let (xmin, xmax) = padded_range(&offsets, 20.)?;
    let (ymin, ymax) = padded_range(&values, 10.)?;

    root.fill(&WHITE).map_err(render_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(pm.title(), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
        .label_style(("sans-serif", 18))
        .x_desc("Time (second)")
        .y_desc(pm.value_label())
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format!("{:.3e}", y))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.offset, p.value)),
            RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("First")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.offset, p.value), 4, RED.filled())),
        )
        .map_err(render_err)?;
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PmError {
    PmError::Render(e.to_string())
}

/// min and max of the slice widened by span / `margin_div` on both sides;
/// a flat series gets a margin of 5% of its magnitude, at least 1,
/// so that the range is never empty
pub fn padded_range(s: &[f64], margin_div: f64) -> Result<(f64, f64), PmError> {
    let (min, max) = min_and_max(s).ok_or(PmError::EmptySeries)?;
    let span = max - min;
    let margin = if span > 0. {
        span / margin_div
    } else {
        (min.abs().max(max.abs()) * 0.05).max(1.)
    };
    let (lo, hi) = (min - margin, max + margin);
    if !span.is_finite() || !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(PmError::Render(format!(
            "cannot derive an axis range from {} to {}",
            min, max
        )));
    }
    Ok((lo, hi))
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object() -> PmObject {
        PmObject {
            class: "Class-B".to_string(),
            data: Vec::new(),
            module_id: 4,
            nw_intf_id: 1,
            resource: "BER".to_string(),
            kind: "Max".to_string(),
        }
    }

    #[test]
    fn min_and_max_of_unordered_slice() {
        assert_eq!(min_and_max(&[3., -1., 7., 0.]), Some((-1., 7.)));
        assert_eq!(min_and_max::<f64>(&[]), None);
    }

    #[test]
    fn ranges_get_a_margin() {
        assert_eq!(padded_range(&[-120., -60., 0.], 20.).unwrap(), (-126., 6.));
        assert_eq!(padded_range(&[0.], 20.).unwrap(), (-1., 1.));
        assert_eq!(padded_range(&[2.5, 2.5], 10.).unwrap(), (1.5, 3.5));
        let (lo, hi) = padded_range(&[1e20, 1e20], 10.).unwrap();
        assert!(lo < 1e20 && 1e20 < hi);
        let (lo, hi) = padded_range(&[-1e-9, -1e-9], 10.).unwrap();
        assert!(lo < hi);
    }

    #[test]
    fn unbounded_range_is_a_render_error() {
        assert!(matches!(
            padded_range(&[-1e308, 1e308], 10.),
            Err(PmError::Render(_))
        ));
        assert!(matches!(padded_range(&[], 10.), Err(PmError::EmptySeries)));
    }

    #[test]
    fn empty_series_is_not_plotted() {
        let dir = tempfile::tempdir().unwrap();
        let fout = dir.path().join("PM.png");
        assert!(matches!(
            plot_series(&object(), &[], &fout),
            Err(PmError::EmptySeries)
        ));
        assert!(!fout.exists());
    }

    #[test]
    fn unwritable_path_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let fout = dir.path().join("missing").join("PM.png");
        let points = [
            PlotPoint {
                offset: -60.,
                value: 1e-9,
            },
            PlotPoint {
                offset: 0.,
                value: 2e-9,
            },
        ];
        assert!(plot_series(&object(), &points, &fout).is_err());
        assert!(!fout.exists());
    }

    fn three_points() -> [PlotPoint; 3] {
        [
            PlotPoint {
                offset: -120.,
                value: 1.0,
            },
            PlotPoint {
                offset: -60.,
                value: 2.0,
            },
            PlotPoint {
                offset: 0.,
                value: 3.0,
            },
        ]
    }

    #[test]
    fn plots_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let fout = dir.path().join("PM.png");
        plot_series(&object(), &three_points(), &fout).unwrap();
        let bytes = fs::read(&fout).unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn plots_to_svg_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let fout = dir.path().join("PM.svg");
        plot_series(&object(), &three_points(), &fout).unwrap();
        let svg = fs::read_to_string(&fout).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Time (second)"));
    }
}
