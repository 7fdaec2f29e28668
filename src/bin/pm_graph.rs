use pm_graph::cli::parse_cli;
use pm_graph::plot::plot_series;
use pm_graph::{load_pm, PmError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = parse_cli();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match &args.input {
        Some(fin) => println!(
            "read data from {} and plot to {}",
            fin.display(),
            args.output.display()
        ),
        None => println!(
            "query {}:{} for ModuleId {} NwIntfId {} and plot to {}",
            args.ip,
            args.port,
            args.query.module_id,
            args.query.nw_intf_id,
            args.output.display()
        ),
    }

    let pm = match load_pm(&args) {
        Ok(pm) => pm,
        Err(e @ PmError::Transport(_)) => {
            eprintln!("could not reach the PM endpoint: {}", e);
            std::process::exit(e.exit_code());
        }
        Err(e @ PmError::Io(_)) => {
            let fin = args.input.as_deref().unwrap_or_else(|| Path::new("-"));
            println!("could not read {}: {}", fin.display(), e);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            println!("Error Parsing the PM Json: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let plotted = pm
        .object
        .points()
        .and_then(|points| plot_series(&pm.object, &points, &args.output));
    if let Err(e) = plotted {
        println!("Error while plotting graph: {}", e);
        std::process::exit(e.exit_code());
    }
}
