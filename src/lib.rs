pub mod cli;
pub mod error;
pub mod plot;
pub mod pm;
pub mod query;
pub mod transport;

pub use error::PmError;
pub use pm::{PlotPoint, PmObject, PmResponse, PmSample};
pub use query::PmQuery;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// State path of the PM series of a DWDM module network interface.
pub const PM_STATE_PATH: &str = "/public/v1/state/DWDMModuleNwIntfPM";

/// Timestamp layout after dropping the zone abbreviation,
/// e.g. `2017-03-01 10:15:30.123456789 -0800`.
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// Chart side in pixels, 10 inches at 96 dpi.
pub const CANVAS_PX: u32 = 960;

/// Reads the PM series, from `input` when given, otherwise from the endpoint.
pub fn load_pm(args: &cli::PmArgs) -> Result<PmResponse, PmError> {
    match &args.input {
        Some(fin) => PmResponse::from_json_file(fin),
        None => {
            let url = query::pm_url(&args.ip, &args.port);
            let body = transport::fetch_pm(&url, &args.query)?;
            PmResponse::from_slice(&body)
        }
    }
}
