use super::query::{parse_id, PmQuery};
use super::VERSION;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

/// Settings for one fetch and plot run.
#[derive(Debug, Clone, PartialEq)]
pub struct PmArgs {
    pub ip: String,
    pub port: String,
    pub query: PmQuery,
    pub output: PathBuf,
    pub input: Option<PathBuf>,
    pub verbose: bool,
}

fn validate_module_id(v: String) -> Result<(), String> {
    parse_id("ModuleId", &v).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_nw_intf_id(v: String) -> Result<(), String> {
    parse_id("NwIntfId", &v).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_port(v: String) -> Result<(), String> {
    v.parse::<u16>()
        .map(|_| ())
        .map_err(|e| format!("invalid port '{}': {}", v, e))
}

pub fn cli_app<'a, 'b>() -> App<'a, 'b> {
    let arg_ip = Arg::with_name("ip")
        .help("ip address of the management endpoint")
        .long("IP")
        .takes_value(true)
        .default_value("localhost");
    let arg_port = Arg::with_name("port")
        .help("port number")
        .long("Port")
        .takes_value(true)
        .validator(validate_port)
        .default_value("8080");
    let arg_module = Arg::with_name("module_id")
        .help("module id")
        .long("ModuleId")
        .takes_value(true)
        .validator(validate_module_id)
        .default_value("0");
    let arg_intf = Arg::with_name("nw_intf_id")
        .help("network interface id")
        .long("NwIntfId")
        .takes_value(true)
        .validator(validate_nw_intf_id)
        .default_value("0");
    let arg_resource = Arg::with_name("resource")
        .help("resource name")
        .long("Resource")
        .takes_value(true)
        .default_value("BER");
    let arg_type = Arg::with_name("type")
        .help("Current/Min/Max/Avg")
        .long("Type")
        .takes_value(true)
        .default_value("Current");
    let arg_class = Arg::with_name("class")
        .help("Class-A/Class-B/Class-C")
        .long("Class")
        .takes_value(true)
        .default_value("Class-A");
    let arg_output = Arg::with_name("output_file")
        .help("output image, .svg for svg, otherwise png")
        .short("o")
        .long("OutputFile")
        .takes_value(true)
        .default_value("PM.png");
    let arg_input = Arg::with_name("input_file")
        .help("plot a saved PM json response instead of querying the endpoint")
        .short("f")
        .long("InputFile")
        .takes_value(true);
    let arg_verbose = Arg::with_name("verbose")
        .help("print debug information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    App::new("pm_graph")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to fetch and plot the PM time series of a DWDM module network interface")
        .arg(arg_ip)
        .arg(arg_port)
        .arg(arg_module)
        .arg(arg_intf)
        .arg(arg_resource)
        .arg(arg_type)
        .arg(arg_class)
        .arg(arg_output)
        .arg(arg_input)
        .arg(arg_verbose)
}

impl PmArgs {
    pub fn from_matches(m: &ArgMatches) -> Result<PmArgs, String> {
        let query = PmQuery::from_strs(
            m.value_of("module_id").unwrap_or_default(),
            m.value_of("nw_intf_id").unwrap_or_default(),
            m.value_of("resource").unwrap_or_default(),
            m.value_of("type").unwrap_or_default(),
            m.value_of("class").unwrap_or_default(),
        )
        .map_err(|e| e.to_string())?;
        Ok(PmArgs {
            ip: m.value_of("ip").unwrap_or_default().to_string(),
            port: m.value_of("port").unwrap_or_default().to_string(),
            query,
            output: PathBuf::from(m.value_of("output_file").unwrap_or_default()),
            input: m.value_of("input_file").map(PathBuf::from),
            verbose: m.is_present("verbose"),
        })
    }
}

/// Takes the CLI arguments that select the PM series and the output image.
pub fn parse_cli() -> PmArgs {
    let matches = cli_app().get_matches();
    match PmArgs::from_matches(&matches) {
        Ok(args) => args,
        Err(e) => clap::Error::with_description(&e, clap::ErrorKind::InvalidValue).exit(),
    }
}
