use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use sto_bus_rules::agency::{AgencyTools, StoBusAgency};
use sto_bus_rules::config::RulesConfig;
use sto_bus_rules::driver::{self, DriverError, DriverSummary};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the input file, used when no path is given.
const INPUT_ENV: &str = "STO_RULES_INPUT";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let tools = StoBusAgency::new(RulesConfig::default());
    let input = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(INPUT_ENV))
        .map(PathBuf::from);

    match run(&tools, input) {
        Ok(summary) => {
            info!(records = summary.total(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(tools: &impl AgencyTools, input: Option<PathBuf>) -> Result<DriverSummary, DriverError> {
    let stdout = io::stdout().lock();
    match input {
        Some(path) => {
            info!(path = %path.display(), agency = tools.agency_name(), "reading records");
            driver::process_path(tools, &path, stdout)
        }
        None => {
            info!(agency = tools.agency_name(), "reading records from stdin");
            driver::process(tools, io::stdin().lock(), stdout)
        }
    }
}
