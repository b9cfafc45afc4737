pub mod check;
pub mod config;
pub mod escape;
pub mod extractor;
pub mod fetcher;
pub mod graphite;
pub mod metric;

use crate::check::report;
use crate::config::Config;
use nagiosplugin::ServiceState;
use std::io::Write;
use std::process::ExitCode;

/// Runs one check, writing metric lines and any status line to `out`.
pub fn execute(config: &Config, mut out: impl Write) -> ServiceState {
    let result = check::run(config, &mut out);
    report(&result, &mut out)
}

pub fn exit_code(state: ServiceState) -> ExitCode {
    ExitCode::from(state.exit_code() as u8)
}

