use crate::config::Config;
use crate::escape::safe_display;
use crate::extractor::extract;
use crate::fetcher::FetchError;
use crate::fetcher::Fetcher;
use crate::graphite::Emitter;
use log::debug;
use log::info;
use log::warn;
use nagiosplugin::ServiceState;
use serde_json::Value;
use snafu::prelude::*;
use std::io;
use std::io::Write;

#[derive(Debug, Snafu)]
pub enum CheckError {
    #[snafu(display("{source}"))]
    Fetch { source: FetchError },

    #[snafu(display("{url} returned invalid JSON: {source}"))]
    Parse {
        url: String,
        source: serde_json::Error,
    },

    #[snafu(display("writing metrics: {source}"))]
    Output { source: io::Error },
}

impl CheckError {
    pub fn status(&self) -> ServiceState {
        match self {
            CheckError::Fetch {
                source: FetchError::ConnectionRefused { .. } | FetchError::Timeout { .. },
            } => ServiceState::Critical,
            CheckError::Fetch {
                source: FetchError::Transport { .. },
            } => ServiceState::Unknown,
            CheckError::Parse { .. } => ServiceState::Critical,
            CheckError::Output { .. } => ServiceState::Unknown,
        }
    }
}

pub type CheckResult<T> = Result<T, CheckError>;

/// Fetches the document once and writes a Graphite line to `out` for every match.
/// Returns the number of lines written.
pub fn run(config: &Config, out: impl Write) -> CheckResult<usize> {
    let body = Fetcher::new(config.timeout)
        .get(&config.url)
        .context(FetchSnafu)?;
    let document: Value = serde_json::from_slice(&body).context(ParseSnafu {
        url: safe_display(&config.url),
    })?;

    for pair in config.metrics.pairs().iter().filter(|pair| pair.key.is_none()) {
        warn!(
            "metric pair \"{}\" has no JSON key and will never match",
            safe_display(&pair.to_string())
        );
    }

    let matches = extract(&document, config.object.as_deref(), config.metrics.pairs());
    debug!(
        "{} match(es) for {} metric pair(s)",
        matches.len(),
        config.metrics.pairs().len()
    );

    let mut emitter = Emitter::new(&config.scheme, out);
    for found in matches {
        emitter.emit(found.metric, found.value).context(OutputSnafu)?;
    }
    info!("emitted {} metric(s)", emitter.count());
    Ok(emitter.count())
}

/// Writes the status line for a failed check and returns the status to exit with.
pub fn report(result: &CheckResult<usize>, out: &mut impl Write) -> ServiceState {
    match result {
        Ok(_) => ServiceState::Ok,
        Err(e) => {
            let status = e.status();
            let _ = writeln!(out, "{}: {}", status, e);
            status
        }
    }
}
