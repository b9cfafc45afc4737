use crate::metric::MetricSpec;
use clap::ArgAction;
use clap::Parser;
use log::LevelFilter;
use nagiosplugin::ServiceState;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Hits an HTTP endpoint which emits JSON and prints the selected values as Graphite metrics
#[derive(Debug, Parser)]
#[command(name = "metrics-http-json", version, about, long_about = None)]
pub struct Args {
    /// Full URL to the endpoint
    #[arg(short, long, value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Metric naming scheme [default: local host name]
    #[arg(short, long, value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Metric/JSON key pairs (e.g., Connections::numConnections,BusyConnections::numBusyConnections)
    #[arg(short, long, value_name = "METRIC::JSONKEY", required = true)]
    pub metric: MetricSpec,

    /// The JSON object containing the data, searched in addition to the top level
    #[arg(short, long, value_name = "OBJECT")]
    pub object: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub url: String,
    pub scheme: String,
    pub metrics: MetricSpec,
    pub object: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn new(url: impl Into<String>, scheme: impl Into<String>, metrics: &str) -> Self {
        Config {
            url: url.into(),
            scheme: scheme.into(),
            metrics: MetricSpec::parse(metrics),
            object: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            url: args.url,
            scheme: args.scheme.unwrap_or_else(local_hostname),
            metrics: args.metric,
            object: args.object,
            timeout: Duration::from_secs(args.timeout),
        }
    }
}

/// `--help` and `--version` also arrive as errors; only real usage errors are UNKNOWN.
pub fn argument_error_state(error: &clap::Error) -> ServiceState {
    if error.use_stderr() {
        ServiceState::Unknown
    } else {
        ServiceState::Ok
    }
}

pub fn local_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}
