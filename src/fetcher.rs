use crate::escape::safe_display;
use log::debug;
use log::info;
use log::warn;
use snafu::prelude::*;
use std::io::ErrorKind;
use std::time::Duration;
use ureq::Agent;

#[derive(Debug, Snafu)]
pub enum FetchError {
    #[snafu(display("{url} is not responding"))]
    ConnectionRefused { url: String },

    #[snafu(display("{url} Connection timed out"))]
    Timeout { url: String },

    #[snafu(display("{url}: {source}"))]
    Transport { url: String, source: ureq::Error },
}

impl FetchError {
    fn classify(url: &str, error: ureq::Error) -> FetchError {
        let url = safe_display(url);
        match error {
            ureq::Error::Io(e) if e.kind() == ErrorKind::ConnectionRefused => {
                FetchError::ConnectionRefused { url }
            }
            ureq::Error::Timeout(_) => FetchError::Timeout { url },
            ureq::Error::Io(e) if e.kind() == ErrorKind::TimedOut => FetchError::Timeout { url },
            source => FetchError::Transport { url, source },
        }
    }
}

fn request_summary(url: &str, timeout: Duration) -> String {
    format!("GET {} (timeout {}s)", safe_display(url), timeout.as_secs_f64())
}

pub struct Fetcher {
    agent: Agent,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Fetcher {
            agent: Agent::new_with_config(config),
            timeout,
        }
    }

    /// Returns the raw body; decoding is left to the JSON parser.
    pub fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("{}", request_summary(url, self.timeout));
        let body = self
            .agent
            .get(url)
            .call()
            .and_then(|mut response| response.body_mut().read_to_vec())
            .map_err(|e| {
                let error = FetchError::classify(url, e);
                warn!("request failed: {}", error);
                error
            })?;
        debug!("received {} bytes", body.len());
        Ok(body)
    }
}
