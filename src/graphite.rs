//! Graphite plaintext protocol output.
//!
//! See https://graphite.readthedocs.io/en/latest/feeding-carbon.html#the-plaintext-protocol

use log::trace;
use serde_json::Value;
use std::fmt;
use std::io;
use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub path: String,
    pub value: String,
    pub timestamp: u64,
}

impl Line {
    pub fn new(scheme: &str, metric: &str, value: &Value, timestamp: u64) -> Self {
        Line {
            path: format!("{}.{}", scheme, metric),
            value: render_value(value),
            timestamp,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.path, self.value, self.timestamp)
    }
}

/// Strings are written without quotes; everything else as compact JSON.
///
/// String values are not sanitized: embedded whitespace or newlines reach the
/// output unchanged, as the endpoint sent them.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Writes one line per call, each stamped with the time of the call.
pub struct Emitter<'a, W: Write> {
    scheme: &'a str,
    out: W,
    count: usize,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(scheme: &'a str, out: W) -> Self {
        Emitter {
            scheme,
            out,
            count: 0,
        }
    }

    pub fn emit(&mut self, metric: &str, value: &Value) -> io::Result<()> {
        let line = Line::new(self.scheme, metric, value, unix_timestamp());
        trace!("emitting {}", line);
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
