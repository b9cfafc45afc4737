use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetricPair {
    pub name: String,
    pub key: Option<String>,
}

impl MetricPair {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        MetricPair {
            name: name.into(),
            key: Some(key.into()),
        }
    }

    pub fn matches(&self, json_key: &str) -> bool {
        self.key.as_deref() == Some(json_key)
    }
}

impl From<&str> for MetricPair {
    fn from(entry: &str) -> Self {
        let mut parts = entry.split("::");
        let name = parts.next().unwrap_or_default().to_string();
        let key = parts.next().filter(|key| !key.is_empty()).map(String::from);
        MetricPair { name, key }
    }
}

impl fmt::Display for MetricPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}::{}", self.name, key),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Comma-separated list of `METRIC::JSONKEY` pairs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MetricSpec(pub Vec<MetricPair>);

impl MetricSpec {
    pub fn parse(input: &str) -> Self {
        let mut entries: Vec<&str> = input.split(',').collect();
        while entries.last().is_some_and(|entry| entry.is_empty()) {
            entries.pop();
        }
        MetricSpec(entries.into_iter().map(MetricPair::from).collect())
    }

    pub fn pairs(&self) -> &[MetricPair] {
        &self.0
    }
}

impl FromStr for MetricSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MetricSpec::parse(s))
    }
}
