use crate::metric::MetricPair;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, PartialEq)]
pub struct Match<'a> {
    pub metric: &'a str,
    pub value: &'a Value,
}

fn scope_matches<'a>(
    scope: Option<&'a Map<String, Value>>,
    pair: &'a MetricPair,
) -> impl Iterator<Item = Match<'a>> + 'a {
    scope
        .into_iter()
        .flat_map(|object| object.iter())
        .filter(move |(key, _)| pair.matches(key))
        .map(move |(_, value)| Match {
            metric: &pair.name,
            value,
        })
}

/// Finds the values of every pair, in pair order.
///
/// For each pair the named object is searched first, then the top level. A key
/// present in both places yields two matches.
pub fn extract<'a>(
    document: &'a Value,
    object: Option<&str>,
    pairs: &'a [MetricPair],
) -> Vec<Match<'a>> {
    let top = document.as_object();
    let nested = object.and_then(|name| top?.get(name)?.as_object());

    pairs
        .iter()
        .flat_map(|pair| scope_matches(nested, pair).chain(scope_matches(top, pair)))
        .collect()
}
