//! URL query string (de)serialization.

use std::collections::HashMap;

/// Percent-encodes `pairs` into `key=value&key=value` form.
///
/// No leading `?` is added; an empty input yields an empty string.
///
/// ```rust
/// use rvr_utils::serialize_query;
///
/// let query = serialize_query([("scene", "lobby"), ("user name", "Ana & Bo")]);
/// assert_eq!(query, "scene=lobby&user%20name=Ana%20%26%20Bo");
/// ```
pub fn serialize_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a query string into decoded pairs, in order.
///
/// A leading `?` is ignored, empty segments are skipped, a segment without
/// `=` is a key with an empty value, and `+` decodes to a space. Malformed
/// escapes are decoded lossily. Repeated keys are all kept.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Parses a query string into a map. Later duplicates win.
pub fn query_to_map(query: &str) -> HashMap<String, String> {
    parse_query(query).into_iter().collect()
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
