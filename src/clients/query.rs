//! Query-string encoding for request data and cache keys.
//!
//! Nested structures use bracket notation (`venue[address][city]=Rome`),
//! array items are indexed (`tags[0]=music`), `null` entries are skipped and
//! booleans encode as `true`/`false`. Keys and values are percent-encoded.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Encodes a JSON object as an `application/x-www-form-urlencoded` string.
///
/// Object keys are emitted in map order, which for `serde_json::Map` is
/// sorted, so the output is deterministic.
#[must_use]
pub fn encode_query(data: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in data {
        push_pairs(&mut pairs, key.clone(), value);
    }
    join_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Encodes flat string pairs as a query string.
#[must_use]
pub fn encode_pairs(pairs: &BTreeMap<String, String>) -> String {
    join_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Decodes a query string produced by [`encode_pairs`].
///
/// Returns `None` if a segment has no `=` or is not valid percent-encoded UTF-8.
#[must_use]
pub fn decode_pairs(query: &str) -> Option<BTreeMap<String, String>> {
    let mut pairs = BTreeMap::new();
    for segment in query.split('&') {
        let (key, value) = segment.split_once('=')?;
        let key = urlencoding::decode(key).ok()?;
        let value = urlencoding::decode(value).ok()?;
        pairs.insert(key.into_owned(), value.into_owned());
    }
    Some(pairs)
}

fn push_pairs(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(pairs, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                push_pairs(pairs, format!("{key}[{child}]"), item);
            }
        }
    }
}

fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_encode_query_flat_scalars() {
        let data = object(json!({"status": "live", "page": 2, "expand": true}));
        assert_eq!(encode_query(&data), "expand=true&page=2&status=live");
    }

    #[test]
    fn test_encode_query_nested_uses_brackets() {
        let data = object(json!({"event": {"name": {"html": "Foo Bar"}}}));
        assert_eq!(
            encode_query(&data),
            "event%5Bname%5D%5Bhtml%5D=Foo%20Bar"
        );
    }

    #[test]
    fn test_encode_query_indexes_arrays_and_skips_null() {
        let data = object(json!({"tags": ["a", "b"], "missing": null}));
        assert_eq!(encode_query(&data), "tags%5B0%5D=a&tags%5B1%5D=b");
    }

    #[test]
    fn test_encode_query_empty_map() {
        assert_eq!(encode_query(&Map::new()), "");
    }

    #[test]
    fn test_encode_pairs_escapes_separators() {
        let mut pairs = BTreeMap::new();
        pairs.insert("time_filter".to_string(), "a:b&c".to_string());
        assert_eq!(encode_pairs(&pairs), "time_filter=a%3Ab%26c");
    }

    #[test]
    fn test_decode_pairs_reverses_encode_pairs() {
        let mut pairs = BTreeMap::new();
        pairs.insert("status".to_string(), "live ended".to_string());
        pairs.insert("order_by".to_string(), "start_asc".to_string());

        let decoded = decode_pairs(&encode_pairs(&pairs)).unwrap();
        assert_eq!(decoded, pairs);
    }

    #[test]
    fn test_decode_pairs_rejects_segment_without_equals() {
        assert!(decode_pairs("status").is_none());
        assert!(decode_pairs("a=1&&b=2").is_none());
    }
}
