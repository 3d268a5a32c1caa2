//! Query string parsing module
//!
//! Turns the raw query component of a request URI into an owned key/value
//! map, so handlers work on plain data instead of ambient request state.

use std::collections::HashMap;

/// Parse a raw query string into a key/value map.
///
/// Keys and values are percent-decoded and `+` is treated as a space,
/// matching what a form-encoded GET query carries. A key that appears
/// more than once keeps its last value. A pair without `=` maps the whole
/// token to an empty value.
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let Some(query) = query else {
        return params;
    };

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        params.insert(decode_component(key), decode_component(value));
    }

    params
}

/// Percent-decode a single query component.
///
/// Malformed escapes are kept literally rather than rejected; a query
/// never fails to parse, the handler decides what is valid.
fn decode_component(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    // Invalid UTF-8 after decoding degrades to replacement characters
    String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query() {
        assert!(parse_query(None).is_empty());
        assert!(parse_query(Some("")).is_empty());
    }

    #[test]
    fn test_simple_pairs() {
        let params = parse_query(Some("package=app.deb&tag=2.3.1"));
        assert_eq!(params.get("package").map(String::as_str), Some("app.deb"));
        assert_eq!(params.get("tag").map(String::as_str), Some("2.3.1"));
    }

    #[test]
    fn test_percent_decoding() {
        let params = parse_query(Some("package=weird%20name.deb"));
        assert_eq!(
            params.get("package").map(String::as_str),
            Some("weird name.deb")
        );
    }

    #[test]
    fn test_plus_as_space() {
        let params = parse_query(Some("package=weird+name.deb"));
        assert_eq!(
            params.get("package").map(String::as_str),
            Some("weird name.deb")
        );
    }

    #[test]
    fn test_malformed_escape_kept_literally() {
        let params = parse_query(Some("package=50%25off.deb&tag=%zz"));
        assert_eq!(
            params.get("package").map(String::as_str),
            Some("50%off.deb")
        );
        assert_eq!(params.get("tag").map(String::as_str), Some("%zz"));
    }

    #[test]
    fn test_key_without_value() {
        let params = parse_query(Some("package"));
        assert_eq!(params.get("package").map(String::as_str), Some(""));
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let params = parse_query(Some("tag=1.0&tag=2.0"));
        assert_eq!(params.get("tag").map(String::as_str), Some("2.0"));
    }
}
