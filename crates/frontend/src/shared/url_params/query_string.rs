//! `application/x-www-form-urlencoded` query strings, as produced and read by
//! the browser's `URLSearchParams`.
//!
//! Keys may repeat (`fulfillmentModel=FBM&fulfillmentModel=DS`); pair order is kept.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `a=1&b=2` (a leading `?` is ignored). Malformed percent
    /// sequences are kept lossily instead of failing the whole query.
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        let pairs = input
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (form_decode(key), form_decode(value))
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in query order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Sets a single value: the first pair for `key` is overwritten in place
    /// and any other pairs for it are removed.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                self.pairs[pos].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = k != key || index == pos;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Removes every pair for `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", form_encode(key), form_encode(value))?;
        }
        Ok(())
    }
}

/// Encodes like `URLSearchParams`: alphanumerics and `*-._` stay as-is,
/// space becomes `+`, everything else is percent-encoded as UTF-8.
pub fn form_encode(input: &str) -> String {
    urlencoding::encode(input)
        .replace("%20", "+")
        .replace('~', "%7E")
        .replace("%2A", "*")
}

pub fn form_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(plus_decoded.as_bytes()))
            .into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_keys() {
        let qs = QueryString::parse("?fulfillmentModel=FBM&sku=A1&fulfillmentModel=DS");
        assert_eq!(qs.get("sku"), Some("A1"));
        assert_eq!(qs.get_all("fulfillmentModel"), vec!["FBM", "DS"]);
        assert_eq!(qs.get("missing"), None);
    }

    #[test]
    fn test_parse_without_value() {
        let qs = QueryString::parse("flag&sku=");
        assert_eq!(qs.get("flag"), Some(""));
        assert_eq!(qs.get("sku"), Some(""));
    }

    #[test]
    fn test_encoding_matches_url_search_params() {
        let mut qs = QueryString::new();
        qs.set("vendor", "Acme & Sons");
        qs.set("note", "a*b~c");
        qs.set("city", "دبي");
        assert_eq!(
            qs.to_string(),
            "vendor=Acme+%26+Sons&note=a*b%7Ec&city=%D8%AF%D8%A8%D9%8A"
        );
    }

    #[test]
    fn test_decode_plus_and_percent() {
        let qs = QueryString::parse("vendor=Acme+%26+Sons&sku=%41B");
        assert_eq!(qs.get("vendor"), Some("Acme & Sons"));
        assert_eq!(qs.get("sku"), Some("AB"));
    }

    #[test]
    fn test_malformed_percent_is_lossy() {
        let qs = QueryString::parse("sku=%FF");
        assert_eq!(qs.get("sku"), Some("\u{FFFD}"));
    }

    #[test]
    fn test_remove_drops_every_value() {
        let mut qs = QueryString::parse("a=1&b=2&a=3");
        qs.remove("a");
        qs.remove("missing");
        assert_eq!(qs.to_string(), "b=2");
    }

    #[test]
    fn test_set_replaces_all_values() {
        let mut qs = QueryString::parse("a=1&b=2&a=3");
        qs.set("a", "9");
        assert_eq!(qs.to_string(), "a=9&b=2");
    }
}
