//! Typed parameter records and their query-string encoding.

use std::collections::BTreeMap;

use thiserror::Error;

use super::query_string::QueryString;

/// Key that is reset to the first page whenever another filter changes.
pub const PAGE_KEY: &str = "page";

/// How a key is decoded from / encoded to the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    StringArray,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Number(f64),
    Boolean(bool),
    StringArray(Vec<String>),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::String(_) => ParamKind::String,
            ParamValue::Number(_) => ParamKind::Number,
            ParamValue::Boolean(_) => ParamKind::Boolean,
            ParamValue::StringArray(_) => ParamKind::StringArray,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::StringArray(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::StringArray(value.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("unknown url parameter `{0}`")]
    UnknownKey(String),
    #[error("url parameter `{key}` is declared as {expected:?}, got {actual:?}")]
    KindMismatch {
        key: String,
        expected: ParamKind,
        actual: ParamKind,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamField {
    pub key: String,
    pub kind: ParamKind,
    pub default: ParamValue,
}

/// Declared shape of a parameter record: keys in declaration order, each with
/// its kind and default. Array keys always default to an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSchema {
    fields: Vec<ParamField>,
}

impl ParamSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(self, key: &str, default: &str) -> Self {
        self.field(key, ParamKind::String, ParamValue::String(default.to_string()))
    }

    pub fn number(self, key: &str, default: f64) -> Self {
        self.field(key, ParamKind::Number, ParamValue::Number(default))
    }

    pub fn boolean(self, key: &str, default: bool) -> Self {
        self.field(key, ParamKind::Boolean, ParamValue::Boolean(default))
    }

    pub fn string_array(self, key: &str) -> Self {
        self.field(key, ParamKind::StringArray, ParamValue::StringArray(Vec::new()))
    }

    fn field(mut self, key: &str, kind: ParamKind, default: ParamValue) -> Self {
        // Redeclaring a key replaces it in place.
        self.fields.retain(|f| f.key != key);
        self.fields.push(ParamField {
            key: key.to_string(),
            kind,
            default,
        });
        self
    }

    pub fn fields(&self) -> &[ParamField] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&ParamField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Record made only of defaults (what an empty query string decodes to).
    pub fn defaults(&self) -> ParamRecord {
        ParamRecord {
            values: self
                .fields
                .iter()
                .map(|f| (f.key.clone(), f.default.clone()))
                .collect(),
        }
    }

    /// Checks that `value` fits the declared kind of `key`.
    pub fn validate(&self, key: &str, value: &ParamValue) -> Result<(), ParamError> {
        let field = self
            .get(key)
            .ok_or_else(|| ParamError::UnknownKey(key.to_string()))?;
        if field.kind != value.kind() {
            return Err(ParamError::KindMismatch {
                key: key.to_string(),
                expected: field.kind,
                actual: value.kind(),
            });
        }
        Ok(())
    }

    /// Derives the record for a query string. Absent keys take their default;
    /// keys outside the schema are ignored.
    pub fn decode(&self, search: &str) -> ParamRecord {
        let query = QueryString::parse(search);
        let mut record = self.defaults();
        for field in &self.fields {
            let value = match field.kind {
                ParamKind::StringArray => {
                    if !query.contains(&field.key) {
                        continue;
                    }
                    ParamValue::StringArray(
                        query.get_all(&field.key).into_iter().map(str::to_string).collect(),
                    )
                }
                _ => match query.get(&field.key) {
                    Some(raw) => decode_scalar(raw, &field.default),
                    None => continue,
                },
            };
            record.values.insert(field.key.clone(), value);
        }
        record
    }

    /// Canonical query string for `record`: declaration order, default-valued
    /// keys omitted, array keys repeated once per element.
    pub fn encode(&self, record: &ParamRecord) -> String {
        let mut query = QueryString::new();
        self.encode_into(record, &mut query);
        query.to_string()
    }

    /// Appends the pairs of `record` to `query`, as [`ParamSchema::encode`] does.
    pub fn encode_into(&self, record: &ParamRecord, query: &mut QueryString) {
        for field in &self.fields {
            let Some(value) = record.get(&field.key) else {
                continue;
            };
            match value {
                ParamValue::StringArray(items) => {
                    for item in items {
                        query.append(&field.key, item.as_str());
                    }
                }
                scalar => {
                    if !is_default(scalar, &field.default) {
                        query.append(&field.key, encode_scalar(scalar));
                    }
                }
            }
        }
    }
}

fn decode_scalar(raw: &str, default: &ParamValue) -> ParamValue {
    match default {
        ParamValue::Number(fallback) => ParamValue::Number(parse_number(raw).unwrap_or(*fallback)),
        ParamValue::Boolean(_) => ParamValue::Boolean(raw == "true"),
        _ => ParamValue::String(raw.to_string()),
    }
}

/// Numeric coercion with the browser's `Number(..)` rules for the cases that
/// matter here: surrounding whitespace is ignored and an empty string is 0.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    // Rust also accepts "inf"/"nan" spellings that `Number(..)` rejects.
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn is_default(value: &ParamValue, default: &ParamValue) -> bool {
    match (value, default) {
        // An empty string only collapses into "unset" when the default is
        // itself empty; otherwise `key=` is written so the choice survives a reload.
        (ParamValue::String(v), ParamValue::String(d)) => v == d,
        (ParamValue::Number(v), ParamValue::Number(d)) => v.is_nan() || v == d,
        (ParamValue::Boolean(v), ParamValue::Boolean(d)) => v == d,
        _ => false,
    }
}

fn encode_scalar(value: &ParamValue) -> String {
    match value {
        ParamValue::String(s) => s.clone(),
        ParamValue::Number(n) => format_number(*n),
        ParamValue::Boolean(b) => b.to_string(),
        ParamValue::StringArray(items) => items.join(","),
    }
}

/// Formats like JavaScript's `String(n)` for integral values (`3`, not `3.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parameter values for one URL snapshot. Every schema key is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamRecord {
    values: BTreeMap<String, ParamValue>,
}

impl ParamRecord {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: &str, value: ParamValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn string(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(ParamValue::String(s)) => s,
            _ => "",
        }
    }

    pub fn number(&self, key: &str) -> f64 {
        match self.values.get(key) {
            Some(ParamValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    pub fn boolean(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(ParamValue::Boolean(true)))
    }

    pub fn strings(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(ParamValue::StringArray(items)) => items,
            _ => &[],
        }
    }
}
