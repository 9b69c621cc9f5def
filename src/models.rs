use serde::{Deserialize, Serialize};

/// One month of input as it appears in the data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub month: String,
    pub apt1: Amount,
    pub apt2: Amount,
    #[serde(default)]
    pub note: Option<serde_json::Value>,
}

/// A share amount as written in the file: a JSON number or a numeric string.
/// Kept as raw JSON so numbers beyond `f64` range reach the numeric check
/// instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub serde_json::Value);

impl Amount {
    /// The finite numeric value, or `None` if the amount doesn't parse.
    pub fn value(&self) -> Option<f64> {
        numeric_value(&self.0)
    }
}

/// Numeric value of a JSON number or numeric string, if finite.
pub fn numeric_value(v: &serde_json::Value) -> Option<f64> {
    match v {
        serde_json::Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        serde_json::Value::String(s) => parse_amount(s),
        _ => None,
    }
}

/// Parse a numeric string. Surrounding whitespace is ignored, blank strings
/// and non-finite values are rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A month after the chronological pass, with all derived fields filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedRecord {
    pub period: String,
    pub note: String,
    pub share_a: i64,
    pub share_b: i64,
    pub total: i64,
    pub remainder: i64,
    pub running_accumulator: i64,
}
