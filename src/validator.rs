use std::collections::HashSet;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{AmountProblem, LedgerError, PeriodProblem, Result};
use crate::models::numeric_value;

fn period_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("period pattern is valid"))
}

/// True for strings of the exact form `YYYY-MM`. The month range is not checked.
pub fn is_period(s: &str) -> bool {
    period_pattern().is_match(s)
}

/// Check untrusted input before anything computes on it. The first violated
/// rule is reported; indexes in errors are 1-based.
pub fn validate(input: &Value) -> Result<()> {
    let list = input.as_array().ok_or(LedgerError::Shape)?;
    if list.is_empty() {
        return Err(LedgerError::Empty);
    }

    for (i, item) in list.iter().enumerate() {
        let index = i + 1;
        let record = item
            .as_object()
            .ok_or(LedgerError::ElementShape { index })?;
        check_month(record, index)?;
        check_amounts(record, index)?;
    }

    let mut seen = HashSet::new();
    for item in list {
        // Every element is an object with a string month by now.
        if let Some(month) = item.get("month").and_then(Value::as_str) {
            if !seen.insert(month) {
                return Err(LedgerError::DuplicatePeriod(month.to_string()));
            }
        }
    }

    debug!("validated {} records", list.len());
    Ok(())
}

fn check_month(record: &Map<String, Value>, index: usize) -> Result<()> {
    let Some(month) = record.get("month").and_then(Value::as_str) else {
        return Err(LedgerError::PeriodFormat {
            index,
            problem: PeriodProblem::NotString,
        });
    };
    if !is_period(month) {
        return Err(LedgerError::PeriodFormat {
            index,
            problem: PeriodProblem::BadFormat,
        });
    }
    Ok(())
}

fn check_amounts(record: &Map<String, Value>, index: usize) -> Result<()> {
    let (Some(apt1), Some(apt2)) = (record.get("apt1"), record.get("apt2")) else {
        return Err(LedgerError::NumericField {
            index,
            problem: AmountProblem::Missing,
        });
    };
    if numeric_value(apt1).is_none() || numeric_value(apt2).is_none() {
        return Err(LedgerError::NumericField {
            index,
            problem: AmountProblem::NotNumeric,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_input() {
        let input = json!([
            {"month": "2024-02", "apt1": 2000, "apt2": "1500", "note": "gas"},
            {"month": "2024-01", "apt1": 1000.4, "apt2": 1000},
        ]);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_rejects_non_array() {
        let err = validate(&json!({"month": "2024-01"})).unwrap_err();
        assert!(matches!(err, LedgerError::Shape));
        assert!(matches!(validate(&json!("2024-01")).unwrap_err(), LedgerError::Shape));
        assert!(matches!(validate(&Value::Null).unwrap_err(), LedgerError::Shape));
    }

    #[test]
    fn test_rejects_empty_array() {
        assert!(matches!(validate(&json!([])).unwrap_err(), LedgerError::Empty));
    }

    #[test]
    fn test_rejects_primitive_element_with_index() {
        let input = json!([
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            42,
        ]);
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, LedgerError::ElementShape { index: 2 }));
        assert_eq!(err.to_string(), "Record #2 is not an object.");

        let err = validate(&json!([null])).unwrap_err();
        assert!(matches!(err, LedgerError::ElementShape { index: 1 }));
    }

    #[test]
    fn test_rejects_bad_month() {
        let err = validate(&json!([{"month": 202401, "apt1": 1, "apt2": 2}])).unwrap_err();
        assert!(matches!(err, LedgerError::PeriodFormat { index: 1, .. }));

        for bad in ["2024-1", "24-01", "2024/01", "2024-01-01", " 2024-01", "２０２４-01"] {
            let err = validate(&json!([{"month": bad, "apt1": 1, "apt2": 2}])).unwrap_err();
            assert!(matches!(err, LedgerError::PeriodFormat { index: 1, .. }), "{bad}");
        }
    }

    #[test]
    fn test_month_range_is_not_checked() {
        let input = json!([{"month": "2024-13", "apt1": 1, "apt2": 2}]);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_rejects_missing_amount() {
        let input = json!([
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            {"month": "2024-02", "apt2": 2},
        ]);
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, LedgerError::NumericField { index: 2, .. }));
        assert_eq!(err.to_string(), "Record #2: apt1 and apt2 are required.");
    }

    #[test]
    fn test_rejects_non_numeric_amounts() {
        for bad in [json!("abc"), json!(""), json!(null), json!(true), json!([1]), json!("Infinity")] {
            let input = json!([{"month": "2024-01", "apt1": 1, "apt2": bad}]);
            let err = validate(&input).unwrap_err();
            assert!(matches!(err, LedgerError::NumericField { index: 1, .. }), "{input}");
        }
    }

    #[test]
    fn test_rejects_amounts_beyond_f64_range() {
        for (apt1, apt2) in [("1e400", "1"), ("1", "-1e400")] {
            let body = format!(r#"[{{"month": "2024-01", "apt1": {apt1}, "apt2": {apt2}}}]"#);
            let input: Value = serde_json::from_str(&body).unwrap();
            let err = validate(&input).unwrap_err();
            assert!(
                matches!(err, LedgerError::NumericField { index: 1, problem: AmountProblem::NotNumeric }),
                "{body}"
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_month() {
        let input = json!([
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            {"month": "2024-02", "apt1": 1, "apt2": 2},
            {"month": "2024-01", "apt1": 3, "apt2": 4},
        ]);
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, LedgerError::DuplicatePeriod(ref m) if m == "2024-01"));
        assert_eq!(err.to_string(), "Duplicate month in data file: 2024-01");
    }

    #[test]
    fn test_element_errors_win_over_duplicates() {
        let input = json!([
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            {"month": "bad", "apt1": 1, "apt2": 2},
        ]);
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, LedgerError::PeriodFormat { index: 3, .. }));
    }

    #[test]
    fn test_first_duplicate_in_forward_scan() {
        let input = json!([
            {"month": "2024-03", "apt1": 1, "apt2": 2},
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            {"month": "2024-01", "apt1": 1, "apt2": 2},
            {"month": "2024-03", "apt1": 1, "apt2": 2},
        ]);
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, LedgerError::DuplicatePeriod(ref m) if m == "2024-01"));
    }
}
