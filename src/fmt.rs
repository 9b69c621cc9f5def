/// Shown in place of any value when there is no data.
pub const PLACEHOLDER: &str = "\u{2014}";

const GROUP_SEPARATOR: char = '\u{202F}'; // narrow no-break space
const CURRENCY_SUFFIX: &str = " \u{20B4}";

/// Format a whole amount in hryvnias with grouped thousands: 1 234 567 ₴
pub fn currency(val: i64) -> String {
    let digits = val.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if val < 0 {
        format!("-{grouped}{CURRENCY_SUFFIX}")
    } else {
        format!("{grouped}{CURRENCY_SUFFIX}")
    }
}

pub fn currency_or_placeholder(val: Option<i64>) -> String {
    val.map(currency).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `YYYY-MM` with a non-breaking hyphen so the label never wraps.
pub fn period_label(period: &str) -> String {
    if period.is_empty() {
        return PLACEHOLDER.to_string();
    }
    period.replacen('-', "\u{2011}", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(currency(1234567), "1\u{202F}234\u{202F}567 \u{20B4}");
        assert_eq!(currency(-1500), "-1\u{202F}500 \u{20B4}");
        assert_eq!(currency(0), "0 \u{20B4}");
        assert_eq!(currency(999), "999 \u{20B4}");
        assert_eq!(currency(1000), "1\u{202F}000 \u{20B4}");
        assert_eq!(currency(-100000), "-100\u{202F}000 \u{20B4}");
    }

    #[test]
    fn test_currency_extremes() {
        assert_eq!(
            currency(i64::MIN),
            "-9\u{202F}223\u{202F}372\u{202F}036\u{202F}854\u{202F}775\u{202F}808 \u{20B4}"
        );
    }

    #[test]
    fn test_placeholder_when_absent() {
        assert_eq!(currency_or_placeholder(None), "\u{2014}");
        assert_eq!(currency_or_placeholder(Some(5000)), "5\u{202F}000 \u{20B4}");
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label("2024-03"), "2024\u{2011}03");
        assert_eq!(period_label(""), "\u{2014}");
    }
}
