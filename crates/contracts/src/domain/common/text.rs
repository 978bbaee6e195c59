//! Small text and number helpers shared by the record types.

/// A spreadsheet cell counts as filled when it holds anything but whitespace.
pub fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Best-effort number parse in the manner of a leading-number `parseFloat`:
/// `" 2.5 days"` gives `2.5`, while `""`, `"n/a"` and `"-"` give `0.0`.
/// The result is always finite.
pub fn parse_number_lossy(value: &str) -> f64 {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    // exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Leading integer of a string in the manner of `parseInt(s, 10)`.
pub fn leading_integer(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Half-up rounding (towards +inf on .5), as the browser's `Math.round` does.
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_set() {
        assert!(is_set("2024-05-01"));
        assert!(!is_set(""));
        assert!(!is_set("   "));
    }

    #[test]
    fn test_parse_number_lossy() {
        assert_eq!(parse_number_lossy("3"), 3.0);
        assert_eq!(parse_number_lossy(" 2.5 days"), 2.5);
        assert_eq!(parse_number_lossy("-1"), -1.0);
        assert_eq!(parse_number_lossy(".5"), 0.5);
        assert_eq!(parse_number_lossy("1e2"), 100.0);
        assert_eq!(parse_number_lossy("4e"), 4.0);
        assert_eq!(parse_number_lossy(""), 0.0);
        assert_eq!(parse_number_lossy("n/a"), 0.0);
        assert_eq!(parse_number_lossy("-"), 0.0);
        assert_eq!(parse_number_lossy("."), 0.0);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("1050"), Some(1050));
        assert_eq!(leading_integer("1005abc"), Some(1005));
        assert_eq!(leading_integer(" -7"), Some(-7));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn test_js_round_goes_up_on_half() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(74.4), 74.0);
    }
}
