//! Client-side generation of business return numbers.

const RETURN_PREFIX: &str = "RET-";
const FIRST_SEQUENCE_BASE: u64 = 1000;

/// Next `RET-<n>` number: one past the highest number found in the existing
/// return numbers, starting from `RET-1001`.
///
/// The first run of digits of each return number is taken; blanks and zero
/// are ignored, as are numbers with no successor.
pub fn next_return_no<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let next = existing
        .into_iter()
        .filter_map(first_number)
        .filter(|n| *n > 0)
        .filter_map(|n| n.checked_add(1))
        .max()
        .unwrap_or(FIRST_SEQUENCE_BASE + 1);
    format!("{}{}", RETURN_PREFIX, next)
}

fn first_number(value: &str) -> Option<u64> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_highest() {
        assert_eq!(next_return_no(["RET-1001", "RET-1050"]), "RET-1051");
        assert_eq!(next_return_no(["RET-1050", "RET-1001"]), "RET-1051");
    }

    #[test]
    fn test_first_number_when_empty() {
        assert_eq!(next_return_no(Vec::<&str>::new()), "RET-1001");
        assert_eq!(next_return_no(["", "draft"]), "RET-1001");
    }

    #[test]
    fn test_low_numbers_still_count() {
        // the base only applies when nothing numeric exists
        assert_eq!(next_return_no(["RET-7"]), "RET-8");
        assert_eq!(next_return_no(["RET-0"]), "RET-1001");
    }

    #[test]
    fn test_takes_first_digit_run() {
        assert_eq!(next_return_no(["RET-2024-0005"]), "RET-2025");
    }

    #[test]
    fn test_number_at_integer_limit_is_skipped() {
        assert_eq!(next_return_no(["RET-18446744073709551615"]), "RET-1001");
        assert_eq!(
            next_return_no(["RET-18446744073709551615", "RET-1200"]),
            "RET-1201"
        );
        assert_eq!(
            next_return_no(["RET-18446744073709551614"]),
            "RET-18446744073709551615"
        );
    }
}
