use crate::domain::common::leading_integer;

const PAYMENT_SEQUENCE_BASE: i64 = 1000;

/// Next `PAY-<year>-<n>` number.
///
/// The sequence is read from the segment after the last `-` of each existing
/// payment number and is shared across years. A sequence at the integer
/// limit has no successor and is ignored.
pub fn next_payment_number<'a, I>(existing: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let next = existing
        .into_iter()
        .filter_map(|number| number.rsplit('-').next().and_then(leading_integer))
        .filter(|n| *n > 0)
        .filter_map(|n| n.checked_add(1))
        .max()
        .unwrap_or(PAYMENT_SEQUENCE_BASE + 1);
    format!("PAY-{}-{}", year, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_payment_of_the_year() {
        assert_eq!(next_payment_number(Vec::<&str>::new(), 2024), "PAY-2024-1001");
    }

    #[test]
    fn test_sequence_continues_across_years() {
        let existing = ["PAY-2023-1004", "PAY-2024-1002"];
        assert_eq!(next_payment_number(existing, 2024), "PAY-2024-1005");
    }

    #[test]
    fn test_ignores_unparseable_numbers() {
        let existing = ["", "PAY-2024-draft", "PAY-2024-0"];
        assert_eq!(next_payment_number(existing, 2025), "PAY-2025-1001");
    }

    #[test]
    fn test_sequence_at_integer_limit_is_skipped() {
        let existing = ["PAY-2024-9223372036854775807"];
        assert_eq!(next_payment_number(existing, 2024), "PAY-2024-1001");

        let existing = ["PAY-2024-9223372036854775807", "PAY-2024-1010"];
        assert_eq!(next_payment_number(existing, 2024), "PAY-2024-1011");
    }
}
