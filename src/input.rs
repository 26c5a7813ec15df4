//! Coerces raw text from a duration input field into milliseconds. The clock
//! itself only accepts non-negative integers, so anything a user types has to
//! go through here first.

/// Parses the integer at the start of `text`. Leading whitespace and a sign
/// are accepted, and everything after the first non-digit is ignored, so
/// `"1500ms"` becomes `1500`. Text without leading digits becomes `0`, as do
/// negative numbers. Values too large for a `u64` saturate.
pub fn parse_duration(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        });

    if negative {
        0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::parse_duration;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_duration("300000"), 300_000);
        assert_eq!(parse_duration("  42"), 42);
        assert_eq!(parse_duration("+7"), 7);
    }

    #[test]
    fn non_numeric_is_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("abc"), 0);
        assert_eq!(parse_duration("-"), 0);
        assert_eq!(parse_duration(" "), 0);
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_duration("1500ms"), 1500);
        assert_eq!(parse_duration("12.9"), 12);
    }

    #[test]
    fn negative_is_zero() {
        assert_eq!(parse_duration("-5000"), 0);
    }

    #[test]
    fn saturates() {
        assert_eq!(parse_duration("99999999999999999999999"), u64::MAX);
    }
}
