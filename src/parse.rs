//! Lenient numeric parsing of raw field text
//!
//! Browsers hand over every control value as text. The age control is read
//! the forgiving way, by its leading integer ("30 years" is 30, "0x1E" is
//! 30), while the price control must be a number in its entirety.

/// Parse the leading integer of `input`.
///
/// Leading whitespace is skipped and one `+` or `-` sign is accepted. A `0x`
/// or `0X` prefix switches to base 16. Parsing stops at the first character
/// that is not a digit of the base. Returns `None` when no digit follows the
/// sign and prefix. Values beyond `i64` saturate.
///
/// ```
/// use bikeform::parse::leading_int;
///
/// assert_eq!(leading_int("30"), Some(30));
/// assert_eq!(leading_int("  -1"), Some(-1));
/// assert_eq!(leading_int("42 years"), Some(42));
/// assert_eq!(leading_int("12.9"), Some(12));
/// assert_eq!(leading_int("0x10"), Some(16));
/// assert_eq!(leading_int("0x"), None);
/// assert_eq!(leading_int("abc"), None);
/// assert_eq!(leading_int("-"), None);
/// ```
pub fn leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).map_or(0, i64::from);
        acc.saturating_mul(i64::from(radix)).saturating_add(digit)
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse `input` as a decimal number, ignoring surrounding whitespace.
///
/// The whole string has to be numeric. Empty input is `None`, not zero.
///
/// ```
/// use bikeform::parse::number;
///
/// assert_eq!(number("500"), Some(500.0));
/// assert_eq!(number(" 1499.99 "), Some(1499.99));
/// assert_eq!(number("1e3"), Some(1000.0));
/// assert_eq!(number(""), None);
/// assert_eq!(number("500€"), None);
/// ```
pub fn number(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}
