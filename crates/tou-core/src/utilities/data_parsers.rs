//! Data parsing helpers.
//!
//! Locale-neutral token parsing shared by [`IntegerRange::parse_range`]
//! and the field parsers built on top of it.
//!
//! [`IntegerRange::parse_range`]: crate::range::IntegerRange::parse_range

/// Parse a whole-number token such as `"12"`, `" 7 "` or `"-3"`.
///
/// Returns `None` for empty input, fractional values, or anything that does
/// not fit an `i32`.
pub fn parse_integer_token(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Parse a 24-hour `"HH:MM"` clock string into a minute of the day.
///
/// `"24:00"` is accepted and maps to 1440, the exclusive end of the day.
pub fn parse_clock_minutes(s: &str) -> Option<i32> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || m.len() != 2 {
        return None;
    }
    let hours: i32 = h.parse().ok()?;
    let minutes: i32 = m.parse().ok()?;
    if !(0..60).contains(&minutes) {
        return None;
    }
    match hours {
        0..=23 => Some(hours * 60 + minutes),
        24 if minutes == 0 => Some(1440),
        _ => None,
    }
}

/// Split `"4-6"` into `["4", "6"]` on the first `delimiter`.
///
/// Input without a delimiter yields a single token. Tokens are trimmed.
pub fn split_range_tokens(s: &str, delimiter: char) -> Vec<&str> {
    match s.split_once(delimiter) {
        Some((a, b)) => vec![a.trim(), b.trim()],
        None => vec![s.trim()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_token() {
        assert_eq!(parse_integer_token("12"), Some(12));
        assert_eq!(parse_integer_token(" 7 "), Some(7));
        assert_eq!(parse_integer_token("-3"), Some(-3));
        assert_eq!(parse_integer_token(""), None);
        assert_eq!(parse_integer_token("1.5"), None);
        assert_eq!(parse_integer_token("abc"), None);
    }

    #[test]
    fn test_parse_clock_minutes() {
        assert_eq!(parse_clock_minutes("00:00"), Some(0));
        assert_eq!(parse_clock_minutes("08:30"), Some(510));
        assert_eq!(parse_clock_minutes("17:05"), Some(1025));
        assert_eq!(parse_clock_minutes("24:00"), Some(1440));
        assert_eq!(parse_clock_minutes("24:01"), None);
        assert_eq!(parse_clock_minutes("12:60"), None);
        assert_eq!(parse_clock_minutes("1230"), None);
        assert_eq!(parse_clock_minutes("9:5"), None);
    }

    #[test]
    fn test_split_range_tokens() {
        assert_eq!(split_range_tokens("4-6", '-'), vec!["4", "6"]);
        assert_eq!(split_range_tokens(" 4 - 6 ", '-'), vec!["4", "6"]);
        assert_eq!(split_range_tokens("*", '-'), vec!["*"]);
        assert_eq!(split_range_tokens("08:00-17:30", '-'), vec!["08:00", "17:30"]);
    }
}
