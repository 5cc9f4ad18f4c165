/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Parse a path segment into a [`DbId`].
///
/// Only plain ASCII digits are accepted (no sign, no whitespace), mirroring
/// the `{id:[0-9]+}` route constraint. Values that overflow `i64` are
/// rejected as well.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_db_id("42"), Some(42));
        assert_eq!(parse_db_id("0"), Some(0));
        assert_eq!(parse_db_id("007"), Some(7));
    }

    #[test]
    fn rejects_non_numeric_segments() {
        assert_eq!(parse_db_id("fish"), None);
        assert_eq!(parse_db_id("startup"), None);
        assert_eq!(parse_db_id("12a"), None);
        assert_eq!(parse_db_id(""), None);
    }

    #[test]
    fn rejects_signs_and_whitespace() {
        assert_eq!(parse_db_id("-1"), None);
        assert_eq!(parse_db_id("+1"), None);
        assert_eq!(parse_db_id(" 1"), None);
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_db_id("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_db_id("9223372036854775808"), None);
    }
}
