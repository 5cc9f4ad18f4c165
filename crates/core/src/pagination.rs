//! Page window rules for the startup listing.
//!
//! `start` and `count` arrive as raw query strings. Unparseable values fall
//! back to zero instead of failing the request; the clamps below then turn
//! that zero into a usable window. Callers rely on this leniency, so keep it.

/// Page size used when the requested count is out of range.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Parse an optional query value as an integer, defaulting to `0` when it is
/// absent or malformed.
pub fn parse_lenient(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Any count outside `[1, MAX_PAGE_SIZE]` resets to [`DEFAULT_PAGE_SIZE`].
pub fn clamp_count(count: i64) -> i64 {
    if (1..=MAX_PAGE_SIZE).contains(&count) {
        count
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// Negative offsets reset to `0`.
pub fn clamp_start(start: i64) -> i64 {
    start.max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_lenient -------------------------------------------------------

    #[test]
    fn parse_lenient_reads_integers() {
        assert_eq!(parse_lenient(Some("5")), 5);
        assert_eq!(parse_lenient(Some("-3")), -3);
    }

    #[test]
    fn parse_lenient_defaults_to_zero() {
        assert_eq!(parse_lenient(None), 0);
        assert_eq!(parse_lenient(Some("")), 0);
        assert_eq!(parse_lenient(Some("ten")), 0);
        assert_eq!(parse_lenient(Some("1.5")), 0);
    }

    // -- clamp_count ---------------------------------------------------------

    #[test]
    fn clamp_count_passes_through_valid_value() {
        for count in 1..=MAX_PAGE_SIZE {
            assert_eq!(clamp_count(count), count);
        }
    }

    #[test]
    fn clamp_count_resets_out_of_range_to_default() {
        assert_eq!(clamp_count(0), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_count(-4), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_count(11), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_count(i64::MAX), DEFAULT_PAGE_SIZE);
    }

    // -- clamp_start ---------------------------------------------------------

    #[test]
    fn clamp_start_floors_at_zero() {
        assert_eq!(clamp_start(-10), 0);
        assert_eq!(clamp_start(i64::MIN), 0);
    }

    #[test]
    fn clamp_start_passes_through_valid_value() {
        assert_eq!(clamp_start(0), 0);
        assert_eq!(clamp_start(40), 40);
    }
}
