//! Parsing of short human duration tokens such as `10m` or `2h`.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Matches the first `<integer><unit>` run anywhere in the token.
///
/// Digits are ASCII only; other Unicode decimal digits never start a match.
static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([smhd])").expect("duration pattern is valid"));

/// Converts a duration unit suffix into its length in milliseconds.
fn unit_multiplier(unit: &str) -> u64 {
    match unit {
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        _ => 0,
    }
}

/// Parses a duration token into milliseconds.
///
/// Looks for the first run of ASCII digits immediately followed by one of `s`, `m`, `h`
/// or `d` and multiplies the number by the unit length. Tokens without such a run
/// parse to `0`, which callers treat as "fire immediately". There is no upper
/// bound; values beyond `u64::MAX` milliseconds saturate instead of failing.
///
/// # Arguments
/// - `token` - Free-form duration text, e.g. `"10m"` or `"in 2h please"`
///
/// # Returns
/// - `u64` - Milliseconds represented by the first matching run, or `0`
pub fn parse_duration_ms(token: &str) -> u64 {
    let Some(captures) = DURATION_PATTERN.captures(token) else {
        return 0;
    };

    // ASCII digits only, so the sole failure mode is overflow
    let value = captures[1].parse::<u64>().unwrap_or(u64::MAX);

    value.saturating_mul(unit_multiplier(&captures[2]))
}

/// Parses a duration token into a [`Duration`].
///
/// Same semantics as [`parse_duration_ms`].
pub fn parse_duration(token: &str) -> Duration {
    Duration::from_millis(parse_duration_ms(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests each supported unit against its multiplier.
    ///
    /// Expected: value multiplied by 1000, 60000, 3600000 and 86400000
    #[test]
    fn test_parse_each_unit() {
        assert_eq!(parse_duration_ms("1s"), 1_000);
        assert_eq!(parse_duration_ms("10m"), 600_000);
        assert_eq!(parse_duration_ms("2h"), 7_200_000);
        assert_eq!(parse_duration_ms("1d"), 86_400_000);
    }

    /// Tests that text without a digit+unit run falls back to zero.
    ///
    /// Expected: 0 for words, bare numbers, unknown units and empty input
    #[test]
    fn test_parse_without_match_is_zero() {
        assert_eq!(parse_duration_ms("soon"), 0);
        assert_eq!(parse_duration_ms("15"), 0);
        assert_eq!(parse_duration_ms("3w"), 0);
        assert_eq!(parse_duration_ms(""), 0);
    }

    /// Tests that only the first run is used and surrounding text is ignored.
    ///
    /// Expected: "1h30m" parses as one hour, "in 5m" as five minutes
    #[test]
    fn test_parse_uses_first_run() {
        assert_eq!(parse_duration_ms("1h30m"), 3_600_000);
        assert_eq!(parse_duration_ms("in 5m please"), 300_000);
        assert_eq!(parse_duration_ms("x 7 8s"), 8_000);
    }

    /// Tests that absurdly large values are accepted and saturate.
    ///
    /// Expected: u64::MAX rather than a panic
    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_duration_ms("99999999999999999999d"), u64::MAX);
        assert_eq!(parse_duration_ms("18446744073709551615m"), u64::MAX);
    }

    /// Tests that non-ASCII decimal digits are not read as a number.
    ///
    /// Expected: 0 when only Arabic-Indic, Devanagari or fullwidth digits precede
    /// the unit; a later ASCII run is still found
    #[test]
    fn test_parse_ignores_non_ascii_digits() {
        assert_eq!(parse_duration_ms("\u{663}s"), 0);
        assert_eq!(parse_duration_ms("\u{96B}m"), 0);
        assert_eq!(parse_duration_ms("\u{FF11}h"), 0);
        assert_eq!(parse_duration_ms("\u{663}s5m"), 300_000);
    }

    /// Tests the Duration wrapper.
    ///
    /// Expected: 90 seconds for "90s"
    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("90s"), Duration::from_secs(90));
        assert_eq!(parse_duration("later"), Duration::ZERO);
    }
}
