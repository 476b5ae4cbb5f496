//! Percentage extraction from an [`IntOrString`].

use lazy_static::lazy_static;
use lws_types::IntOrString;
use regex::Regex;

lazy_static! {
    /// Whole-string match: ASCII digits followed by a single `%`.
    static ref PERCENT_PATTERN: Regex =
        Regex::new(r"^[0-9]+%$").expect("percent pattern is a valid regex");
}

/// Reads the magnitude of a percentage string such as `"25%"`.
///
/// Returns `None` for the integer form, for unrecognized values, for any
/// string that is not digits followed by `%` (no sign, whitespace or
/// decimal point), and for digit runs that overflow `i64`.
/// `"0%"` yields `Some(0)`; whether zero is acceptable is up to the caller.
pub fn extract_percent(value: &IntOrString) -> Option<i64> {
    let s = value.as_str()?;
    if !PERCENT_PATTERN.is_match(s) {
        return None;
    }
    s[..s.len() - 1].parse::<i64>().ok()
}
