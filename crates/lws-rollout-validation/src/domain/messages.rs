//! Fixed detail messages.
//!
//! Consumers match on these strings, so they are reproduced byte-for-byte,
//! including the misspelling in [`MUST_BE_GREATER_THAN_ZERO`].

/// Detail for a non-positive integer (or zero when zero is not allowed).
pub const MUST_BE_GREATER_THAN_ZERO: &str = "must be grater than 0";

/// Detail for a percentage above 100.
pub const MUST_NOT_EXCEED_HUNDRED_PERCENT: &str = "must not be greater than 100%";

/// Detail for a value that is neither an integer nor a string.
pub const MUST_BE_INT_OR_PERCENT: &str = "must be an integer or percentage (e.g '5%%')";

/// Lead sentence of the malformed-percentage detail.
pub const PERCENT_FORMAT_MESSAGE: &str =
    "a valid percent string must be a numeric string followed by an ending '%'";

/// Pattern a percentage string must match, as shown to users.
pub const PERCENT_FORMAT: &str = "[0-9]+%";

/// Examples shown alongside [`PERCENT_FORMAT`].
pub const PERCENT_EXAMPLES: [&str; 2] = ["1%", "93%"];

/// Detail when both rollout limits resolve to zero.
pub const MAX_UNAVAILABLE_ZERO_WITH_ZERO_SURGE: &str = "may not be 0 when maxSurge is 0";

/// Formats a regex-violation detail.
///
/// Examples are rendered as `'ex', ` with ` or ` before every example after
/// the first, which leaves a double space ahead of each `or`.
pub fn regex_error(msg: &str, fmt: &str, examples: &[&str]) -> String {
    if examples.is_empty() {
        return format!("{} (regex used for validation is '{}')", msg, fmt);
    }
    let mut out = format!("{} (e.g. ", msg);
    for (i, example) in examples.iter().enumerate() {
        if i > 0 {
            out.push_str(" or ");
        }
        out.push('\'');
        out.push_str(example);
        out.push_str("', ");
    }
    out.push_str("regex used for validation is '");
    out.push_str(fmt);
    out.push_str("')");
    out
}

/// Detail for a string that is not a well-formed percentage.
pub fn invalid_percent_detail() -> String {
    regex_error(PERCENT_FORMAT_MESSAGE, PERCENT_FORMAT, &PERCENT_EXAMPLES)
}
