//! Range checks for rollout limits.
//!
//! Two independent checks:
//! - [`check_non_negative`]: integer must be positive (or zero when allowed)
//! - [`check_not_over_hundred_percent`]: percentage must not exceed 100

use super::messages::{MUST_BE_GREATER_THAN_ZERO, MUST_NOT_EXCEED_HUNDRED_PERCENT};
use super::percent::extract_percent;
use lws_types::{ErrorList, FieldError, FieldPath, IntOrString};
use tracing::debug;

/// Checks that `value` is greater than zero, or equal to zero when
/// `allow_zero` is set.
///
/// Always returns a list: empty when the value passes, one error otherwise.
pub fn check_non_negative(value: i64, path: &FieldPath, allow_zero: bool) -> ErrorList {
    let mut errs = ErrorList::new();
    if value > 0 || (value == 0 && allow_zero) {
        return errs;
    }
    debug!(field = %path, value, allow_zero, "Rejected non-positive value");
    errs.push(FieldError::invalid(path, value, MUST_BE_GREATER_THAN_ZERO));
    errs
}

/// Checks that a percentage does not exceed 100%.
///
/// Returns `None` when `value` is not a well-formed percentage string; this
/// check only judges percentages and leaves everything else to the caller.
/// Otherwise returns an empty list, or one error carrying the original value
/// when the percentage is above 100.
pub fn check_not_over_hundred_percent(value: &IntOrString, path: &FieldPath) -> Option<ErrorList> {
    let percent = extract_percent(value)?;
    let mut errs = ErrorList::new();
    if percent > 100 {
        debug!(field = %path, percent, "Rejected percentage above 100");
        errs.push(FieldError::invalid(
            path,
            value.clone(),
            MUST_NOT_EXCEED_HUNDRED_PERCENT,
        ));
    }
    Some(errs)
}
