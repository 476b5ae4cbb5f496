//! Positive-integer-or-percentage validation.

use super::checks::check_non_negative;
use super::messages::{invalid_percent_detail, MUST_BE_INT_OR_PERCENT};
use super::percent::extract_percent;
use lws_types::{ErrorList, FieldError, FieldPath, IntOrString};
use tracing::{debug, trace};

/// Validates a value that must be a positive integer or a percentage string.
///
/// - Integers go through [`check_non_negative`]; they have no upper bound.
/// - Strings must match `[0-9]+%`. Percentages are not capped at 100 here;
///   callers that need the cap also run
///   [`check_not_over_hundred_percent`](super::checks::check_not_over_hundred_percent).
/// - Any other representation is rejected.
///
/// Always returns a list, empty when the value is acceptable.
pub fn validate_positive_int_or_percent(
    value: &IntOrString,
    path: &FieldPath,
    allow_zero: bool,
) -> ErrorList {
    trace!(field = %path, tag = value.tag(), "Validating int-or-percent");
    let mut errs = ErrorList::new();
    match value {
        IntOrString::Int(v) => {
            errs.extend(check_non_negative(*v, path, allow_zero));
        }
        IntOrString::String(_) => {
            if extract_percent(value).is_none() {
                debug!(field = %path, value = %value, "Rejected malformed percentage");
                errs.push(FieldError::invalid(
                    path,
                    value.clone(),
                    invalid_percent_detail(),
                ));
            }
        }
        IntOrString::Unrecognized(tag) => {
            debug!(field = %path, tag, "Rejected unrecognized int-or-string type");
            errs.push(FieldError::invalid(path, value.clone(), MUST_BE_INT_OR_PERCENT));
        }
    }
    errs
}
