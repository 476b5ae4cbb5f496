//! Resolves an int-or-percent limit to an absolute replica count.

use super::percent::extract_percent;
use crate::error::ScaleError;
use lws_types::IntOrString;

/// Resolves `value` against `total`.
///
/// Integers are returned as-is. Percentages yield `total * pct / 100`,
/// rounded up when `round_up` is set and down otherwise.
///
/// `maxSurge` is conventionally resolved rounding up and `maxUnavailable`
/// rounding down.
pub fn scaled_value(value: &IntOrString, total: i64, round_up: bool) -> Result<i64, ScaleError> {
    let percent = match value {
        IntOrString::Int(v) => return Ok(*v),
        IntOrString::String(s) => {
            extract_percent(value).ok_or_else(|| ScaleError::NotAPercentage(s.clone()))?
        }
        IntOrString::Unrecognized(tag) => return Err(ScaleError::UnrecognizedType(*tag)),
    };

    let product = total
        .checked_mul(percent)
        .ok_or(ScaleError::Overflow { total, percent })?;
    let floor = product.div_euclid(100);
    if round_up && product.rem_euclid(100) != 0 {
        Ok(floor + 1)
    } else {
        Ok(floor)
    }
}
