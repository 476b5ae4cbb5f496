//! Rolling update configuration and its validation
//!
//! # Example
//!
//! ```ignore
//! use lws_rollout_validation::domain::RollingUpdateConfigurationBuilder;
//!
//! let config = RollingUpdateConfigurationBuilder::new()
//!     .max_unavailable("25%")
//!     .max_surge(1i64)
//!     .build()?;
//! ```

use super::checks::check_not_over_hundred_percent;
use super::messages::MAX_UNAVAILABLE_ZERO_WITH_ZERO_SURGE;
use super::percent::extract_percent;
use super::validator::validate_positive_int_or_percent;
use lws_types::{ErrorList, FieldError, FieldPath, IntOrString, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Limits applied while replacing groups during a rolling update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RollingUpdateConfiguration {
    /// Groups that may be unavailable during the update (count or percent).
    pub max_unavailable: IntOrString,
    /// Groups that may be created above the desired count (count or percent).
    pub max_surge: IntOrString,
}

impl Default for RollingUpdateConfiguration {
    fn default() -> Self {
        Self {
            max_unavailable: IntOrString::Int(1),
            max_surge: IntOrString::Int(0),
        }
    }
}

impl RollingUpdateConfiguration {
    /// Validates this configuration; see [`validate_rolling_update`].
    pub fn validate(&self, path: &FieldPath) -> ErrorList {
        validate_rolling_update(self, path)
    }
}

/// Validates both rollout limits under `path`.
///
/// Each limit must be a non-negative integer or a percentage no greater
/// than 100%, and the two may not both be zero. Errors are ordered
/// `maxUnavailable` checks, `maxSurge` checks, then the combined zero check.
pub fn validate_rolling_update(
    config: &RollingUpdateConfiguration,
    path: &FieldPath,
) -> ErrorList {
    let unavailable_path = path.child("maxUnavailable");
    let surge_path = path.child("maxSurge");

    let mut errs = ErrorList::new();
    for (value, field) in [
        (&config.max_unavailable, &unavailable_path),
        (&config.max_surge, &surge_path),
    ] {
        errs.extend(validate_positive_int_or_percent(value, field, true));
        if let Some(cap) = check_not_over_hundred_percent(value, field) {
            errs.extend(cap);
        }
    }

    if resolves_to_zero(&config.max_unavailable) && resolves_to_zero(&config.max_surge) {
        debug!(field = %unavailable_path, "Rejected zero maxUnavailable with zero maxSurge");
        errs.push(FieldError::invalid(
            &unavailable_path,
            config.max_unavailable.clone(),
            MAX_UNAVAILABLE_ZERO_WITH_ZERO_SURGE,
        ));
    }
    errs
}

fn resolves_to_zero(value: &IntOrString) -> bool {
    match value {
        IntOrString::Int(v) => *v == 0,
        IntOrString::String(_) => extract_percent(value) == Some(0),
        IntOrString::Unrecognized(_) => false,
    }
}

/// Builder for [`RollingUpdateConfiguration`] with validation
#[derive(Default)]
pub struct RollingUpdateConfigurationBuilder {
    max_unavailable: Option<IntOrString>,
    max_surge: Option<IntOrString>,
}

impl RollingUpdateConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_unavailable(mut self, value: impl Into<IntOrString>) -> Self {
        self.max_unavailable = Some(value.into());
        self
    }

    pub fn max_surge(mut self, value: impl Into<IntOrString>) -> Self {
        self.max_surge = Some(value.into());
        self
    }

    /// Build the configuration, rejecting it if any limit is invalid
    pub fn build(self) -> Result<RollingUpdateConfiguration, ValidationError> {
        let config = self.build_unchecked();
        validate_rolling_update(&config, &FieldPath::new("rollingUpdateConfiguration"))
            .into_result()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> RollingUpdateConfiguration {
        let defaults = RollingUpdateConfiguration::default();
        RollingUpdateConfiguration {
            max_unavailable: self.max_unavailable.unwrap_or(defaults.max_unavailable),
            max_surge: self.max_surge.unwrap_or(defaults.max_surge),
        }
    }
}
