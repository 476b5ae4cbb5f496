//! # LWS Rollout Validation
//!
//! Admission-time validation of LeaderWorkerSet rollout limits. A limit is an
//! [`IntOrString`]: either a plain integer (`1`) or a percentage (`"25%"`).
//!
//! ## Operations
//!
//! - [`extract_percent`]: reads the magnitude of a `[0-9]+%` string
//! - [`check_non_negative`]: integer must be positive, optionally zero
//! - [`check_not_over_hundred_percent`]: percentage must not exceed 100%
//! - [`validate_positive_int_or_percent`]: dispatches on representation
//! - [`validate_rolling_update`]: validates `maxUnavailable` and `maxSurge`
//! - [`scaled_value`]: resolves a limit against a replica count
//!
//! ## Result shapes
//!
//! Validators return an [`ErrorList`](lws_types::ErrorList). An empty list
//! means the value was checked and passed. [`check_not_over_hundred_percent`]
//! returns `Option<ErrorList>` and uses `None` when its input is not a
//! percentage at all; that is not the same as passing.
//!
//! The 100% cap is deliberately not part of
//! [`validate_positive_int_or_percent`]. Callers needing both run both.
//!
//! ## Usage Example
//!
//! ```ignore
//! use lws_rollout_validation::{check_not_over_hundred_percent, validate_positive_int_or_percent};
//! use lws_types::{FieldPath, IntOrString};
//!
//! let path = FieldPath::new("spec").child("maxSurge");
//! let value = IntOrString::from("150%");
//!
//! let mut errs = validate_positive_int_or_percent(&value, &path, true);
//! if let Some(cap) = check_not_over_hundred_percent(&value, &path) {
//!     errs.extend(cap);
//! }
//! assert_eq!(errs.len(), 1);
//! ```

pub mod domain;
pub mod error;

pub use domain::{
    check_non_negative, check_not_over_hundred_percent, extract_percent, scaled_value,
    validate_positive_int_or_percent, validate_rolling_update, RollingUpdateConfiguration,
    RollingUpdateConfigurationBuilder,
};
pub use error::ScaleError;
pub use lws_types::IntOrString;
