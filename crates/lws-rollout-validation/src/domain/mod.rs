//! Domain Layer - Pure validation logic
//!
//! This layer contains:
//! - Percentage extraction from int-or-string values
//! - Range checks (non-negative, not over 100%)
//! - The positive-int-or-percent validator
//! - Rolling update configuration and its validation
//! - Resolution of a limit against a replica count
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions only

pub mod checks;
pub mod messages;
pub mod percent;
pub mod rolling_update;
pub mod scaling;
pub mod validator;

pub use checks::{check_non_negative, check_not_over_hundred_percent};
pub use messages::{invalid_percent_detail, regex_error};
pub use percent::extract_percent;
pub use rolling_update::{
    validate_rolling_update, RollingUpdateConfiguration, RollingUpdateConfigurationBuilder,
};
pub use scaling::scaled_value;
pub use validator::validate_positive_int_or_percent;
