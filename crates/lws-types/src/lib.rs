//! # LWS Types Crate
//!
//! Value types shared by the LeaderWorkerSet validators.
//!
//! ## Design Principles
//!
//! - **Typed values**: an int-or-string value is an enum, so exactly one
//!   representation is active at a time.
//! - **Structured errors**: a [`FieldError`] keeps its path, offending value
//!   and detail separate; nothing is flattened to a string until display.
//! - **Absent vs. empty**: an empty [`ErrorList`] means "checked, no
//!   violation". Checks that may not apply return `Option<ErrorList>`.

pub mod errors;
pub mod field_error;
pub mod field_path;
pub mod int_or_string;

pub use errors::*;
pub use field_error::{BadValue, ErrorList, ErrorType, FieldError};
pub use field_path::FieldPath;
pub use int_or_string::{IntOrString, INT_TAG, STRING_TAG};
