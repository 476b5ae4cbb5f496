//! # Field Errors
//!
//! Structured validation failures. Downstream consumers match on the shape
//! (type, path, value, detail) rather than on a rendered string, so every
//! part is kept typed.

use crate::errors::ValidationError;
use crate::field_path::FieldPath;
use crate::int_or_string::IntOrString;
use serde::Serialize;
use std::fmt;

/// Kind of a field error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorType {
    /// The value is syntactically or semantically invalid.
    #[serde(rename = "FieldValueInvalid")]
    Invalid,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("Invalid value"),
        }
    }
}

/// The offending value carried by a [`FieldError`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum BadValue {
    /// A bare integer, as checked by numeric validators.
    Int(i64),
    /// The original int-or-string value, representation preserved.
    IntOrString(IntOrString),
}

impl fmt::Display for BadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::IntOrString(IntOrString::String(s)) => write!(f, "{:?}", s),
            Self::IntOrString(other) => write!(f, "{}", other),
        }
    }
}

impl From<i64> for BadValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<IntOrString> for BadValue {
    fn from(v: IntOrString) -> Self {
        Self::IntOrString(v)
    }
}

/// A single validation failure tied to a field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub field: FieldPath,
    pub bad_value: BadValue,
    pub detail: String,
}

impl FieldError {
    /// Creates an [`ErrorType::Invalid`] error.
    pub fn invalid(
        field: &FieldPath,
        bad_value: impl Into<BadValue>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: ErrorType::Invalid,
            field: field.clone(),
            bad_value: bad_value.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}: {}",
            self.field, self.error_type, self.bad_value, self.detail
        )
    }
}

/// Ordered list of field errors.
///
/// An empty list means validation ran and found nothing. Checks that may not
/// apply to an input return `Option<ErrorList>` and use `None` for that case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Collapses the list into a single `Result`.
    ///
    /// Returns `Ok(())` for an empty list.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            return Ok(());
        }
        let summary = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(ValidationError::Invalid {
            count: self.0.len(),
            summary,
        })
    }
}

impl From<Vec<FieldError>> for ErrorList {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl From<FieldError> for ErrorList {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
