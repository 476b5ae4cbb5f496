//! # IntOrString
//!
//! A value that is either a plain integer or a string, most commonly a
//! percentage such as `"25%"`. Rollout limits (`maxUnavailable`, `maxSurge`)
//! are expressed with this type.

use crate::errors::IntOrStringError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Representation tag of the integer form on the tagged wire encoding.
pub const INT_TAG: i64 = 0;

/// Representation tag of the string form on the tagged wire encoding.
pub const STRING_TAG: i64 = 1;

/// An integer or a string, never both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntOrString {
    /// Plain integer form.
    Int(i64),
    /// String form, usually a percentage.
    String(String),
    /// A value decoded from a representation tag that is neither
    /// [`INT_TAG`] nor [`STRING_TAG`]. Carries the raw tag.
    Unrecognized(i64),
}

impl IntOrString {
    /// Builds a value from the tagged encoding (`type`, `intVal`, `strVal`).
    ///
    /// Only the payload selected by `tag` is kept.
    pub fn from_tagged(tag: i64, int_val: i64, str_val: impl Into<String>) -> Self {
        match tag {
            INT_TAG => Self::Int(int_val),
            STRING_TAG => Self::String(str_val.into()),
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the representation tag of this value.
    pub fn tag(&self) -> i64 {
        match self {
            Self::Int(_) => INT_TAG,
            Self::String(_) => STRING_TAG,
            Self::Unrecognized(tag) => *tag,
        }
    }

    /// Integer view of the value.
    ///
    /// Strings are parsed as decimal integers and yield 0 when they are not
    /// one (so `"25%"` yields 0). Unrecognized values yield 0.
    pub fn int_value(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            Self::String(s) => s.parse().unwrap_or(0),
            Self::Unrecognized(_) => 0,
        }
    }

    /// Returns the string payload, if this is the string form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::String(s) => f.write_str(s),
            Self::Unrecognized(tag) => write!(f, "<unrecognized type {}>", tag),
        }
    }
}

impl From<i64> for IntOrString {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for IntOrString {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for IntOrString {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for IntOrString {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl Serialize for IntOrString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::String(s) => serializer.serialize_str(s),
            // No JSON shape exists for an unknown representation.
            Self::Unrecognized(_) => serializer.serialize_none(),
        }
    }
}

struct IntOrStringVisitor;

impl<'de> Visitor<'de> for IntOrStringVisitor {
    type Value = IntOrString;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(IntOrString::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(IntOrString::Int)
            .map_err(|_| E::custom(IntOrStringError::IntegerOverflow(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(IntOrString::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(IntOrString::String(v))
    }
}

impl<'de> Deserialize<'de> for IntOrString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntOrStringVisitor)
    }
}
