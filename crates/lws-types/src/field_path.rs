//! # Field Path
//!
//! Locator for a field inside a larger resource, e.g.
//! `spec.rolloutStrategy.rollingUpdateConfiguration.maxSurge`.
//!
//! Validators treat a path as opaque: they receive one and copy it into the
//! errors they emit.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Segment {
    Name(String),
    Index(usize),
    Key(String),
}

/// Immutable path to a field. Cloning shares the parent chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    parent: Option<Arc<FieldPath>>,
    segment: Segment,
}

impl FieldPath {
    /// Creates a root path with a single field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            parent: None,
            segment: Segment::Name(name.into()),
        }
    }

    /// Appends a field name.
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self {
            parent: Some(Arc::new(self.clone())),
            segment: Segment::Name(name.into()),
        }
    }

    /// Appends a list index.
    pub fn index(&self, index: usize) -> Self {
        Self {
            parent: Some(Arc::new(self.clone())),
            segment: Segment::Index(index),
        }
    }

    /// Appends a map key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        Self {
            parent: Some(Arc::new(self.clone())),
            segment: Segment::Key(key.into()),
        }
    }

    /// Returns the outermost ancestor of this path.
    pub fn root(&self) -> &FieldPath {
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            current = parent;
        }
        current
    }

    fn segments(&self) -> Vec<&Segment> {
        let mut out = Vec::new();
        let mut current = Some(self);
        while let Some(path) = current {
            out.push(&path.segment);
            current = path.parent.as_deref();
        }
        out.reverse();
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().into_iter().enumerate() {
            match segment {
                Segment::Name(name) if i == 0 => f.write_str(name)?,
                Segment::Name(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
