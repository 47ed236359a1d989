//! Data type descriptors.
//!
//! The language only has built-in scalar types. A descriptor carries the
//! type's name and storage size; two descriptors are the same type when
//! their names match.

use std::{fmt::Display, hash::Hash};

use serde::Serialize;

pub const INT_TYPE_ID: &str = "Int";
pub const FLOAT_TYPE_ID: &str = "Float";
pub const BOOL_TYPE_ID: &str = "Bool";

#[derive(Debug, Clone, Serialize)]
pub struct TypeDescriptor {
    pub id: String,
    pub size_bytes: u32,
}

impl TypeDescriptor {
    pub fn new(id: impl Into<String>, size_bytes: u32) -> Self {
        TypeDescriptor {
            id: id.into(),
            size_bytes,
        }
    }

    pub fn int() -> Self {
        TypeDescriptor::new(INT_TYPE_ID, 4)
    }

    pub fn float() -> Self {
        TypeDescriptor::new(FLOAT_TYPE_ID, 4)
    }

    pub fn bool() -> Self {
        TypeDescriptor::new(BOOL_TYPE_ID, 1)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
