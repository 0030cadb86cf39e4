//! Object: a named individual in the planning world.

use serde::{Deserialize, Serialize};

/// A domain individual with a single declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub type_name: String,
}

impl Object {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}
