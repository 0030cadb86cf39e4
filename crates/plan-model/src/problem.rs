//! Problem: the objects and initial state of one planning task.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::object::Object;
use crate::state::State;

/// A planning problem instance against some domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    /// Name of the domain this problem belongs to
    pub domain: String,
    pub objects: Vec<Object>,
    /// The true initial state
    pub initial: State,
}

impl Problem {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        objects: Vec<Object>,
        initial: State,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            objects,
            initial,
        }
    }

    /// Type index: maps each declared type to the names of its objects,
    /// in declaration order. Used by relational grounding.
    pub fn objects_by_type(&self) -> HashMap<String, Vec<String>> {
        let mut index: HashMap<String, Vec<String>> = HashMap::new();
        for obj in &self.objects {
            index
                .entry(obj.type_name.clone())
                .or_default()
                .push(obj.name.clone());
        }
        index
    }

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }
}
