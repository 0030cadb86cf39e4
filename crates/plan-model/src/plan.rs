//! Plan: an ordered ground-action sequence from a reference initial state.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;
use crate::state::State;

/// A total-order plan as returned by an external planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub steps: Vec<Operator>,
    /// The state the plan was produced from
    pub initial: State,
}

impl Plan {
    pub fn new(steps: Vec<Operator>, initial: State) -> Self {
        Self { steps, initial }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
