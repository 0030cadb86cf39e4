//! Operator: an action schema or a ground action instance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::predicate::Predicate;
use crate::term::Term;

/// A STRIPS action. Schema-level operators have unbound parameters;
/// ground actions have every parameter bound to an object name.
///
/// Effects are a single ordered list of signed literals: a positive
/// effect is an add, a negative effect a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    /// The object performing the action; `None` for exogenous actions
    pub actor: Option<String>,
    /// Typed parameter slots
    pub parameters: Vec<Term>,
    pub preconditions: Vec<Predicate>,
    pub effects: Vec<Predicate>,
}

impl Operator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actor: None,
            parameters: Vec::new(),
            preconditions: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Term>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_preconditions(mut self, preconditions: Vec<Predicate>) -> Self {
        self.preconditions = preconditions;
        self
    }

    pub fn with_effects(mut self, effects: Vec<Predicate>) -> Self {
        self.effects = effects;
        self
    }

    /// True when every parameter is bound.
    pub fn is_ground(&self) -> bool {
        self.parameters.iter().all(Term::is_bound)
    }

    /// Recover the parametrized schema this ground action was instantiated
    /// from: every parameter binding is cleared, and any precondition or
    /// effect term bound to one of the parameter constants is unbound with
    /// it. Calling this on a schema returns it unchanged.
    pub fn template(&self) -> Operator {
        let bound: Vec<&str> = self
            .parameters
            .iter()
            .filter_map(Term::constant)
            .collect();

        let unbind_matching = |pred: &Predicate| {
            let mut cleared = pred.clone();
            cleared.observed_by.clear();
            for term in &mut cleared.terms {
                if term.constant().is_some_and(|c| bound.contains(&c)) {
                    term.unbind();
                }
            }
            cleared
        };

        Operator {
            name: self.name.clone(),
            actor: None,
            parameters: self.parameters.iter().map(|p| Term::typed(&p.type_name)).collect(),
            preconditions: self.preconditions.iter().map(unbind_matching).collect(),
            effects: self.effects.iter().map(unbind_matching).collect(),
        }
    }
}

impl fmt::Display for Operator {
    /// PDDL-plan-style rendering: `(move alice kitchen hall)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for param in &self.parameters {
            match param.constant() {
                Some(constant) => write!(f, " {}", constant)?,
                None => write!(f, " ?{}", param.type_name)?,
            }
        }
        write!(f, ")")
    }
}
