//! Predicate: a signed relation literal over ordered terms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::term::Term;

/// A relation literal, either schema-level (some terms unbound) or ground.
///
/// `sign` is true when the relation holds and false when it is known not
/// to hold. The per-character observation annotations are bookkeeping and
/// never participate in equality or hashing: two literals are the same
/// literal iff name, terms, and sign match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predicate {
    pub name: String,
    pub terms: Vec<Term>,
    pub sign: bool,
    /// Which characters currently observe this literal
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub observed_by: BTreeMap<String, bool>,
}

impl Predicate {
    /// Create a positive literal over the given terms.
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
            sign: true,
            observed_by: BTreeMap::new(),
        }
    }

    /// Create a positive ground literal from constant names, with every
    /// term typed "object". Convenient for states where grounding types
    /// are not needed.
    pub fn ground(name: impl Into<String>, constants: &[&str]) -> Self {
        let terms = constants
            .iter()
            .map(|c| Term::bound("object", *c))
            .collect();
        Self::new(name, terms)
    }

    /// Flip the literal to the negated form.
    pub fn negated(mut self) -> Self {
        self.sign = !self.sign;
        self
    }

    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    pub fn term_at(&self, position: usize) -> Option<&Term> {
        self.terms.get(position)
    }

    /// The bound constant at a term position. Out-of-range positions and
    /// unbound terms both yield `None`.
    pub fn constant_at(&self, position: usize) -> Option<&str> {
        self.terms.get(position).and_then(|t| t.constant())
    }

    /// Whether the constant at a position equals the given name.
    pub fn constant_at_is(&self, position: usize, name: &str) -> bool {
        self.constant_at(position) == Some(name)
    }

    /// Bind the term at a position to an object name.
    pub fn bind_term(&mut self, constant: impl Into<String>, position: usize) {
        if let Some(term) = self.terms.get_mut(position) {
            term.bind(constant);
        }
    }

    /// True when every term is bound.
    pub fn is_ground(&self) -> bool {
        self.terms.iter().all(Term::is_bound)
    }

    /// Record whether a character observes this literal.
    pub fn set_observed(&mut self, character: impl Into<String>, observed: bool) {
        self.observed_by.insert(character.into(), observed);
    }

    /// Whether a character was annotated as observing this literal.
    pub fn observed_by(&self, character: &str) -> bool {
        self.observed_by.get(character).copied().unwrap_or(false)
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.sign == other.sign && self.terms == other.terms
    }
}

impl Eq for Predicate {}

impl Hash for Predicate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.sign.hash(state);
        self.terms.hash(state);
    }
}

impl fmt::Display for Predicate {
    /// PDDL-style rendering: `(at alice kitchen)`, `(not (locked d1))`.
    /// Unbound terms render as `?<type>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.sign {
            write!(f, "(not ")?;
        }
        write!(f, "({}", self.name)?;
        for term in &self.terms {
            match term.constant() {
                Some(constant) => write!(f, " {}", constant)?,
                None => write!(f, " ?{}", term.type_name)?,
            }
        }
        write!(f, ")")?;
        if !self.sign {
            write!(f, ")")?;
        }
        Ok(())
    }
}
