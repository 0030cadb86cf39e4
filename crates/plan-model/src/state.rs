//! State: a closed-world set of true ground literals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::object::Object;
use crate::operator::Operator;
use crate::predicate::Predicate;

/// A world state. Only positive ground literals are stored; a literal
/// absent from the set is false (closed-world assumption).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub literals: Vec<Predicate>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_literals(literals: Vec<Predicate>) -> Self {
        Self { literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether a literal holds in this state. A positive literal holds
    /// when some stored literal matches it; a negative literal holds when
    /// no stored literal matches its positive form.
    pub fn holds(&self, literal: &Predicate) -> bool {
        let present = self.literals.iter().any(|l| matches(l, literal));
        if literal.sign {
            present
        } else {
            !present
        }
    }

    /// Whether every precondition holds. Schema-level preconditions with
    /// unbound terms match any stored literal agreeing on the bound
    /// positions.
    pub fn satisfies(&self, preconditions: &[Predicate]) -> bool {
        preconditions.iter().all(|pre| self.holds(pre))
    }

    /// Apply a ground action's effects, producing the successor state.
    /// Negative effects delete their positive form, positive effects
    /// insert (duplicates suppressed), in effect-list order. Effects the
    /// operator leaves schema-level are grounded over the supplied object
    /// list by type before application.
    pub fn apply(&self, action: &Operator, objects: &[Object]) -> State {
        let mut successor = self.clone();
        let names_by_type = index_by_type(objects);

        for effect in &action.effects {
            for ground in ground_over(effect, &names_by_type) {
                if ground.sign {
                    if !successor.literals.iter().any(|l| matches(l, &ground)) {
                        successor.literals.push(ground);
                    }
                } else {
                    successor.literals.retain(|l| !matches(l, &ground));
                }
            }
        }

        successor
    }

    /// Literals of a given relation name.
    pub fn literals_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Predicate> {
        self.literals.iter().filter(move |l| l.name == name)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.literals.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// Whether a stored (ground, positive) literal matches a query pattern:
/// same name and arity, and every bound pattern position agrees.
fn matches(stored: &Predicate, pattern: &Predicate) -> bool {
    stored.name == pattern.name
        && stored.arity() == pattern.arity()
        && pattern
            .terms
            .iter()
            .zip(&stored.terms)
            .all(|(p, s)| match p.constant() {
                Some(c) => s.constant() == Some(c),
                None => true,
            })
}

fn index_by_type(objects: &[Object]) -> HashMap<&str, Vec<&str>> {
    let mut index: HashMap<&str, Vec<&str>> = HashMap::new();
    for obj in objects {
        index.entry(&obj.type_name).or_default().push(&obj.name);
    }
    index
}

/// Ground an effect's unbound terms over the object index, depth-first.
/// Fully-ground effects pass through unchanged; a term type with no
/// candidates yields no groundings.
fn ground_over(effect: &Predicate, names_by_type: &HashMap<&str, Vec<&str>>) -> Vec<Predicate> {
    fn recurse(
        effect: &Predicate,
        names_by_type: &HashMap<&str, Vec<&str>>,
        position: usize,
    ) -> Vec<Predicate> {
        let Some(term) = effect.term_at(position) else {
            return vec![effect.clone()];
        };
        if term.is_bound() {
            return recurse(effect, names_by_type, position + 1);
        }
        let Some(candidates) = names_by_type.get(term.type_name.as_str()) else {
            return Vec::new();
        };
        let mut grounded = Vec::new();
        for name in candidates {
            let mut bound = effect.clone();
            bound.bind_term(*name, position);
            grounded.extend(recurse(&bound, names_by_type, position + 1));
        }
        grounded
    }
    recurse(effect, names_by_type, 0)
}
