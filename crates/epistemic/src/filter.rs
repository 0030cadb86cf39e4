//! Knowledge filter: deriving the subset of a state a character observes.

use std::collections::{HashMap, HashSet};

use plan_model::{Predicate, State};

use crate::grounding::bind_predicate;
use crate::observe::observes_literal;

/// Clones of every candidate literal the character observes against the
/// given state. Candidates need not be part of the state themselves.
pub fn knowledge_state(candidates: &[Predicate], state: &State, character: &str) -> Vec<Predicate> {
    candidates
        .iter()
        .filter(|pred| observes_literal(character, pred, state))
        .cloned()
        .collect()
}

/// The literals of a state the character observes (the state filtered
/// against itself).
pub fn observed_state(state: &State, character: &str) -> Vec<Predicate> {
    knowledge_state(&state.literals, state, character)
}

/// A full clone of the state with every literal's observation flag set
/// for the character. Nothing is dropped.
pub fn annotate(state: &State, character: &str) -> State {
    let mut annotated = state.clone();
    for pred in &mut annotated.literals {
        let observed = observes_literal(character, pred, state);
        pred.set_observed(character, observed);
    }
    annotated
}

/// Everything the character knows within perceptual range, with explicit
/// negations.
///
/// Every relation schema is grounded into all possible literals, the
/// observable ones are kept, and those not actually present in the true
/// state have their sign flipped to false. This is negation-as-failure
/// restricted to what is perceivable, not a license to deny every absent
/// fact.
pub fn full_knowledge_state(
    schemas: &[Predicate],
    objects_by_type: &HashMap<String, Vec<String>>,
    state: &State,
    character: &str,
) -> Vec<Predicate> {
    let mut possible = Vec::new();
    for schema in schemas {
        possible.extend(bind_predicate(objects_by_type, schema, 0));
    }

    let mut observed = knowledge_state(&possible, state, character);

    let present: HashSet<String> = state.literals.iter().map(|p| p.to_string()).collect();
    for pred in &mut observed {
        if !present.contains(&pred.to_string()) {
            pred.sign = false;
        }
    }
    observed
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_model::Term;

    fn world() -> State {
        State::from_literals(vec![
            Predicate::ground("room", &["kitchen"]),
            Predicate::ground("room", &["hall"]),
            Predicate::ground("at", &["alice", "kitchen"]),
            Predicate::ground("at", &["key", "kitchen"]),
            Predicate::ground("at", &["bob", "hall"]),
            Predicate::ground("at", &["sword", "hall"]),
        ])
    }

    fn types() -> HashMap<String, Vec<String>> {
        let mut index = HashMap::new();
        index.insert(
            "thing".to_string(),
            vec!["key".to_string(), "sword".to_string()],
        );
        index.insert(
            "room".to_string(),
            vec!["kitchen".to_string(), "hall".to_string()],
        );
        index
    }

    #[test]
    fn test_observed_state_is_location_bounded() {
        let observed = observed_state(&world(), "alice");
        assert!(observed.contains(&Predicate::ground("at", &["key", "kitchen"])));
        assert!(!observed.contains(&Predicate::ground("at", &["sword", "hall"])));
    }

    #[test]
    fn test_filter_clones_do_not_alias() {
        let state = world();
        let mut observed = observed_state(&state, "alice");
        observed[0].set_observed("alice", true);
        assert!(state.literals.iter().all(|l| l.observed_by.is_empty()));
    }

    #[test]
    fn test_annotate_keeps_everything() {
        let state = world();
        let annotated = annotate(&state, "alice");
        assert_eq!(annotated.len(), state.len());

        let key_here = annotated
            .literals
            .iter()
            .find(|l| **l == Predicate::ground("at", &["key", "kitchen"]))
            .unwrap();
        assert!(key_here.observed_by("alice"));

        let sword_there = annotated
            .literals
            .iter()
            .find(|l| **l == Predicate::ground("at", &["sword", "hall"]))
            .unwrap();
        assert!(!sword_there.observed_by("alice"));
    }

    #[test]
    fn test_full_knowledge_marks_observed_absences_false() {
        let schemas = vec![Predicate::new(
            "at",
            vec![Term::typed("thing"), Term::typed("room")],
        )];
        let known: HashSet<String> = full_knowledge_state(&schemas, &types(), &world(), "alice")
            .iter()
            .map(|p| p.to_string())
            .collect();

        // Observed and present: stays positive.
        assert!(known.contains("(at key kitchen)"));
        // Observable groundings absent from the true state: explicit negatives.
        assert!(known.contains("(not (at sword kitchen))"));
        assert!(known.contains("(not (at key hall))"));
        // Out of perceptual range entirely: not in the result either way.
        assert!(!known.contains("(at sword hall)"));
        assert!(!known.contains("(not (at sword hall))"));
    }
}
