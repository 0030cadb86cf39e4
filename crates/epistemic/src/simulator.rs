//! Plan verification: linear executability checking.

use tracing::debug;

use plan_model::{Object, Plan, State};

/// Whether a plan's steps are executable in order from the given state.
///
/// Works on a private clone; the input state is never mutated. Each step
/// must individually satisfy its preconditions against the evolving
/// state before its effects are applied. The first unmet precondition
/// invalidates the whole plan - no skipping, no backtracking. An invalid
/// plan is an expected outcome, not an error.
pub fn verify_plan(plan: &Plan, state: &State, objects: &[Object]) -> bool {
    let mut current = state.clone();

    for step in &plan.steps {
        if !current.satisfies(&step.preconditions) {
            debug!(step = %step, "plan step preconditions unmet");
            return false;
        }
        current = current.apply(step, objects);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_model::{Operator, Predicate, Term};

    fn ground_move(who: &str, from: &str, to: &str) -> Operator {
        Operator::new("move")
            .with_actor(who)
            .with_parameters(vec![
                Term::bound("character", who),
                Term::bound("room", from),
                Term::bound("room", to),
            ])
            .with_preconditions(vec![Predicate::ground("at", &[who, from])])
            .with_effects(vec![
                Predicate::ground("at", &[who, from]).negated(),
                Predicate::ground("at", &[who, to]),
            ])
    }

    fn initial() -> State {
        State::from_literals(vec![
            Predicate::ground("room", &["kitchen"]),
            Predicate::ground("room", &["hall"]),
            Predicate::ground("room", &["cellar"]),
            Predicate::ground("at", &["alice", "kitchen"]),
        ])
    }

    #[test]
    fn test_valid_chain() {
        let plan = Plan::new(
            vec![
                ground_move("alice", "kitchen", "hall"),
                ground_move("alice", "hall", "cellar"),
            ],
            initial(),
        );
        assert!(verify_plan(&plan, &initial(), &[]));
    }

    #[test]
    fn test_first_unmet_precondition_fails_everything() {
        // The second step expects alice in the cellar, but step one put
        // her in the hall.
        let plan = Plan::new(
            vec![
                ground_move("alice", "kitchen", "hall"),
                ground_move("alice", "cellar", "kitchen"),
            ],
            initial(),
        );
        assert!(!verify_plan(&plan, &initial(), &[]));
    }

    #[test]
    fn test_empty_plan_is_valid() {
        let plan = Plan::new(Vec::new(), initial());
        assert!(verify_plan(&plan, &initial(), &[]));
    }

    #[test]
    fn test_input_state_is_never_mutated() {
        let state = initial();
        let plan = Plan::new(vec![ground_move("alice", "kitchen", "hall")], initial());

        let before = state.clone();
        let first = verify_plan(&plan, &state, &[]);
        let second = verify_plan(&plan, &state, &[]);

        assert_eq!(state, before);
        assert_eq!(first, second);
        assert!(first);
    }
}
