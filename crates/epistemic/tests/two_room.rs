//! End-to-end observability in the two-room door world.
//!
//! Rooms `kitchen` and `hall` are joined by door `d1`; `alice` and the
//! `key` start in the kitchen. Walking to the unconnected `cellar` takes
//! both the key and the door out of her perceptual range.

use std::path::Path;
use std::sync::Arc;

use epistemic::{observes_literal, observes_object, verify_plan, EnvironmentModel, Scenario};
use plan_model::{Object, Predicate};

fn load_scenario() -> Scenario {
    Scenario::from_file(Path::new("tests/fixtures/two_room.toml"))
        .expect("Failed to read scenario")
}

#[test]
fn test_colocated_object_and_door_are_observed() {
    let scenario = load_scenario();
    let state = scenario.to_problem().initial;

    assert!(observes_object(
        "alice",
        &Object::new("key", "thing"),
        &state
    ));
    assert!(observes_literal(
        "alice",
        &Predicate::ground("locked", &["d1"]),
        &state
    ));
    assert!(observes_literal(
        "alice",
        &Predicate::ground("doorbetween", &["d1", "kitchen", "hall"]),
        &state
    ));
}

#[test]
fn test_walking_away_loses_sight_of_everything() {
    let scenario = load_scenario();
    let problem = scenario.to_problem();
    let steps = scenario.step_operators();

    let moved = problem.initial.apply(&steps[0], &problem.objects);

    assert!(!observes_object(
        "alice",
        &Object::new("key", "thing"),
        &moved
    ));
    assert!(!observes_literal(
        "alice",
        &Predicate::ground("locked", &["d1"]),
        &moved
    ));
}

#[test]
fn test_script_verifies_and_belief_survives_the_walk() {
    let scenario = load_scenario();
    let domain = Arc::new(scenario.to_domain());
    let problem = Arc::new(scenario.to_problem());

    assert!(verify_plan(
        &scenario.to_plan(),
        &problem.initial,
        &problem.objects
    ));

    let mut model = EnvironmentModel::new("alice", domain, Arc::clone(&problem))
        .expect("Failed to build model");
    assert!(model.knows_literal(&Predicate::ground("at", &["key", "kitchen"])));
    assert!(model.knows_literal(&Predicate::ground("locked", &["d1"])));

    // Replay the walk to the cellar. Belief never shrinks: everything
    // alice saw in the kitchen is still believed from the cellar.
    let mut state = problem.initial.clone();
    for step in scenario.step_operators() {
        state = state.apply(&step, &problem.objects);
        model.update_after(&step, &state).expect("Failed to update model");
    }

    assert!(model.knows_literal(&Predicate::ground("at", &["key", "kitchen"])));
    assert!(model.knows_literal(&Predicate::ground("locked", &["d1"])));
    assert!(model.knows_literal(&Predicate::ground("at", &["alice", "cellar"])));
}
