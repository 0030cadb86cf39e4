//! Observability rules: what a character can perceive of the true state.
//!
//! Visibility is purely spatial and co-location based. There is no
//! line-of-sight, stealth, or permission modeling; a character perceives
//! whatever resolves to the room it is standing in, which keeps the
//! epistemic model tractable for a room-graph narrative world.

use std::collections::HashSet;

use plan_model::{Object, Operator, Predicate, State};

/// Relation names the spatial rules special-case.
pub mod relation {
    /// Binary co-location: `(at ?x ?y)` - ?x is at ?y
    pub const AT: &str = "at";
    /// Containment: `(in ?x ?y)` - ?x is inside container ?y
    pub const IN: &str = "in";
    /// Container openness: `(open ?x)`
    pub const OPEN: &str = "open";
    /// `(location ?x)` - ?x is a location; locations are self-located
    pub const LOCATION: &str = "location";
    /// `(room ?x)` - ?x is a room; rooms are self-located
    pub const ROOM: &str = "room";
    /// Possession: `(has ?x ?y)` - ?x holds ?y
    pub const HAS: &str = "has";
    /// Support: `(on ?x ?y)` - ?x rests atop ?y
    pub const ON: &str = "on";
    /// Connector: `(doorbetween ?x ?y ?z)` - door ?x joins rooms ?y and ?z
    pub const DOOR_BETWEEN: &str = "doorbetween";
    /// Unary connector property: `(door ?x)`
    pub const DOOR: &str = "door";
    /// Unary connector property: `(locked ?x)`
    pub const LOCKED: &str = "locked";
    /// Meta-relation that is never perceivable
    pub const PREFAB: &str = "prefab";
}

use relation::*;

/// Both locations known and equal. Unknown locations never match
/// anything, including each other.
fn same(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

/// Resolve the location of a named entity by recursive containment.
///
/// Relations are checked in fixed priority order, first match wins:
/// `at`, then `in` (recursing only through containers marked `open` -
/// a closed container does not propagate location and the search falls
/// through to later relations), then `location` and `room` (self-located),
/// then `has` and `on` (recursing into the holder or base). Returns
/// `None` when no relation chain resolves, including on containment
/// cycles.
pub fn locate(name: &str, state: &State) -> Option<String> {
    let mut visited = HashSet::new();
    locate_guarded(name, state, &mut visited)
}

fn locate_guarded(name: &str, state: &State, visited: &mut HashSet<String>) -> Option<String> {
    // Cycle in the containment chain resolves to unknown.
    if !visited.insert(name.to_string()) {
        tracing::trace!(name, "containment cycle while resolving location");
        return None;
    }

    for pred in state.literals_named(AT) {
        if pred.constant_at_is(0, name) {
            return pred.constant_at(1).map(str::to_string);
        }
    }

    for pred in state.literals_named(IN) {
        if pred.constant_at_is(0, name) {
            let Some(container) = pred.constant_at(1) else {
                continue;
            };
            let open = state
                .literals_named(OPEN)
                .any(|p| p.constant_at_is(0, container));
            if open {
                return locate_guarded(container, state, visited);
            }
            // Closed container: abstraction by containment. This branch
            // yields no match and later relations are still consulted.
        }
    }

    for pred in state.literals_named(LOCATION) {
        if pred.constant_at_is(0, name) {
            return Some(name.to_string());
        }
    }

    for pred in state.literals_named(ROOM) {
        if pred.constant_at_is(0, name) {
            return Some(name.to_string());
        }
    }

    for pred in state.literals_named(HAS) {
        if pred.constant_at_is(1, name) {
            let holder = pred.constant_at(0)?;
            return locate_guarded(holder, state, visited);
        }
    }

    for pred in state.literals_named(ON) {
        if pred.constant_at_is(0, name) {
            let base = pred.constant_at(1)?;
            return locate_guarded(base, state, visited);
        }
    }

    None
}

/// Resolve the location an action happens at.
///
/// An action with a declared actor happens wherever the actor is.
/// Otherwise its `location` preconditions decide: exactly one names the
/// spot directly; several are disambiguated by the observing character's
/// own location; none resolves to unknown.
pub fn locate_action(character: &str, action: &Operator, state: &State) -> Option<String> {
    if let Some(actor) = &action.actor {
        return locate(actor, state);
    }

    let locations: Vec<&Predicate> = action
        .preconditions
        .iter()
        .filter(|p| p.name == LOCATION)
        .collect();

    if locations.len() == 1 {
        return locations[0].constant_at(0).map(str::to_string);
    }

    let character_location = locate(character, state)?;
    if locations
        .iter()
        .any(|p| p.constant_at_is(0, &character_location))
    {
        return Some(character_location);
    }
    None
}

/// Whether a character currently perceives a literal.
///
/// True when the character is co-located with the literal's subject
/// (first term), standing at the subject itself, or - for the `at`
/// relation - standing at the literal's place term. Connector literals
/// (`doorbetween`) and unary connector properties (`door`, `locked`) are
/// instead observable from either room the connector joins. The `prefab`
/// meta-relation is never perceivable.
pub fn observes_literal(character: &str, literal: &Predicate, state: &State) -> bool {
    if literal.name == PREFAB {
        return false;
    }

    let character_location = locate(character, state);
    let subject = literal.constant_at(0);
    let subject_location = subject.and_then(|s| locate(s, state));

    if same(character_location.as_deref(), subject_location.as_deref())
        || same(character_location.as_deref(), subject)
        || (literal.name == AT
            && same(character_location.as_deref(), literal.constant_at(1)))
    {
        return true;
    }

    // A connector is not at any one location; it is visible from either
    // room it joins.
    if literal.name == DOOR_BETWEEN {
        return same(character_location.as_deref(), literal.constant_at(1))
            || same(character_location.as_deref(), literal.constant_at(2));
    }

    // Unary connector properties are visible exactly where the connector
    // itself is, found by cross-referencing the connector literals.
    if literal.name == DOOR || literal.name == LOCKED {
        if let Some(subject) = subject {
            return connector_visible(character_location.as_deref(), subject, state);
        }
    }

    false
}

/// Whether a character currently perceives an object.
pub fn observes_object(character: &str, object: &Object, state: &State) -> bool {
    let character_location = locate(character, state);
    let object_location = locate(&object.name, state);

    if same(character_location.as_deref(), object_location.as_deref())
        || same(character_location.as_deref(), Some(&object.name))
    {
        return true;
    }

    // The object may itself be a connector.
    connector_visible(character_location.as_deref(), &object.name, state)
}

/// Whether a character currently perceives an action: true iff the
/// character is co-located with wherever the action happens.
pub fn observes_action(character: &str, action: &Operator, state: &State) -> bool {
    let character_location = locate(character, state);
    let action_location = locate_action(character, action, state);
    same(character_location.as_deref(), action_location.as_deref())
}

/// True when some connector literal joins `name` to a room the character
/// is standing in.
fn connector_visible(character_location: Option<&str>, name: &str, state: &State) -> bool {
    state.literals_named(DOOR_BETWEEN).any(|connector| {
        connector.constant_at_is(0, name)
            && (same(character_location, connector.constant_at(1))
                || same(character_location, connector.constant_at(2)))
    })
}
