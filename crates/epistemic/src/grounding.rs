//! Relational grounding: expanding a predicate schema into every legal
//! fully-instantiated literal.

use std::collections::HashMap;

use plan_model::Predicate;

/// Ground a predicate from a term position onward, depth-first: at each
/// remaining position, substitute every object whose type matches the
/// slot. Positions already past the end return the literal as-is, and a
/// type with no objects in the index prunes that branch entirely.
///
/// The result size is the Cartesian product of the candidate counts for
/// each unbound position (zero if any type has no candidates).
pub fn bind_predicate(
    objects_by_type: &HashMap<String, Vec<String>>,
    predicate: &Predicate,
    position: usize,
) -> Vec<Predicate> {
    let Some(term) = predicate.term_at(position) else {
        return vec![predicate.clone()];
    };

    // Positions already bound are left alone; an already-ground literal
    // passes through unchanged.
    if term.is_bound() {
        return bind_predicate(objects_by_type, predicate, position + 1);
    }

    let Some(candidates) = objects_by_type.get(&term.type_name) else {
        return Vec::new();
    };

    let mut grounded = Vec::new();
    for name in candidates {
        let mut bound = predicate.clone();
        bound.bind_term(name, position);
        grounded.extend(bind_predicate(objects_by_type, &bound, position + 1));
    }
    grounded
}
