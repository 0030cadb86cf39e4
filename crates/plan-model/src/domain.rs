//! Domain: the static description of a planning world.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;
use crate::predicate::Predicate;

/// Static world description: relation schemas, operator schemas, and the
/// precomputed set of static relations.
///
/// A relation is static when no operator effect can change it; its
/// literals are immutable-true across every legal transition. The set is
/// computed once at construction, since domains are shared read-only
/// between agents afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    /// Relation schemas (predicates with typed, unbound parameters)
    pub predicates: Vec<Predicate>,
    /// Operator schemas
    pub operators: Vec<Operator>,
    /// Names of relations no operator effect mentions
    pub statics: Vec<String>,
}

impl Domain {
    pub fn new(
        name: impl Into<String>,
        predicates: Vec<Predicate>,
        operators: Vec<Operator>,
    ) -> Self {
        let statics = compute_statics(&predicates, &operators);
        Self {
            name: name.into(),
            predicates,
            operators,
            statics,
        }
    }

    /// Look up a relation schema by name.
    pub fn predicate_schema(&self, name: &str) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.name == name)
    }

    /// Whether a relation's truth can never change.
    pub fn is_static(&self, name: &str) -> bool {
        self.statics.iter().any(|s| s == name)
    }
}

fn compute_statics(predicates: &[Predicate], operators: &[Operator]) -> Vec<String> {
    predicates
        .iter()
        .filter(|schema| {
            !operators
                .iter()
                .any(|op| op.effects.iter().any(|e| e.name == schema.name))
        })
        .map(|schema| schema.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    fn door_domain() -> Domain {
        let predicates = vec![
            Predicate::new("at", vec![Term::typed("thing"), Term::typed("room")]),
            Predicate::new("locked", vec![Term::typed("door")]),
            Predicate::new(
                "doorbetween",
                vec![Term::typed("door"), Term::typed("room"), Term::typed("room")],
            ),
        ];
        let operators = vec![Operator::new("unlock")
            .with_parameters(vec![Term::typed("character"), Term::typed("door")])
            .with_effects(vec![Predicate::new("locked", vec![Term::typed("door")]).negated()])];
        Domain::new("castle", predicates, operators)
    }

    #[test]
    fn test_statics_exclude_effect_relations() {
        let domain = door_domain();
        assert!(!domain.is_static("locked"));
        assert!(domain.is_static("at"));
        assert!(domain.is_static("doorbetween"));
    }

    #[test]
    fn test_schema_lookup() {
        let domain = door_domain();
        assert!(domain.predicate_schema("locked").is_some());
        assert!(domain.predicate_schema("haunted").is_none());
    }
}
