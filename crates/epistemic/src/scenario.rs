//! Scenario definitions for the demo binary and integration tests.
//!
//! A scenario is a TOML file describing a small world (objects, relation
//! schemas, initial literals), the agents whose beliefs to track, and a
//! scripted sequence of ground actions to replay. This is deliberately
//! not a PDDL reader; it is a config format for exercising the engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use plan_model::{Domain, Object, Operator, Plan, Predicate, Problem, State, Term};

/// Errors that can occur while loading a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Error reading the scenario file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing the scenario TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A ground literal: relation name plus argument object names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralDef {
    pub name: String,
    pub args: Vec<String>,
}

impl LiteralDef {
    fn to_predicate(&self) -> Predicate {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        Predicate::ground(&self.name, &args)
    }
}

/// An object declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A relation schema: name plus parameter types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredicateDef {
    pub name: String,
    pub types: Vec<String>,
}

impl PredicateDef {
    fn to_schema(&self) -> Predicate {
        Predicate::new(
            &self.name,
            self.types.iter().map(Term::typed).collect(),
        )
    }
}

/// One scripted ground action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDef {
    pub action: String,
    #[serde(default)]
    pub actor: Option<String>,
    /// Bound parameters as `[type, object]` pairs
    #[serde(default)]
    pub params: Vec<(String, String)>,
    #[serde(default)]
    pub pre: Vec<LiteralDef>,
    #[serde(default)]
    pub adds: Vec<LiteralDef>,
    #[serde(default)]
    pub deletes: Vec<LiteralDef>,
}

impl StepDef {
    fn to_operator(&self) -> Operator {
        let mut effects: Vec<Predicate> = self
            .deletes
            .iter()
            .map(|d| d.to_predicate().negated())
            .collect();
        effects.extend(self.adds.iter().map(LiteralDef::to_predicate));

        let mut op = Operator::new(&self.action)
            .with_parameters(
                self.params
                    .iter()
                    .map(|(ty, obj)| Term::bound(ty, obj))
                    .collect(),
            )
            .with_preconditions(self.pre.iter().map(LiteralDef::to_predicate).collect())
            .with_effects(effects);
        op.actor = self.actor.clone();
        op
    }
}

/// Complete scenario: world, agents, scripted actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub domain: String,
    /// Characters whose beliefs the replay tracks
    pub agents: Vec<String>,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub predicates: Vec<PredicateDef>,
    #[serde(default)]
    pub initial: Vec<LiteralDef>,
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// The domain this scenario plays in: declared relation schemas plus
    /// the operator schemas recovered from the scripted steps.
    pub fn to_domain(&self) -> Domain {
        let predicates = self.predicates.iter().map(PredicateDef::to_schema).collect();

        let mut operators: Vec<Operator> = Vec::new();
        for step in &self.steps {
            let schema = step.to_operator().template();
            if !operators.contains(&schema) {
                operators.push(schema);
            }
        }

        Domain::new(&self.domain, predicates, operators)
    }

    pub fn to_problem(&self) -> Problem {
        Problem::new(
            &self.name,
            &self.domain,
            self.objects
                .iter()
                .map(|o| Object::new(&o.name, &o.type_name))
                .collect(),
            State::from_literals(self.initial.iter().map(LiteralDef::to_predicate).collect()),
        )
    }

    /// The scripted steps as ground operators.
    pub fn step_operators(&self) -> Vec<Operator> {
        self.steps.iter().map(StepDef::to_operator).collect()
    }

    /// The scripted steps as a plan from the initial state.
    pub fn to_plan(&self) -> Plan {
        Plan::new(self.step_operators(), self.to_problem().initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name = "two_room"
domain = "castle"
agents = ["alice"]

[[objects]]
name = "alice"
type = "character"

[[objects]]
name = "kitchen"
type = "room"

[[objects]]
name = "hall"
type = "room"

[[predicates]]
name = "at"
types = ["object", "object"]

[[predicates]]
name = "room"
types = ["room"]

[[initial]]
name = "room"
args = ["kitchen"]

[[initial]]
name = "room"
args = ["hall"]

[[initial]]
name = "at"
args = ["alice", "kitchen"]

[[steps]]
action = "move"
actor = "alice"
params = [["character", "alice"], ["room", "kitchen"], ["room", "hall"]]
pre = [{ name = "at", args = ["alice", "kitchen"] }]
deletes = [{ name = "at", args = ["alice", "kitchen"] }]
adds = [{ name = "at", args = ["alice", "hall"] }]
"#;

    #[test]
    fn test_parse_sample() {
        let scenario = Scenario::from_toml(SAMPLE).unwrap();
        assert_eq!(scenario.name, "two_room");
        assert_eq!(scenario.agents, vec!["alice"]);
        assert_eq!(scenario.objects.len(), 3);
        assert_eq!(scenario.steps.len(), 1);
    }

    #[test]
    fn test_world_construction() {
        let scenario = Scenario::from_toml(SAMPLE).unwrap();
        let domain = scenario.to_domain();
        let problem = scenario.to_problem();

        assert_eq!(domain.operators.len(), 1);
        assert!(domain.predicate_schema("at").is_some());
        assert_eq!(problem.objects_by_type()["room"], vec!["kitchen", "hall"]);
        assert_eq!(problem.initial.len(), 3);
    }

    #[test]
    fn test_steps_are_executable() {
        let scenario = Scenario::from_toml(SAMPLE).unwrap();
        let plan = scenario.to_plan();
        let problem = scenario.to_problem();
        assert!(crate::simulator::verify_plan(
            &plan,
            &problem.initial,
            &problem.objects
        ));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(matches!(
            Scenario::from_toml("name = ["),
            Err(ScenarioError::Toml(_))
        ));
    }
}
