//! Per-agent belief accumulation over a shared planning world.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use plan_model::{Domain, Object, Operator, Predicate, Problem, State};

use crate::filter::observed_state;
use crate::observe::{observes_action, observes_object};

/// Errors from belief-model queries.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The queried relation name exists nowhere in the domain. An agent
    /// cannot know an undefined relation; this is a caller bug, not a
    /// belief gap.
    #[error("undefined predicate symbol: {0}")]
    UndefinedPredicate(String),
}

/// What one agent believes about the planning world it inhabits: the
/// objects, relation schemas, and operator schemas it has encountered,
/// and the literals it currently holds true.
///
/// Belief only grows. Observations merge in through [`Self::update`] and
/// [`Self::update_after`]; nothing ever retracts a literal that later
/// becomes false in the true world. All literal growth funnels through
/// one merge point so a future revision policy has a single seam.
#[derive(Debug, Clone)]
pub struct EnvironmentModel {
    agent: String,
    domain: Arc<Domain>,
    problem: Arc<Problem>,
    known_operators: Vec<Operator>,
    known_predicates: Vec<Predicate>,
    known_objects: Vec<Object>,
    known_state: State,
}

impl EnvironmentModel {
    /// Build a model for one agent and fold in whatever is observable
    /// from the problem's initial state. Fails if that state contains an
    /// observable literal of a relation the domain never declares.
    pub fn new(
        agent: impl Into<String>,
        domain: Arc<Domain>,
        problem: Arc<Problem>,
    ) -> Result<Self, ModelError> {
        let mut model = Self {
            agent: agent.into(),
            domain,
            problem: Arc::clone(&problem),
            known_operators: Vec::new(),
            known_predicates: Vec::new(),
            known_objects: Vec::new(),
            known_state: State::new(),
        };
        let initial = problem.initial.clone();
        model.update(&initial)?;
        Ok(model)
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn known_state(&self) -> &State {
        &self.known_state
    }

    pub fn known_objects(&self) -> &[Object] {
        &self.known_objects
    }

    pub fn known_operators(&self) -> &[Operator] {
        &self.known_operators
    }

    pub fn known_predicates(&self) -> &[Predicate] {
        &self.known_predicates
    }

    /// Merge everything the agent observes of a new true state: newly
    /// visible objects, newly visible literals, and the relation schemas
    /// those literals use.
    ///
    /// An observed literal whose relation the domain never declares is a
    /// malformed-domain caller error and propagates as
    /// [`ModelError::UndefinedPredicate`]; nothing from it enters the
    /// belief state.
    pub fn update(&mut self, new_state: &State) -> Result<(), ModelError> {
        let problem = Arc::clone(&self.problem);
        for object in &problem.objects {
            if observes_object(&self.agent, object, new_state) && !self.knows_object(object) {
                debug!(agent = %self.agent, object = %object.name, "learned object");
                self.known_objects.push(object.clone());
            }
        }

        for literal in observed_state(new_state, &self.agent) {
            self.merge_observation(literal)?;
        }
        Ok(())
    }

    /// Merge a transition: the action that produced the new state, then
    /// the state itself.
    ///
    /// When the action is observed, its schema is learned and - if the
    /// agent already holds a non-empty belief state - the action's
    /// effects advance that belief directly, grounded over the objects
    /// the agent knows (which is what lets axiom-like indirect effects
    /// resolve subjectively). The plain state merge then backfills
    /// whatever the transition newly exposed.
    pub fn update_after(&mut self, action: &Operator, new_state: &State) -> Result<(), ModelError> {
        if observes_action(&self.agent, action, new_state) {
            if !self.knows_operator(action) {
                debug!(agent = %self.agent, action = %action, "learned operator schema");
                self.known_operators.push(action.template());
            }

            if !self.known_state.is_empty() {
                self.known_state = self.known_state.apply(action, &self.known_objects);
            }
        }

        self.update(new_state)
    }

    /// Single merge point for literal growth (the seam a belief-revision
    /// policy would replace). A literal of an undeclared relation is
    /// refused outright: accepting it would let the compiled subjective
    /// problem reference a relation its compiled domain cannot name.
    fn merge_observation(&mut self, literal: Predicate) -> Result<(), ModelError> {
        if !self.known_predicates.iter().any(|p| p.name == literal.name) {
            let schema = self
                .domain
                .predicate_schema(&literal.name)
                .ok_or_else(|| ModelError::UndefinedPredicate(literal.name.clone()))?
                .clone();
            debug!(agent = %self.agent, relation = %schema.name, "learned relation schema");
            self.known_predicates.push(schema);
        }

        if !self.knows_literal(&literal) {
            debug!(agent = %self.agent, literal = %literal, "learned literal");
            self.known_state.literals.push(literal);
        }
        Ok(())
    }

    /// Whether the agent's belief state satisfies a literal.
    pub fn knows_literal(&self, literal: &Predicate) -> bool {
        self.known_state.holds(literal)
    }

    /// Whether the agent knows the relation schema of the given name.
    /// Asking about a relation the domain never defines is a caller
    /// error.
    pub fn knows_predicate_schema(&self, name: &str) -> Result<bool, ModelError> {
        if self.domain.predicate_schema(name).is_none() {
            return Err(ModelError::UndefinedPredicate(name.to_string()));
        }
        Ok(self.known_predicates.iter().any(|p| p.name == name))
    }

    /// Whether the agent knows the schema a ground action instantiates.
    pub fn knows_operator(&self, action: &Operator) -> bool {
        self.known_operators.contains(&action.template())
    }

    pub fn knows_object(&self, object: &Object) -> bool {
        self.known_objects.contains(object)
    }

    /// The domain as this agent knows it: a clone of the shared domain
    /// renamed for the agent, with schemas and operators restricted to
    /// the known subsets. The static-relation set is carried over from
    /// the shared domain, which computed it against the full operator
    /// set - a relation is not static just because the agent has not yet
    /// seen the operator that changes it.
    pub fn compile_domain(&self) -> Domain {
        let mut compiled = (*self.domain).clone();
        compiled.name = format!("{}_{}", self.agent, self.domain.name);
        compiled.predicates = self.known_predicates.clone();
        compiled.operators = self.known_operators.clone();
        compiled
    }

    /// The problem as this agent knows it: known objects, believed
    /// initial state, names prefixed for the agent. Pairs with
    /// [`Self::compile_domain`] for handing a subjective view to an
    /// external re-planner.
    pub fn compile_problem(&self) -> Problem {
        Problem::new(
            format!("{}_{}", self.agent, self.problem.name),
            format!("{}_{}", self.agent, self.domain.name),
            self.known_objects.clone(),
            self.known_state.clone(),
        )
    }
}
