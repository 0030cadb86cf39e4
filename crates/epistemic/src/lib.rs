//! Epistemic state engine: what each agent believes about a partially
//! observable planning world, and how that belief advances as the true
//! world changes.
//!
//! Visibility is purely spatial: a character perceives the literals,
//! objects, and actions that resolve to its own location. Each agent's
//! [`EnvironmentModel`] folds those observations into a persistent
//! subjective model that only ever grows, and can compile that model back
//! into a domain/problem pair for subjective re-planning.
//!
//! # Modules
//!
//! - [`grounding`]: Cartesian instantiation of predicate schemas
//! - [`observe`]: observability rules and recursive location resolution
//! - [`filter`]: deriving a character's observed subset of a state
//! - [`model`]: per-agent belief accumulation
//! - [`simulator`]: plan executability checking
//! - [`scenario`]: TOML scenario definitions for the demo binary

pub mod filter;
pub mod grounding;
pub mod model;
pub mod observe;
pub mod scenario;
pub mod simulator;

pub use filter::{annotate, full_knowledge_state, knowledge_state, observed_state};
pub use grounding::bind_predicate;
pub use model::{EnvironmentModel, ModelError};
pub use observe::{locate, locate_action, observes_action, observes_literal, observes_object};
pub use scenario::{Scenario, ScenarioError};
pub use simulator::verify_plan;
