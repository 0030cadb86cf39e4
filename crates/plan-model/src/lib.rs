//! Shared STRIPS data structures for the subjective planning engine.
//!
//! This crate contains pure data structures with no engine logic.
//! It is a dependency for all other crates in the workspace.

pub mod domain;
pub mod object;
pub mod operator;
pub mod plan;
pub mod predicate;
pub mod problem;
pub mod state;
pub mod term;

// Re-export the core types
pub use domain::Domain;
pub use object::Object;
pub use operator::Operator;
pub use plan::Plan;
pub use predicate::Predicate;
pub use problem::Problem;
pub use state::State;
pub use term::Term;
