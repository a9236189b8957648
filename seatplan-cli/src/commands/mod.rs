//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Assign every reservation to an itinerary
//! - `search`: List the feasible itineraries for one reservation
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod search;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use search::SearchCommand;
pub use validate::ValidateCommand;
