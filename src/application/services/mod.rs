//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, etc.)
//! but are themselves concrete structs, not traits.

mod confirm;
mod project;

pub use confirm::{ConfirmationGate, DEFAULT_ANSWER};
pub use project::{InitOutcome, ProjectService};
