//! Ports the engine drives to reach the portal's backing systems.
//!
//! The engine never speaks a transport itself; adapters implement these
//! traits over whatever protocol a deployment uses. Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants, and each ships a `Fixture*` implementation for tests and demos.

mod macros;

pub mod directory;
pub mod roster_mutation;
pub mod roster_query;

pub(crate) use macros::define_port_error;

pub use directory::{CandidateDirectory, DirectoryError, FixtureCandidateDirectory};
pub use roster_mutation::{FixtureRosterMutation, RosterMutation, RosterMutationError};
pub use roster_query::{FixtureRosterQuery, RosterQuery, RosterQueryError};

#[cfg(test)]
pub use directory::MockCandidateDirectory;
#[cfg(test)]
pub use roster_mutation::MockRosterMutation;
#[cfg(test)]
pub use roster_query::MockRosterQuery;
