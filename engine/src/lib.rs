//! Course roster assignment engine.
//!
//! The decision core of a university portal's roster management: which
//! candidates may be assigned to a course, whether the course's lifecycle
//! still admits changes, how a bulk assignment settles target by target, and
//! how the resulting roster is paged for display.
//!
//! The engine is transport-agnostic. It consumes the surrounding application
//! through the narrow ports in [`domain::ports`] (candidate directory, roster
//! mutation, roster query) and an injected [`mockable::Clock`]; HTTP clients,
//! sessions, and persistence are adapter concerns.

pub mod config;
pub mod domain;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use config::EngineConfig;
