//! Domain types and services for roster assignment.
//!
//! Purpose: Define the strongly typed entities and orchestration services
//! the engine exposes to hosts. Keep types immutable where possible and
//! document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - [`Error`] — the engine's error taxonomy.
//! - [`Course`], [`LifecycleState`] — course identity and the lifecycle gate.
//! - [`Candidate`], [`RosterRole`] — assignable users and their roles.
//! - [`PoolFilter`] — candidate narrowing, server- and client-side.
//! - [`SelectionState`] — bulk-operation selection tracking.
//! - [`BatchReport`] — per-target bulk assignment accounting.
//! - [`CandidatePoolService`], [`AssignmentService`], [`RosterView`] — the
//!   orchestration services, generic over the ports in [`ports`].

pub mod assignment;
pub mod batch;
pub mod candidate;
pub mod course;
pub mod error;
pub mod filter;
pub mod pool;
pub mod ports;
pub mod roster;
pub mod roster_view;
pub mod selection;

pub use self::assignment::AssignmentService;
pub use self::batch::{BatchFailure, BatchReport};
pub use self::candidate::{Candidate, RoleDetail, RosterRole, UserId};
pub use self::course::{Course, CourseCode, CourseId, CourseValidationError, LifecycleState};
pub use self::error::{Error, UpstreamService};
pub use self::filter::{PoolFilter, ServerFilter, apply_query};
pub use self::pool::CandidatePoolService;
pub use self::roster::{AssignmentDisplay, AssignmentRecord, dedupe_assignments};
pub use self::roster_view::RosterView;
pub use self::selection::SelectionState;
