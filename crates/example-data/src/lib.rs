//! Deterministic example roster data generation for demonstration purposes.
//!
//! This crate provides tools for generating believable, reproducible roster
//! data from a JSON seed plan. It is designed to be independent of engine
//! domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed plans from JSON
//! - Deterministic generation of students, teachers, and courses
//! - Display name validation matching engine constraints
//! - Unique institutional email addresses
//!
//! # Example
//!
//! ```
//! use example_data::{SeedPlan, generate_roster};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seed": 42,
//!     "studentCount": 3,
//!     "teacherCount": 1,
//!     "courseCount": 2
//! }"#;
//!
//! let plan = SeedPlan::from_json(json).expect("valid plan");
//! let roster = generate_roster(&plan).expect("generation succeeds");
//!
//! assert_eq!(roster.students.len(), 3);
//! assert_eq!(roster.teachers.len(), 1);
//! assert_eq!(roster.courses.len(), 2);
//! ```

mod error;
mod generator;
mod plan;
mod seed;
mod validation;

pub use error::{GenerationError, PlanError};
pub use generator::generate_roster;
pub use plan::SeedPlan;
pub use seed::{CourseSeed, RosterSeed, StudentSeed, TeacherSeed};
pub use validation::{DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, is_valid_display_name};
