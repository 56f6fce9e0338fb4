//! Seed plan types and JSON parsing.
//!
//! This module defines the plan structure that tells the generator how much
//! roster data to produce and from which RNG seed. Plans are loaded from JSON
//! and validated before use.

use serde::Deserialize;

use crate::error::PlanError;

/// Current supported plan version.
const SUPPORTED_VERSION: u32 = 1;

/// A validated request for deterministic roster generation.
///
/// # Example
///
/// ```
/// use example_data::SeedPlan;
///
/// let json = r#"{
///     "version": 1,
///     "seed": 42,
///     "studentCount": 12,
///     "teacherCount": 2,
///     "courseCount": 3
/// }"#;
///
/// let plan = SeedPlan::from_json(json).expect("valid plan");
/// assert_eq!(plan.student_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    version: u32,
    seed: u64,
    student_count: usize,
    teacher_count: usize,
    course_count: usize,
}

impl SeedPlan {
    /// Parses a seed plan from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - Every count is zero
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let raw: RawSeedPlan = serde_json::from_str(json).map_err(|e| PlanError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSeedPlan) -> Result<Self, PlanError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(PlanError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.student_count == 0 && raw.teacher_count == 0 && raw.course_count == 0 {
            return Err(PlanError::NothingRequested);
        }

        Ok(Self {
            version: raw.version,
            seed: raw.seed,
            student_count: raw.student_count,
            teacher_count: raw.teacher_count,
            course_count: raw.course_count,
        })
    }

    /// Returns the plan version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of students to generate.
    #[must_use]
    pub const fn student_count(&self) -> usize {
        self.student_count
    }

    /// Returns the number of teachers to generate.
    #[must_use]
    pub const fn teacher_count(&self) -> usize {
        self.teacher_count
    }

    /// Returns the number of courses to generate.
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.course_count
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedPlan {
    version: u32,
    seed: u64,
    student_count: usize,
    teacher_count: usize,
    course_count: usize,
}
