//! Course identity, validation, and the lifecycle gate.
//!
//! A course's temporal state is derived, never stored: [`Course::lifecycle_on`]
//! recomputes it from the course dates and a caller-supplied "today", so a
//! cached course object can never present a stale state across a date
//! boundary. All comparisons are date-only; the time of day is ignored.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum length of a course code.
const CODE_MAX: usize = 16;

/// Maximum length of a course name.
const NAME_MAX: usize = 128;

/// Unique identifier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
    /// Wraps a raw UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CourseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation failures when constructing a course or its code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseValidationError {
    /// The course code was empty.
    #[error("course code must not be empty")]
    EmptyCode,

    /// The course code exceeded the maximum length.
    #[error("course code must be at most {max} characters")]
    CodeTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The course code contained a character outside `A-Z0-9`.
    #[error("course code contains invalid character '{character}'")]
    InvalidCodeCharacter {
        /// The offending character.
        character: char,
    },

    /// The course name was empty or whitespace-only.
    #[error("course name must not be empty")]
    EmptyName,

    /// The course name exceeded the maximum length.
    #[error("course name must be at most {max} characters")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The end date preceded the start date.
    #[error("course end date must not precede its start date")]
    EndBeforeStart,
}

/// A validated course code such as `MATH101`.
///
/// Codes are stored uppercased; `math101` and `MATH101` construct the same
/// value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Validates and normalises a course code.
    ///
    /// # Errors
    ///
    /// Returns [`CourseValidationError`] when the code is empty, too long, or
    /// contains a character outside ASCII letters and digits.
    pub fn new(code: impl Into<String>) -> Result<Self, CourseValidationError> {
        let normalised = code.into().trim().to_uppercase();
        if normalised.is_empty() {
            return Err(CourseValidationError::EmptyCode);
        }
        if normalised.chars().count() > CODE_MAX {
            return Err(CourseValidationError::CodeTooLong { max: CODE_MAX });
        }
        if let Some(character) = normalised.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(CourseValidationError::InvalidCodeCharacter { character });
        }
        Ok(Self(normalised))
    }

    /// The normalised code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseValidationError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

/// Derived temporal classification of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Teaching has not started yet.
    Upcoming,
    /// Teaching is in progress, or the course is open-ended.
    Active,
    /// The end date has passed.
    Completed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => f.write_str("upcoming"),
            Self::Active => f.write_str("active"),
            Self::Completed => f.write_str("completed"),
        }
    }
}

/// A course as the engine sees it: identity, naming, and teaching dates.
///
/// `end_date` of `None` means the course is open-ended and never completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CourseDraft")]
pub struct Course {
    id: CourseId,
    code: CourseCode,
    name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl Course {
    /// Validates and constructs a course.
    ///
    /// # Errors
    ///
    /// Returns [`CourseValidationError`] when the name is blank or too long,
    /// or when `end_date` precedes `start_date`.
    pub fn new(
        id: CourseId,
        code: CourseCode,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, CourseValidationError> {
        let trimmed = name.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        if trimmed.chars().count() > NAME_MAX {
            return Err(CourseValidationError::NameTooLong { max: NAME_MAX });
        }
        if end_date.is_some_and(|end| end < start_date) {
            return Err(CourseValidationError::EndBeforeStart);
        }
        Ok(Self {
            id,
            code,
            name: trimmed,
            start_date,
            end_date,
        })
    }

    /// The course id.
    #[must_use]
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// The course code.
    #[must_use]
    pub const fn code(&self) -> &CourseCode {
        &self.code
    }

    /// The course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First day of teaching.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of teaching, if the course has one.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Derives the lifecycle state on `today`.
    ///
    /// A course is `Completed` exactly when it has an end date strictly
    /// before `today`; on its end date it is still `Active`. A course with no
    /// end date never completes.
    #[must_use]
    pub fn lifecycle_on(&self, today: NaiveDate) -> LifecycleState {
        if self.end_date.is_some_and(|end| end < today) {
            LifecycleState::Completed
        } else if self.start_date > today {
            LifecycleState::Upcoming
        } else {
            LifecycleState::Active
        }
    }

    /// Whether new assignments are accepted on `today`.
    ///
    /// The gate blocks completed courses only; upcoming courses accept
    /// assignments so rosters can be prepared ahead of the start date.
    /// Removal of existing assignments is not gated at all.
    #[must_use]
    pub fn accepts_assignments_on(&self, today: NaiveDate) -> bool {
        self.lifecycle_on(today) != LifecycleState::Completed
    }
}

/// Unvalidated payload shape accepted on deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CourseDraft {
    id: CourseId,
    code: CourseCode,
    name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl TryFrom<CourseDraft> for Course {
    type Error = CourseValidationError;

    fn try_from(draft: CourseDraft) -> Result<Self, Self::Error> {
        Self::new(
            draft.id,
            draft.code,
            draft.name,
            draft.start_date,
            draft.end_date,
        )
    }
}
