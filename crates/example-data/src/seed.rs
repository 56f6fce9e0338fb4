//! Generated roster seed types.
//!
//! This module defines the output types from roster generation. These types
//! are independent of engine domain types to avoid circular dependencies;
//! they are converted into engine types at the point of use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSeed {
    /// Unique identifier for the student.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Institutional email address.
    pub email: String,
    /// Intake year the student belongs to.
    pub cohort: u16,
    /// Department the student is enrolled with.
    pub department: String,
}

/// A generated example teacher record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSeed {
    /// Unique identifier for the teacher.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Institutional email address.
    pub email: String,
    /// Teaching specialization.
    pub specialization: String,
}

/// A generated example course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSeed {
    /// Unique identifier for the course.
    pub id: Uuid,
    /// Short course code such as `MATH101`.
    pub code: String,
    /// Human-readable course title.
    pub name: String,
    /// First day of teaching.
    pub start_date: NaiveDate,
    /// Last day of teaching; `None` for open-ended courses.
    pub end_date: Option<NaiveDate>,
}

/// The complete output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSeed {
    /// Generated students, in generation order.
    pub students: Vec<StudentSeed>,
    /// Generated teachers, in generation order.
    pub teachers: Vec<TeacherSeed>,
    /// Generated courses, in generation order.
    pub courses: Vec<CourseSeed>,
}

impl StudentSeed {
    /// The student's display name: first and last name joined by a space.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TeacherSeed {
    /// The teacher's display name: first and last name joined by a space.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> StudentSeed {
        StudentSeed {
            id: Uuid::nil(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada.lovelace@example.edu".to_owned(),
            cohort: 2024,
            department: "Mathematics".to_owned(),
        }
    }

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(student().display_name(), "Ada Lovelace");
    }

    #[test]
    fn student_seed_serializes_to_camel_case() {
        let json = serde_json::to_string(&student()).expect("serialize");
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(json.contains("\"cohort\":2024"));
    }

    #[test]
    fn course_seed_serializes_optional_end_date() {
        let course = CourseSeed {
            id: Uuid::nil(),
            code: "MATH101".to_owned(),
            name: "Introduction to Analysis".to_owned(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date"),
            end_date: None,
        };
        let json = serde_json::to_string(&course).expect("serialize");
        assert!(json.contains("\"startDate\":\"2026-01-05\""));
        assert!(json.contains("\"endDate\":null"));
    }
}
