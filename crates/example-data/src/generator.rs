//! Deterministic roster generation from seed plans.
//!
//! This module provides the core generation function that produces
//! reproducible students, teachers, and courses from a seed plan. The same
//! seed value always produces identical output.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::plan::SeedPlan;
use crate::seed::{CourseSeed, RosterSeed, StudentSeed, TeacherSeed};
use crate::validation::{email_local_part, is_valid_display_name, sanitize_display_name};

/// Maximum number of attempts to generate a valid person name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Domain appended to every generated email address.
const EMAIL_DOMAIN: &str = "example.edu";

/// Departments students and courses are drawn from.
const DEPARTMENTS: [&str; 6] = [
    "Mathematics",
    "Physics",
    "Computer Science",
    "History",
    "Biology",
    "Economics",
];

/// Teaching specializations for generated teachers.
const SPECIALIZATIONS: [&str; 6] = [
    "Algebra",
    "Thermodynamics",
    "Distributed Systems",
    "Early Modern History",
    "Genetics",
    "Econometrics",
];

/// Leading qualifiers for course titles.
const COURSE_QUALIFIERS: [&str; 4] = ["Introduction to", "Foundations of", "Topics in", "Advanced"];

/// Subjects for course titles.
const COURSE_SUBJECTS: [&str; 6] = [
    "Analysis",
    "Mechanics",
    "Algorithms",
    "Historiography",
    "Cell Biology",
    "Game Theory",
];

/// Earliest intake year assigned to a student.
const COHORT_MIN: u16 = 2022;

/// Latest intake year assigned to a student.
const COHORT_MAX: u16 = 2026;

/// Earliest year a generated course may start in.
const COURSE_YEAR_MIN: i32 = 2024;

/// Latest year a generated course may start in.
const COURSE_YEAR_MAX: i32 = 2026;

/// Shortest teaching term, in weeks.
const TERM_MIN_WEEKS: u64 = 12;

/// Longest teaching term, in weeks.
const TERM_MAX_WEEKS: u64 = 16;

/// Probability of a course being open-ended (1 in 5).
const OPEN_ENDED_NUMERATOR: u32 = 1;

/// Probability denominator for open-ended course selection.
const OPEN_ENDED_DENOMINATOR: u32 = 5;

/// First number assigned to a generated course code.
const COURSE_CODE_BASE: usize = 100;

/// Generates a complete roster data set from a seed plan.
///
/// Uses the plan's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same plan. The generated data has:
///
/// - Unique UUIDs (deterministically generated)
/// - Valid display names and unique institutional email addresses
/// - Student cohorts and departments drawn from fixed ranges
/// - Course codes derived from the department and a running number
/// - Course terms of 12 to 16 weeks, with roughly one in five open-ended
///
/// Students, teachers, and courses are generated in that order; consuming the
/// RNG in a different order would change every subsequent value.
///
/// # Errors
///
/// Returns [`GenerationError`] if display name generation fails after maximum
/// retries, or a generated date falls outside the representable range.
///
/// # Example
///
/// ```
/// use example_data::{SeedPlan, generate_roster};
///
/// let json = r#"{
///     "version": 1,
///     "seed": 42,
///     "studentCount": 3,
///     "teacherCount": 1,
///     "courseCount": 2
/// }"#;
///
/// let plan = SeedPlan::from_json(json).expect("valid plan");
/// let roster = generate_roster(&plan).expect("generation succeeds");
///
/// assert_eq!(roster.students.len(), 3);
/// // Same plan produces identical data
/// let again = generate_roster(&plan).expect("generation succeeds");
/// assert_eq!(roster, again);
/// ```
pub fn generate_roster(plan: &SeedPlan) -> Result<RosterSeed, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(plan.seed());
    let mut used_emails = HashSet::new();

    let mut students = Vec::with_capacity(plan.student_count());
    for _ in 0..plan.student_count() {
        students.push(generate_student(&mut rng, &mut used_emails)?);
    }

    let mut teachers = Vec::with_capacity(plan.teacher_count());
    for _ in 0..plan.teacher_count() {
        teachers.push(generate_teacher(&mut rng, &mut used_emails)?);
    }

    let mut courses = Vec::with_capacity(plan.course_count());
    for index in 0..plan.course_count() {
        courses.push(generate_course(&mut rng, index)?);
    }

    Ok(RosterSeed {
        students,
        teachers,
        courses,
    })
}

/// Generates a single student with the provided RNG.
fn generate_student(
    rng: &mut ChaCha8Rng,
    used_emails: &mut HashSet<String>,
) -> Result<StudentSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());
    let (first_name, last_name) = generate_person_name(rng)?;
    let email = unique_email(&first_name, &last_name, used_emails);
    let cohort = rng.random_range(COHORT_MIN..=COHORT_MAX);
    let department = pick(rng, &DEPARTMENTS);

    Ok(StudentSeed {
        id,
        first_name,
        last_name,
        email,
        cohort,
        department,
    })
}

/// Generates a single teacher with the provided RNG.
fn generate_teacher(
    rng: &mut ChaCha8Rng,
    used_emails: &mut HashSet<String>,
) -> Result<TeacherSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());
    let (first_name, last_name) = generate_person_name(rng)?;
    let email = unique_email(&first_name, &last_name, used_emails);
    let specialization = pick(rng, &SPECIALIZATIONS);

    Ok(TeacherSeed {
        id,
        first_name,
        last_name,
        email,
        specialization,
    })
}

/// Generates a single course with the provided RNG.
///
/// The running `index` keeps course codes unique without consuming RNG state.
fn generate_course(rng: &mut ChaCha8Rng, index: usize) -> Result<CourseSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());
    let department = pick(rng, &DEPARTMENTS);
    let code = course_code(&department, index);
    let qualifier = pick(rng, &COURSE_QUALIFIERS);
    let subject = pick(rng, &COURSE_SUBJECTS);
    let name = format!("{qualifier} {subject}");

    let year = rng.random_range(COURSE_YEAR_MIN..=COURSE_YEAR_MAX);
    let month = rng.random_range(1..=12);
    let start_date =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(GenerationError::DateOutOfRange)?;

    let end_date = if rng.random_ratio(OPEN_ENDED_NUMERATOR, OPEN_ENDED_DENOMINATOR) {
        None
    } else {
        let weeks = rng.random_range(TERM_MIN_WEEKS..=TERM_MAX_WEEKS);
        let end = start_date
            .checked_add_days(Days::new(weeks * 7))
            .ok_or(GenerationError::DateOutOfRange)?;
        Some(end)
    };

    Ok(CourseSeed {
        id,
        code,
        name,
        start_date,
        end_date,
    })
}

/// Generates a first and last name whose combination is a valid display name.
///
/// Retries up to `MAX_NAME_ATTEMPTS` times if the combined name fails
/// validation after sanitisation.
fn generate_person_name(rng: &mut ChaCha8Rng) -> Result<(String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let first = sanitize_display_name(&first);
        let last = sanitize_display_name(&last);
        let combined = format!("{first} {last}");

        if is_valid_display_name(&combined) {
            return Ok((first, last));
        }
    }

    Err(GenerationError::DisplayNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Derives an email address from a name, disambiguating collisions with a
/// numeric suffix.
fn unique_email(first: &str, last: &str, used: &mut HashSet<String>) -> String {
    let mut local = email_local_part(first, last);
    if local.is_empty() {
        local = "roster.member".to_owned();
    }

    let mut candidate = format!("{local}@{EMAIL_DOMAIN}");
    let mut suffix: usize = 2;
    while used.contains(&candidate) {
        candidate = format!("{local}{suffix}@{EMAIL_DOMAIN}");
        suffix = suffix.saturating_add(1);
    }

    used.insert(candidate.clone());
    candidate
}

/// Builds a course code such as `MATH101` from a department and index.
fn course_code(department: &str, index: usize) -> String {
    let prefix: String = department
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(4)
        .collect::<String>()
        .to_uppercase();
    format!("{prefix}{}", COURSE_CODE_BASE.saturating_add(index))
}

/// Picks one entry from a non-empty constant slice.
fn pick(rng: &mut ChaCha8Rng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_owned()
}
