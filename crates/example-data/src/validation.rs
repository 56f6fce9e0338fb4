//! Name and email validation mirroring engine constraints.
//!
//! Generated people must be presentable to the roster engine without further
//! cleanup, so the rules here match what the engine accepts for candidate
//! display names and emails.
//!
//! # Validation Rules
//!
//! - Display names are 2 to 64 characters of letters, spaces, hyphens,
//!   apostrophes, and periods, with no surrounding whitespace
//! - Email local parts contain only lowercase ASCII letters, digits, and
//!   periods

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 2;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Validates a display name against engine constraints.
///
/// Returns `true` if the name satisfies all validation rules:
/// - Length between [`DISPLAY_NAME_MIN`] and [`DISPLAY_NAME_MAX`] characters
/// - Contains only letters, spaces, hyphens, apostrophes, and periods
/// - No leading or trailing whitespace
///
/// # Examples
///
/// ```
/// use example_data::is_valid_display_name;
///
/// assert!(is_valid_display_name("Ada Lovelace"));
/// assert!(is_valid_display_name("Conor O'Brien"));
/// assert!(!is_valid_display_name("a"));            // Too short
/// assert!(!is_valid_display_name("user@email"));   // Invalid character
/// assert!(!is_valid_display_name(" padded "));     // Surrounding whitespace
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim() != name || name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_display_name_char)
}

/// Returns `true` if the character is allowed in a display name.
#[must_use]
fn is_valid_display_name_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.')
}

/// Sanitizes a raw name by dropping characters that are not allowed.
///
/// This does not enforce length constraints; callers re-validate the result.
#[must_use]
pub(crate) fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .filter(|c| is_valid_display_name_char(*c))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Derives an email local part from a first and last name.
///
/// Lowercases both names, keeps ASCII alphanumerics only, and joins them
/// with a period. Either side may collapse to nothing for exotic input;
/// callers handle the empty case.
#[must_use]
pub(crate) fn email_local_part(first: &str, last: &str) -> String {
    let clean = |name: &str| {
        name.to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
    };
    let first = clean(first);
    let last = clean(last);
    if first.is_empty() || last.is_empty() {
        format!("{first}{last}")
    } else {
        format!("{first}.{last}")
    }
}
