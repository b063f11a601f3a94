//! Client-side form rules.
//!
//! These mirror the backend's constraints closely enough to catch typos
//! before a round trip; the backend stays authoritative.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{ChangePasswordDto, RegisterRequest, UpdateUserDto};

const MIN_NAME_LEN: usize = 3;
const MIN_PROFILE_LAST_NAME_LEN: usize = 5;
const MIN_PASSWORD_LEN: usize = 8;

/// `true` when `raw` contains `something@something.something` with no
/// whitespace inside the match.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    raw.split_whitespace().any(|word| {
        let Some(at) = word.char_indices().skip(1).find(|&(_, c)| c == '@').map(|(i, _)| i) else {
            return false;
        };
        let domain = &word[at + 1..];
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    })
}

fn has_min_chars(raw: &str, min: usize) -> bool {
    raw.trim().chars().count() >= min
}

/// Habit names need at least three visible characters.
///
/// # Errors
///
/// Returns the message to show when the name is too short.
pub fn validate_habit_name(name: &str) -> Result<(), &'static str> {
    if has_min_chars(name, MIN_NAME_LEN) {
        Ok(())
    } else {
        Err("Name must be at least 3 characters long.")
    }
}

/// Per-field registration errors; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl RegisterErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.last_name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

fn password_error(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters long.")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain at least one uppercase letter.")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number.")
    } else {
        None
    }
}

/// Check every registration field, reporting the first failing rule for each.
///
/// # Errors
///
/// Returns the collected [`RegisterErrors`] when any field fails.
pub fn validate_register(form: &RegisterRequest) -> Result<(), RegisterErrors> {
    let errors = RegisterErrors {
        name: (!has_min_chars(&form.name, MIN_NAME_LEN)).then_some("Name must be at least 3 characters long."),
        last_name: (!has_min_chars(&form.last_name, MIN_NAME_LEN))
            .then_some("Last Name must be at least 3 characters long."),
        email: (!looks_like_email(&form.email)).then_some("Email is not valid."),
        password: password_error(&form.password),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Profile edits use a stricter last-name rule than registration.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn validate_profile_update(dto: &UpdateUserDto) -> Result<(), &'static str> {
    if !has_min_chars(&dto.name, MIN_NAME_LEN) {
        return Err("Name must be at least 3 characters long");
    }
    if !has_min_chars(&dto.last_name, MIN_PROFILE_LAST_NAME_LEN) {
        return Err("Last name must be at least 5 characters long");
    }
    if !looks_like_email(&dto.email) {
        return Err("Invalid email format");
    }
    Ok(())
}

/// # Errors
///
/// Returns the first failing rule's message.
pub fn validate_password_change(dto: &ChangePasswordDto) -> Result<(), &'static str> {
    if dto.current_password.is_empty() || dto.new_password.is_empty() || dto.confirm_new_password.is_empty() {
        return Err("All fields are required");
    }
    if dto.new_password != dto.confirm_new_password {
        return Err("Passwords do not match");
    }
    if dto.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Minimum 8 characters");
    }
    Ok(())
}
