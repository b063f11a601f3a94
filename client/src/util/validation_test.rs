use super::*;

fn register_form(name: &str, last_name: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_plain_address() {
    assert!(looks_like_email("ada@example.com"));
    assert!(looks_like_email("  ada@example.com  "));
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!looks_like_email("adaexample.com"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("ada@.com"));
    assert!(!looks_like_email("ada@example."));
    assert!(!looks_like_email(""));
}

#[test]
fn email_rejects_whitespace_inside_match() {
    assert!(!looks_like_email("ada@exa mple.com"));
}

// =============================================================
// Habit name
// =============================================================

#[test]
fn habit_name_counts_trimmed_characters() {
    assert_eq!(validate_habit_name("Run"), Ok(()));
    assert_eq!(validate_habit_name("  ab  "), Err("Name must be at least 3 characters long."));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_accepts_valid_form() {
    assert_eq!(validate_register(&register_form("Ada", "Lovelace", "ada@example.com", "Secret123")), Ok(()));
}

#[test]
fn register_reports_every_failing_field() {
    let errors = validate_register(&register_form("Al", " Li ", "nope", "short")).unwrap_err();
    assert_eq!(errors.name, Some("Name must be at least 3 characters long."));
    assert_eq!(errors.last_name, Some("Last Name must be at least 3 characters long."));
    assert_eq!(errors.email, Some("Email is not valid."));
    assert_eq!(errors.password, Some("Password must be at least 8 characters long."));
}

#[test]
fn register_password_rules_apply_in_order() {
    let upper = validate_register(&register_form("Ada", "Lovelace", "ada@example.com", "secret123")).unwrap_err();
    assert_eq!(upper.password, Some("Password must contain at least one uppercase letter."));
    assert_eq!(upper.name, None);

    let digit = validate_register(&register_form("Ada", "Lovelace", "ada@example.com", "SecretPass")).unwrap_err();
    assert_eq!(digit.password, Some("Password must contain at least one number."));
}

#[test]
fn register_errors_default_is_empty() {
    assert!(RegisterErrors::default().is_empty());
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_update_requires_longer_last_name() {
    let dto = UpdateUserDto {
        name: "Ada".to_owned(),
        last_name: "Love".to_owned(),
        email: "ada@example.com".to_owned(),
    };
    assert_eq!(validate_profile_update(&dto), Err("Last name must be at least 5 characters long"));
}

#[test]
fn profile_update_checks_name_then_email() {
    let short_name = UpdateUserDto {
        name: "A".to_owned(),
        last_name: "x".to_owned(),
        email: "bad".to_owned(),
    };
    assert_eq!(validate_profile_update(&short_name), Err("Name must be at least 3 characters long"));

    let bad_email = UpdateUserDto {
        name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "bad".to_owned(),
    };
    assert_eq!(validate_profile_update(&bad_email), Err("Invalid email format"));
}

#[test]
fn password_change_rules() {
    let mut dto = ChangePasswordDto {
        current_password: "old".to_owned(),
        new_password: String::new(),
        confirm_new_password: "x".to_owned(),
    };
    assert_eq!(validate_password_change(&dto), Err("All fields are required"));

    dto.new_password = "Different1".to_owned();
    assert_eq!(validate_password_change(&dto), Err("Passwords do not match"));

    dto.new_password = "short".to_owned();
    dto.confirm_new_password = "short".to_owned();
    assert_eq!(validate_password_change(&dto), Err("Minimum 8 characters"));

    dto.new_password = "LongEnough1".to_owned();
    dto.confirm_new_password = "LongEnough1".to_owned();
    assert_eq!(validate_password_change(&dto), Ok(()));
}
