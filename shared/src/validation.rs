//! Input validation functions
//!
//! Schema-level validation for the payloads crossing the API boundary.
//! Each schema function checks every field and reports all failures as a
//! field-name to message map; bad input never panics.

use std::collections::BTreeMap;

use crate::types::{ListingKind, NewListingRequest, LoginRequest, SignupRequest, LISTING_CATEGORIES};

/// Field name to message mapping for a failed validation
pub type FieldErrors = BTreeMap<String, String>;

/// Characters accepted as the "special" password class
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Validated signup payload; email is trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated login payload; email is trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

/// Validated listing payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidListing {
    pub title: String,
    pub description: String,
    pub kind: ListingKind,
    pub category: String,
}

/// Normalize an email for storage and comparison
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate email format (expects an already-normalized value)
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a display name: 2-100 characters, letters, spaces, hyphens
/// and apostrophes only
pub fn validate_name(name: &str) -> Result<(), String> {
    let length = name.chars().count();
    if length < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }
    if length > 100 {
        return Err("Name must be at most 100 characters".to_string());
    }
    let name_regex = regex_lite::Regex::new(r"^[A-Za-z' -]+$").unwrap();
    if !name_regex.is_match(name) {
        return Err(
            "Name may only contain letters, spaces, hyphens and apostrophes".to_string(),
        );
    }
    Ok(())
}

/// Collect every password policy rule the candidate fails
///
/// All failures are reported together rather than stopping at the first.
pub fn password_failures(password: &str) -> Vec<&'static str> {
    let mut failures = Vec::new();
    if password.chars().count() < 8 {
        failures.push("must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        failures.push("must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        failures.push("must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failures.push("must contain a digit");
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        failures.push("must contain a special character");
    }
    failures
}

/// Validate a signup payload
pub fn validate_signup(request: &SignupRequest) -> Result<ValidSignup, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = request.name.trim();
    if let Err(message) = validate_name(name) {
        errors.insert("name".to_string(), message);
    }

    let email = normalize_email(&request.email);
    if let Err(message) = validate_email(&email) {
        errors.insert("email".to_string(), message);
    }

    let failures = password_failures(&request.password);
    if !failures.is_empty() {
        errors.insert(
            "password".to_string(),
            format!("Password {}", failures.join(", ")),
        );
    }

    if errors.is_empty() {
        Ok(ValidSignup {
            name: name.to_string(),
            email,
            password: request.password.clone(),
        })
    } else {
        Err(errors)
    }
}

/// Validate a login payload
///
/// Login only requires an address-shaped email and a non-empty password;
/// the full password policy applies at signup, not here.
pub fn validate_login(request: &LoginRequest) -> Result<ValidLogin, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = normalize_email(&request.email);
    if let Err(message) = validate_email(&email) {
        errors.insert("email".to_string(), message);
    }

    if request.password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }

    if errors.is_empty() {
        Ok(ValidLogin {
            email,
            password: request.password.clone(),
        })
    } else {
        Err(errors)
    }
}

/// Validate a new listing payload
pub fn validate_new_listing(request: &NewListingRequest) -> Result<ValidListing, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = request.title.trim();
    let title_length = title.chars().count();
    if title_length < 5 {
        errors.insert(
            "title".to_string(),
            "Title must be at least 5 characters".to_string(),
        );
    } else if title_length > 200 {
        errors.insert(
            "title".to_string(),
            "Title must be at most 200 characters".to_string(),
        );
    }

    let description = request.description.trim();
    let description_length = description.chars().count();
    if description_length < 10 {
        errors.insert(
            "description".to_string(),
            "Description must be at least 10 characters".to_string(),
        );
    } else if description_length > 5000 {
        errors.insert(
            "description".to_string(),
            "Description must be at most 5000 characters".to_string(),
        );
    }

    let kind = ListingKind::parse(&request.kind);
    if kind.is_none() {
        errors.insert(
            "type".to_string(),
            "Type must be either 'offer' or 'request'".to_string(),
        );
    }

    if !LISTING_CATEGORIES.contains(&request.category.as_str()) {
        errors.insert(
            "category".to_string(),
            format!(
                "Category must be one of: {}",
                LISTING_CATEGORIES.join(", ")
            ),
        );
    }

    match (errors.is_empty(), kind) {
        (true, Some(kind)) => Ok(ValidListing {
            title: title.to_string(),
            description: description.to_string(),
            kind,
            category: request.category.clone(),
        }),
        _ => Err(errors),
    }
}
