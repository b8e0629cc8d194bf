use chrono::{NaiveDate, NaiveTime};

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !valid {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

pub fn validate_min_len(value: &str, field_name: &str, min_len: usize) -> Option<String> {
    if value.trim().chars().count() < min_len {
        return Some(format!("Please provide a {field_name} (at least {min_len} characters)"));
    }
    None
}

/// Validate a `YYYY-MM-DD` date.
pub fn validate_date(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("Please select {field_name}"));
    }
    if NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
        return Some(format!("{field_name} must be a date (YYYY-MM-DD)"));
    }
    None
}

/// Validate an `HH:MM` time of day.
pub fn validate_time(value: &str, field_name: &str) -> Option<String> {
    if NaiveTime::parse_from_str(value.trim(), "%H:%M").is_err() {
        return Some(format!("{field_name} must be a time (HH:MM)"));
    }
    None
}
