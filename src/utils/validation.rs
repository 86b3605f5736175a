//! Form-field validation
//!
//! Runs client-side before anything touches the network; a failed check
//! blocks the submission outright. Phone handling assumes Indian mobile
//! numbers: ten digits on the wire plus an optional +91 prefix.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::error::{ApiError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim().to_lowercase();
    !email.is_empty() && EMAIL_RE.is_match(&email)
}

fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Exactly ten digits after stripping separators.
pub fn is_valid_phone(phone: &str) -> bool {
    digits_only(phone).len() == 10
}

/// Render a phone number in wire form with the +91 country prefix.
/// Empty input stays empty; anything else must be a valid ten-digit number.
pub fn format_phone_number(phone: &str) -> Result<String> {
    if phone.is_empty() {
        return Ok(String::new());
    }
    let digits = digits_only(phone);
    if digits.len() != 10 {
        return Err(ApiError::Validation(
            "phone number must be exactly 10 digits".into(),
        ));
    }
    Ok(format!("+91{digits}"))
}

/// Strip the country prefix for display: `+911234567890` becomes
/// `1234567890`; already-bare numbers pass through.
pub fn normalize_phone_number(phone: &str) -> String {
    let digits = digits_only(phone);
    if digits.len() == 12 && digits.starts_with("91") {
        digits[2..].to_string()
    } else {
        digits
    }
}
