//! Booking inquiry validation.
//!
//! Inquiries come in as free-form JSON from the public booking form.
//! Validation reports the first offending field with a human-readable
//! message; nothing is persisted when validation fails.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::content::model::NewInquiry;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// At least 10 characters of digits and common separators, optionally
// prefixed with '+'.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone regex"));

/// First failing field plus message, surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct InquiryError {
    pub field: &'static str,
    pub message: String,
}

impl InquiryError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Validate a submitted inquiry. Fields are checked in declaration
/// order and the first failure wins.
pub fn validate(input: &NewInquiry) -> Result<(), InquiryError> {
    if input.event_type.trim().is_empty() {
        return Err(InquiryError::new("eventType", "Event type is required"));
    }
    if input.location.trim().is_empty() {
        return Err(InquiryError::new("location", "Location is required"));
    }
    if input.date.trim().is_empty() {
        return Err(InquiryError::new("date", "Date is required"));
    }
    if input.name.trim().chars().count() < 2 {
        return Err(InquiryError::new("name", "Name is required"));
    }

    let email = input.email.as_deref().map(str::trim).filter(|v| !v.is_empty());
    let phone = input.phone.as_deref().map(str::trim).filter(|v| !v.is_empty());

    if email.is_none() && phone.is_none() {
        return Err(InquiryError::new(
            "email",
            "Provide an email address or a phone number",
        ));
    }
    if let Some(email) = email {
        if !EMAIL_RE.is_match(email) {
            return Err(InquiryError::new("email", "Invalid email address"));
        }
    }
    if let Some(phone) = phone {
        if !PHONE_RE.is_match(phone) {
            return Err(InquiryError::new("phone", "Invalid phone number"));
        }
    }

    Ok(())
}

/// Normalize blank optional contact fields to `None` before persisting,
/// so empty strings from the form never reach the database.
pub fn normalized(mut input: NewInquiry) -> NewInquiry {
    if is_blank(&input.email) {
        input.email = None;
    }
    if is_blank(&input.phone) {
        input.phone = None;
    }
    input
}
