use std::sync::OnceLock;

use regex::Regex;
use shared::domain::{ContactField, ContactFields, FieldErrors};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

pub const MESSAGE_MIN_CHARS: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// Checks every field of the form snapshot and returns the per-field error
/// messages. Rules are cumulative across fields; within a field the
/// required-check and the format/length check are mutually exclusive. An
/// empty result means the snapshot may be submitted.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(ContactField::Name, NAME_REQUIRED.to_string());
    }

    if fields.email.trim().is_empty() {
        errors.insert(ContactField::Email, EMAIL_REQUIRED.to_string());
    } else if !email_pattern().is_match(&fields.email) {
        errors.insert(ContactField::Email, EMAIL_INVALID.to_string());
    }

    if fields.subject.trim().is_empty() {
        errors.insert(ContactField::Subject, SUBJECT_REQUIRED.to_string());
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, MESSAGE_REQUIRED.to_string());
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(ContactField::Message, MESSAGE_TOO_SHORT.to_string());
    }

    errors
}
