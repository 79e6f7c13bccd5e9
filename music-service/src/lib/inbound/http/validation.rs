//! Request-shape validation.
//!
//! Validators emit raw messages of the form `"<field> <description>"`.
//! [`collapse_messages`] folds those into one `{field, message}` pair per
//! field for the wire, keeping only the last message per field and
//! preserving first-seen field order.

use serde::Serialize;

/// Symbols accepted by the password policy.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collapse raw `"<field> <description>"` messages into one entry per
/// field. The field name is the leading `[A-Za-z0-9_]+` token; messages
/// without one are filed under `"unknown"`. When several messages target
/// the same field, only the last one survives.
pub fn collapse_messages(raw_messages: &[String]) -> Vec<FieldError> {
    let mut collapsed: Vec<FieldError> = Vec::new();

    for raw in raw_messages {
        let prefix_len = raw
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .count();

        let (field, message) = if prefix_len == 0 {
            ("unknown".to_string(), raw.trim().to_string())
        } else {
            let (field, rest) = raw.split_at(prefix_len);
            (field.to_string(), rest.trim_start().to_string())
        };

        match collapsed.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.message = message,
            None => collapsed.push(FieldError { field, message }),
        }
    }

    collapsed
}

/// Check a registration request against the credential policy. Returns
/// the raw message list; empty means the request is well formed.
pub fn validate_registration(username: &str, password: &str) -> Vec<String> {
    let mut messages = Vec::new();

    if username.is_empty() {
        messages.push("username Username is required".to_string());
    }
    if username.chars().count() < 3 {
        messages.push("username Username must be at least 3 characters".to_string());
    }
    if username.chars().count() > 20 {
        messages.push("username Username must be at most 20 characters".to_string());
    }

    if password.is_empty() {
        messages.push("password Password is required".to_string());
    }
    if password.chars().count() < 6 {
        messages.push("password Password must be at least 6 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        messages.push("password Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        messages.push("password Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        messages.push("password Password must contain at least one digit".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        messages.push("password Password must contain at least one symbol".to_string());
    }

    messages
}
