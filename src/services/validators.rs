use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{DomainError, DomainResult};

/// Validate an email address and normalize it to lowercase.
pub fn validate_and_normalize_email(email: &str) -> DomainResult<String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(DomainError::ValidationError(
            "Invalid email format. Must be in format user@domain.tld".to_string(),
        ));
    }

    // Additional validation: require a TLD (dot after @)
    if let Some(at_pos) = trimmed.find('@') {
        let domain_part = &trimmed[at_pos + 1..];
        if !domain_part.contains('.') {
            return Err(DomainError::ValidationError(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            ));
        }
    }

    Ok(trimmed.to_lowercase())
}

fn contact_phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap())
}

/// Loose international phone check: optional leading `+`, then 2-15 digits
/// after separators (spaces, dashes, dots, parentheses) are stripped.
pub fn is_valid_contact_phone(phone: &str) -> bool {
    let mut stripped = String::new();
    for (i, c) in phone.trim().chars().enumerate() {
        match c {
            '+' if i == 0 => stripped.push('+'),
            '0'..='9' => stripped.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    contact_phone_regex().is_match(&stripped)
}

/// Title-case every word: first character uppercased, the rest lowercased.
/// Applied to the full-name field on every edit.
pub fn capitalize_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}
