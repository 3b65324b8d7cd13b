use std::collections::BTreeMap;

use crate::models::{Club, RoleSelection, User, UserDraft};
use crate::services::validators::{
    capitalize_words, is_valid_contact_phone, validate_and_normalize_email,
};

/// Form fields of the user builder, used to key per-field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserField {
    FullName,
    PhoneNumber,
    Email,
    Club,
    Role,
}

/// Edits a single user's contact fields, club assignment, and role
/// assignment.
///
/// Validation runs on every edit: required-field and format errors per
/// field, plus a non-blocking-looking but validity-blocking advisory when
/// the email matches a known registered address.
pub struct UserBuilder {
    clubs: Vec<Club>,
    known_emails: Vec<String>,
    draft: UserDraft,
    errors: BTreeMap<UserField, String>,
    email_warning: Option<String>,
}

impl UserBuilder {
    pub fn new(clubs: Vec<Club>, known_emails: Vec<String>) -> Self {
        let mut builder = Self {
            clubs,
            known_emails,
            draft: UserDraft::default(),
            errors: BTreeMap::new(),
            email_warning: None,
        };
        builder.validate();
        builder
    }

    /// Start from an existing user record. The duplicate-email advisory is
    /// not evaluated on load, only when the email field itself is edited, so
    /// a record whose stored email is on the registered list can still be
    /// re-saved untouched.
    pub fn edit_user(clubs: Vec<Club>, known_emails: Vec<String>, user: &User) -> Self {
        let mut builder = Self::new(clubs, known_emails);
        builder.draft = UserDraft::from_user(user);
        builder.validate();
        builder
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &BTreeMap<UserField, String> {
        &self.errors
    }

    pub fn error(&self, field: UserField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn email_warning(&self) -> Option<&str> {
        self.email_warning.as_deref()
    }

    /// No field errors and no active email warning.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.email_warning.is_none()
    }

    /// Set the full name, title-casing it on every edit.
    pub fn set_full_name(&mut self, value: &str) {
        self.draft.full_name = capitalize_words(value);
        self.validate();
    }

    pub fn set_phone_number(&mut self, value: &str) {
        self.draft.phone_number = value.to_string();
        self.validate();
    }

    pub fn set_email(&mut self, value: &str) {
        self.draft.email = value.to_string();
        self.refresh_email_warning();
        self.validate();
    }

    pub fn set_club(&mut self, club_id: &str) {
        self.draft.club = club_id.to_string();
        self.validate();
    }

    pub fn set_role(&mut self, selection: RoleSelection) {
        self.draft.role = Some(selection);
        self.validate();
    }

    pub fn clear_role(&mut self) {
        self.draft.role = None;
        self.validate();
    }

    // Advisory duplicate check against the known registered addresses. Only
    // runs once the email itself parses.
    fn refresh_email_warning(&mut self) {
        self.email_warning = None;
        if let Ok(normalized) = validate_and_normalize_email(&self.draft.email) {
            if self.known_emails.iter().any(|e| e.eq_ignore_ascii_case(&normalized)) {
                self.email_warning = Some("This email is already registered".to_string());
            }
        }
    }

    fn validate(&mut self) {
        self.errors.clear();

        if self.draft.full_name.trim().is_empty() {
            self.errors
                .insert(UserField::FullName, "Full name is required".to_string());
        }

        if self.draft.phone_number.trim().is_empty() {
            self.errors
                .insert(UserField::PhoneNumber, "Phone number is required".to_string());
        } else if !is_valid_contact_phone(&self.draft.phone_number) {
            self.errors.insert(
                UserField::PhoneNumber,
                "Please enter a valid phone number".to_string(),
            );
        }

        if self.draft.email.trim().is_empty() {
            self.errors
                .insert(UserField::Email, "Email is required".to_string());
        } else if validate_and_normalize_email(&self.draft.email).is_err() {
            self.errors.insert(
                UserField::Email,
                "Please enter a valid email address".to_string(),
            );
        }

        if self.draft.club.is_empty() {
            self.errors
                .insert(UserField::Club, "Please select a club".to_string());
        } else if !self.clubs.iter().any(|c| c.id == self.draft.club) {
            self.errors
                .insert(UserField::Club, "Unknown club selected".to_string());
        }

        if self.draft.role.is_none() {
            self.errors
                .insert(UserField::Role, "Please select a role".to_string());
        }
    }

    /// Turn the draft into a brand-new user record. `None` while invalid.
    pub fn build(&self) -> Option<User> {
        if !self.is_valid() {
            return None;
        }
        let role = self.draft.role.clone()?;
        Some(User::new(
            self.draft.full_name.trim().to_string(),
            self.draft.phone_number.trim().to_string(),
            self.draft.email.trim().to_lowercase(),
            self.draft.club.clone(),
            role,
        ))
    }

    /// Apply the draft onto an existing user, keeping id and creation stamp.
    /// `false` while invalid.
    pub fn apply_to(&self, user: &mut User) -> bool {
        if !self.is_valid() {
            return false;
        }
        let Some(role) = self.draft.role.clone() else {
            return false;
        };
        user.full_name = self.draft.full_name.trim().to_string();
        user.phone_number = self.draft.phone_number.trim().to_string();
        user.email = self.draft.email.trim().to_lowercase();
        user.club = self.draft.club.clone();
        user.role = role;
        user.touch();
        true
    }
}
