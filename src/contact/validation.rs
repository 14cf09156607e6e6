use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::MESSAGE_MIN_CHARS;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FullName, Field::Email, Field::Phone, Field::Message];

    /// Form control name, also the JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

/// One contact request. Transient: never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

/// Field-scoped error messages. Errors are data, never `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(submission: &ContactSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if submission.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Le nom complet est requis");
    }

    // Presence is judged trimmed, the shape on the value as typed
    if submission.email.trim().is_empty() {
        errors.insert(Field::Email, "L'adresse e-mail est requise");
    } else if !is_valid_email(&submission.email) {
        errors.insert(Field::Email, "Veuillez entrer une adresse e-mail valide");
    }

    if submission.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Le numéro de téléphone est requis");
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, "Le message est requis");
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(Field::Message, "Le message doit contenir au moins 10 caractères");
    }

    errors
}
