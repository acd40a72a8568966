use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
// ASCII digits only, `\d` in the regex crate would also accept other scripts
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern compiles"));

/// Why a field failed. The `Display` text is what gets shown under the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Generic,
    Email,
    Phone,
}

impl FieldKind {
    pub fn for_name(name: &str) -> Self {
        match name {
            "email" => FieldKind::Email,
            "phone" => FieldKind::Phone,
            _ => FieldKind::Generic,
        }
    }
}

/// Event that asked for a validation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Blur,
    Input,
}

pub fn field_label(name: &str) -> &str {
    match name {
        "firstName" => "First Name",
        "lastName" => "Last Name",
        "email" => "Email Address",
        "phone" => "Phone Number",
        "address" => "Property Address",
        "quoteType" => "Quote Type",
        "description" => "Description",
        other => other,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE_RE.is_match(&stripped)
}

pub fn validate_field(name: &str, value: &str, required: bool) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        // an optional field left blank has nothing to check
        return if required {
            Err(FieldError::Required {
                label: field_label(name).to_string(),
            })
        } else {
            Ok(())
        };
    }

    match FieldKind::for_name(name) {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Phone if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Errors currently displayed on the form, one per field at most.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, FieldError>,
}

impl FieldErrors {
    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Runs a validation pass if the trigger calls for one and updates the
    /// displayed error. Blur always validates; input only re-checks a field
    /// that is already flagged. Returns `None` when no pass was run.
    pub fn check(&mut self, trigger: Trigger, name: &str, value: &str, required: bool) -> Option<bool> {
        if trigger == Trigger::Input && !self.has_error(name) {
            return None;
        }
        let result = validate_field(name, value, required);
        Some(self.record(name, result))
    }

    pub fn record(&mut self, name: &str, result: Result<(), FieldError>) -> bool {
        match result {
            Ok(()) => {
                self.errors.remove(name);
                true
            }
            Err(err) => {
                self.errors.insert(name.to_string(), err);
                false
            }
        }
    }

    /// Validates each `(name, value)` as a required field and records the
    /// result for every one of them. True when all pass.
    pub fn check_all<'a, I>(&mut self, fields: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut all_valid = true;
        for (name, value) in fields {
            all_valid &= self.record(name, validate_field(name, value, true));
        }
        all_valid
    }

    pub fn forget(&mut self, name: &str) {
        self.errors.remove(name);
    }
}
