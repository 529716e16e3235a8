//! Field validation rules.

use std::sync::OnceLock;

use regex::Regex;
use roster_model::{AGE_MAX, AGE_MIN};
use thiserror::Error;

use crate::Field;

/// Reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field left empty (or whitespace only)
    #[error("{} is required", .0.label())]
    RequiredField(Field),
    /// Email does not look like `local@domain.tld`
    #[error("Please enter a valid email")]
    InvalidFormat,
    /// Age is not an integer within the accepted range
    #[error("Please enter a valid age")]
    OutOfRange,
}

/// Per-field error slots of one form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    slots: [Option<FieldError>; 4],
}

impl FieldErrors {
    /// Error currently attached to `field`
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.slots[field.index()].as_ref()
    }

    /// Attach an error to `field`
    pub fn set(&mut self, field: Field, error: FieldError) {
        self.slots[field.index()] = Some(error);
    }

    /// Remove the error of `field`, returning whether one was present
    pub fn clear(&mut self, field: Field) -> bool {
        self.slots[field.index()].take().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of fields carrying an error
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Failing fields with their errors, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Name must contain something other than whitespace.
pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    require(raw, Field::Name)
}

/// Email must be present and shaped like `local@domain.tld`.
pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    require(raw, Field::Email)?;
    if email_pattern().is_match(raw) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat)
    }
}

/// Age must be present and an integer within `AGE_MIN..=AGE_MAX`.
pub fn validate_age(raw: &str) -> Result<u8, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::RequiredField(Field::Age));
    }

    trimmed
        .parse::<i64>()
        .ok()
        .filter(|age| (AGE_MIN as i64..=AGE_MAX as i64).contains(age))
        .map(|age| age as u8)
        .ok_or(FieldError::OutOfRange)
}

/// Grade must contain something other than whitespace.
pub fn validate_grade(raw: &str) -> Result<(), FieldError> {
    require(raw, Field::Grade)
}

fn require(raw: &str, field: Field) -> Result<(), FieldError> {
    if raw.trim().is_empty() {
        Err(FieldError::RequiredField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages() {
        assert_eq!(
            validate_name("   ").unwrap_err().to_string(),
            "Name is required"
        );
        assert_eq!(
            validate_grade("").unwrap_err().to_string(),
            "Grade is required"
        );
        assert_eq!(
            validate_email("").unwrap_err().to_string(),
            "Email is required"
        );
        assert_eq!(validate_age("").unwrap_err().to_string(), "Age is required");
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("mike.chen@school.com").is_ok());
        assert_eq!(validate_email("bad"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@b"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a b@c.d"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@@b.c"), Err(FieldError::InvalidFormat));
        assert_eq!(
            validate_email("bad").unwrap_err().to_string(),
            "Please enter a valid email"
        );
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(validate_age("1"), Ok(1));
        assert_eq!(validate_age("120"), Ok(120));
        assert_eq!(validate_age(" 20 "), Ok(20));
        assert_eq!(validate_age("0"), Err(FieldError::OutOfRange));
        assert_eq!(validate_age("121"), Err(FieldError::OutOfRange));
        assert_eq!(validate_age("200"), Err(FieldError::OutOfRange));
        assert_eq!(validate_age("-5"), Err(FieldError::OutOfRange));
        assert_eq!(validate_age("twelve"), Err(FieldError::OutOfRange));
        assert_eq!(validate_age("99999999999999999999"), Err(FieldError::OutOfRange));
    }

    #[test]
    fn test_field_errors_slots() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());

        errors.set(Field::Age, FieldError::OutOfRange);
        errors.set(Field::Name, FieldError::RequiredField(Field::Name));
        assert_eq!(errors.len(), 2);

        let order: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![Field::Name, Field::Age]);

        assert!(errors.clear(Field::Age));
        assert!(!errors.clear(Field::Age));
        assert_eq!(errors.len(), 1);
    }
}
