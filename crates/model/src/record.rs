//! Record and identifier types.

use std::fmt;

/// Youngest accepted age (inclusive).
pub const AGE_MIN: u8 = 1;
/// Oldest accepted age (inclusive).
pub const AGE_MAX: u8 = 120;

/// Stable record identifier.
///
/// Assigned once when a record enters the roster and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    /// Wrap an identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier, if it is a plain decimal number
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A student stored in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub age: u8,
    pub grade: String,
}

impl StudentRecord {
    /// Copy of the editable fields (everything except the id)
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            grade: self.grade.clone(),
        }
    }
}

/// Validated record contents without an identifier.
///
/// Only produced by a successful editor submission; the controller attaches
/// the id when the draft enters the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub grade: String,
}

impl StudentDraft {
    /// Attach an identifier, producing a roster record
    pub fn into_record(self, id: StudentId) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            grade: self.grade,
        }
    }
}
