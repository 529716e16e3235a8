//! Sample roster loaded on startup.

use crate::{StudentId, StudentRecord};

/// The five sample students every session starts with.
pub fn sample_roster() -> Vec<StudentRecord> {
    [
        ("1", "John Mwangi", "john.mwangi@school.com", 16, "A"),
        ("2", "Sarah Johnson", "sarah.j@school.com", 15, "A+"),
        ("3", "Mike Chen", "mike.chen@school.com", 17, "B+"),
        ("4", "Emily Davis", "emily.d@school.com", 16, "A-"),
        ("5", "David Kim", "david.kim@school.com", 18, "B"),
    ]
    .into_iter()
    .map(|(id, name, email, age, grade)| StudentRecord {
        id: StudentId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        age,
        grade: grade.to_string(),
    })
    .collect()
}
