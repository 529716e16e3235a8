//! Monotonic identifier source.

use crate::{StudentId, StudentRecord};

/// Issues identifiers from a strictly increasing counter.
///
/// Successive calls always produce distinct ids, regardless of how quickly
/// they happen. Ids that already exist in the roster are skipped. Once the
/// counter passes `u64::MAX` it wraps to 1 and keeps skipping taken ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator starting at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a generator that continues after the largest numeric id in `records`
    pub fn seeded_from<'a>(records: impl IntoIterator<Item = &'a StudentRecord>) -> Self {
        let max = records
            .into_iter()
            .filter_map(|record| record.id.numeric())
            .max()
            .unwrap_or(0);
        Self {
            next: max.checked_add(1).unwrap_or(1),
        }
    }

    /// Issue the next identifier, skipping any value for which `taken` is true
    pub fn next_id(&mut self, taken: impl Fn(&StudentId) -> bool) -> StudentId {
        loop {
            let id = StudentId::new(self.next.to_string());
            self.next = self.next.checked_add(1).unwrap_or(1);
            if !taken(&id) {
                return id;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
