//! Student record model for roster.
//!
//! Pure data types shared by the editor and the controller: records,
//! identifiers, validated drafts, id generation and the search projection.
//! Nothing in this crate knows about rendering or input handling.

mod filter;
mod id;
mod record;
mod seed;

pub use filter::{filter_records, matches_query};
pub use id::IdGenerator;
pub use record::{StudentDraft, StudentId, StudentRecord, AGE_MAX, AGE_MIN};
pub use seed::sample_roster;
