// Matching: ranks postings for a seeker and candidates for a posting.
// The scorer is pure; jitter only touches what the UI displays.

pub mod analytics;
pub mod candidates;
pub mod handlers;
pub mod jitter;
pub mod scorer;
