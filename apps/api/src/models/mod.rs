pub mod candidate;

pub use candidate::{CandidateRecord, CANDIDATE_CSV_HEADER};
