pub mod candidate;
pub mod highlight;
pub mod matcher;

pub use candidate::{Candidate, CandidateError, Labeled};
pub use matcher::{fuzzy_match, FuzzyMatch};
