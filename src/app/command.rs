use crate::domain::Candidate;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Selected(Candidate),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Leave the loop and report the outcome to the caller.
    Finish(Outcome),
}
