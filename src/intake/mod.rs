//! Submission intake: the layer in front of the engine that decodes raw
//! submissions and rejects values the engine does not accept.

pub mod submission;

pub use submission::{
    into_opinions, parse_submissions, validate, IntakeError, IntakeOutcome, Rejection, Submission,
};
