//! Signature shapes — the declared output fields of each reasoning step.
//!
//! The input side of both signatures is a single `term` string, rendered
//! into the prompt templates in `pipeline::prompts`. The output side is the
//! JSON object the model must return, deserialized via serde.

use serde::Deserialize;

/// Output fields of the validate step.
///
/// `is_valid_term` is kept as the raw token string the model produced;
/// normalization and the accept/reject decision belong to the program, not
/// the signature.
#[derive(Debug, Clone, Deserialize)]
pub struct TermValidation {
    pub is_valid_term: String,
    pub reason: String,
}

/// Output field of the define step.
#[derive(Debug, Clone, Deserialize)]
pub struct TermDefinition {
    pub definition: String,
}
