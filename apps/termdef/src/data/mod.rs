#![allow(dead_code)]

//! Toy labeled example sets for the term-definition task.
//!
//! `train` feeds the bootstrap optimizer, `dev` is for inspection during
//! tuning, `test` is held out for final evaluation only.

pub mod dev;
pub mod train;

/// An immutable labeled example: a term and its reference definition.
///
/// Used only as reference data for scoring and demonstration selection,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub term: String,
    pub definition: String,
    input_keys: Vec<&'static str>,
}

impl Example {
    pub fn new(term: &str, definition: &str) -> Self {
        Self {
            term: term.to_string(),
            definition: definition.to_string(),
            input_keys: Vec::new(),
        }
    }

    /// Marks which fields are supplied as input at invocation time.
    /// Everything else is a label.
    pub fn with_inputs(mut self, keys: &[&'static str]) -> Self {
        self.input_keys = keys.to_vec();
        self
    }

    pub fn input_keys(&self) -> &[&'static str] {
        &self.input_keys
    }
}
