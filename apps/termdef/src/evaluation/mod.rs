//! Evaluation — exact-match scoring between reference and produced
//! definitions.
//!
//! The scorer is deliberately blunt: trim, lowercase, then require
//! character-for-character equality. A single punctuation difference or a
//! semantically correct paraphrase both score false. It doubles as the
//! feedback signal for bootstrap demonstration selection.

use tracing::{debug, warn};

use crate::data::Example;
use crate::pipeline::program::{Prediction, Program};

/// True iff the reference and produced definitions are identical after
/// trimming whitespace and lowercasing. No partial credit, no tokenization.
pub fn definition_match(example: &Example, prediction: &Prediction) -> bool {
    normalize(&example.definition) == normalize(&prediction.definition)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Exact-match tally over one labeled set.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalSummary {
    pub correct: usize,
    pub total: usize,
}

impl EvalSummary {
    pub fn score(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Runs a program over a labeled set and tallies exact matches.
/// A failed invocation counts as a miss; the fault is logged, not raised,
/// so one bad example cannot sink a whole evaluation run.
pub async fn evaluate<P: Program>(program: &P, set: &[Example]) -> EvalSummary {
    let mut correct = 0;

    for example in set {
        match program.forward(&example.term).await {
            Ok(prediction) => {
                let matched = definition_match(example, &prediction);
                debug!(term = %example.term, matched, "evaluated example");
                if matched {
                    correct += 1;
                }
            }
            Err(e) => {
                warn!(term = %example.term, error = %e, "evaluation example failed");
            }
        }
    }

    EvalSummary {
        correct,
        total: set.len(),
    }
}
