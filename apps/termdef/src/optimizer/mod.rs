//! Bootstrap few-shot optimization.
//!
//! `BootstrapFewShot` is handed a program, a metric, and a labeled train
//! set, and returns a compiled program: it runs the program over the train
//! examples and keeps as demonstrations the ones whose prediction passes
//! the metric, up to `max_demos`. Train examples that fail the metric or
//! fault are skipped, never fatal — a thin train set just yields fewer
//! demonstrations.

use tracing::{debug, info, warn};

use crate::data::Example;
use crate::errors::AppError;
use crate::pipeline::program::{Prediction, Program};

/// Feedback signal deciding whether a train example becomes a demonstration.
pub type Metric = fn(&Example, &Prediction) -> bool;

const DEFAULT_MAX_DEMOS: usize = 4;

pub struct BootstrapFewShot {
    metric: Metric,
    max_demos: usize,
}

impl BootstrapFewShot {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            max_demos: DEFAULT_MAX_DEMOS,
        }
    }

    pub fn with_max_demos(mut self, max_demos: usize) -> Self {
        self.max_demos = max_demos;
        self
    }

    /// Compiles a program against a train set, returning a copy carrying
    /// the selected demonstrations.
    pub async fn compile<P: Program>(
        &self,
        program: &P,
        trainset: &[Example],
    ) -> Result<P, AppError> {
        let mut demos: Vec<Example> = Vec::new();

        for example in trainset {
            if demos.len() >= self.max_demos {
                break;
            }

            let prediction = match program.forward(&example.term).await {
                Ok(p) => p,
                Err(e) => {
                    warn!(term = %example.term, error = %e, "bootstrap example faulted, skipping");
                    continue;
                }
            };

            if (self.metric)(example, &prediction) {
                debug!(term = %example.term, "bootstrapped demonstration");
                demos.push(example.clone());
            } else {
                debug!(term = %example.term, "train example failed metric, skipped");
            }
        }

        info!(
            selected = demos.len(),
            trainset = trainset.len(),
            "bootstrap compile complete"
        );

        Ok(program.with_demos(demos))
    }
}
