use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type shared by the pipeline, optimizer, and
/// evaluation loop. Faults are surfaced to the caller unmodified; there is
/// no retry or recovery above the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
