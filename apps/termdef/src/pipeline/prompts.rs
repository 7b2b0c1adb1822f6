// All prompt constants and rendering for the pipeline steps.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

use crate::data::Example;

/// Task half of the validate system prompt; the oracle appends
/// `llm_client::prompts::JSON_ONLY_SYSTEM`.
pub const VALIDATE_SYSTEM: &str =
    "You are a strict terminology reviewer for a technical glossary. \
    You decide whether a term names a real, definable concept that belongs \
    in the glossary.";

/// Validate prompt template. Replace `{term}` before sending.
pub const VALIDATE_PROMPT_TEMPLATE: &str = r#"Decide whether the following term is a legitimate concept worth a glossary definition.

Return a JSON object with this EXACT schema (no extra fields):
{
  "is_valid_term": "yes",
  "reason": "one-sentence explanation of the decision"
}

`is_valid_term` must be exactly "yes" or "no" — no punctuation, no hedging.

TERM:
{term}"#;

/// Task half of the define system prompt; the oracle appends
/// `llm_client::prompts::JSON_ONLY_SYSTEM`.
pub const DEFINE_SYSTEM: &str =
    "You are an expert technical writer. Given a term, provide its definition: \
    accurate, self-contained, and written for a general technical audience.";

/// Define prompt template. Replace `{demos}` and `{term}` before sending.
/// `{demos}` is empty for an uncompiled program.
pub const DEFINE_PROMPT_TEMPLATE: &str = r#"{demos}Given a term, provide its definition.

Return a JSON object with this EXACT schema (no extra fields):
{
  "definition": "the full definition text"
}

TERM:
{term}"#;

pub fn render_validate_prompt(term: &str) -> String {
    VALIDATE_PROMPT_TEMPLATE.replace("{term}", term)
}

pub fn render_define_prompt(term: &str, demos: &[Example]) -> String {
    DEFINE_PROMPT_TEMPLATE
        .replace("{demos}", &format_demos(demos))
        .replace("{term}", term)
}

/// Formats few-shot demonstrations as a prompt preamble.
/// Returns an empty string when there are none.
fn format_demos(demos: &[Example]) -> String {
    if demos.is_empty() {
        return String::new();
    }

    let mut block = String::from("Here are examples of well-written definitions:\n\n");
    for demo in demos {
        block.push_str(&format!(
            "TERM:\n{}\nDEFINITION:\n{}\n\n",
            demo.term, demo.definition
        ));
    }
    block.push_str("---\n\n");
    block
}
