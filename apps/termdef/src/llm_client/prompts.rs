// Shared prompt fragments used by every pipeline step.
// Each task module defines its own prompts.rs alongside it; this file holds
// only cross-cutting instructions appended to task system prompts.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
