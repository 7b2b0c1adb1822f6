//! Pipeline — signature shapes, prompt templates, and program composition
//! for the two-stage "validate then define" task.

pub mod program;
pub mod prompts;
pub mod signatures;
