//! Coach comment generators.
//!
//! - `openrouter`: OpenRouter (OpenAI-compatible chat completions) implementation

pub mod openrouter;

pub use openrouter::{OpenRouterCommentGenerator, OpenRouterConfig};
