//! LLM integration for narration, task generation and icon art

pub mod client;
pub mod narrator;
pub mod parser;

pub use client::LlmClient;
pub use narrator::{LlmIconArtist, LlmNarrator};
