// Clippy allows for reasonable defaults
#![allow(clippy::unnecessary_map_or)] // map_or can be clearer than alternatives

//! Discovery backend for the Content Assembly Line.
//!
//! Diagnoses how much detail a creator's free-text idea already carries,
//! picks the follow-up questions worth asking, tracks the conversation in a
//! session document, and renders the script-generation prompt once
//! discovery is done.

// Module declarations
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_storage;
mod models;
pub mod templates;

// Re-export models and the discovery entry points
pub use discovery::{
    calculate_progress, diagnose, extract_signals, generate_question_plan, generate_questions,
    should_show_gate, DiscoverySession,
};
pub use error::{Error, Result};
pub use models::*;
pub use templates::PromptBuilder;
