// Discovery engine - adaptive questioning before script generation
//
// This module is organized into submodules:
// - diagnosis: Input entropy classification
// - questions: Adaptive follow-up question generation
// - progress: Percentage-complete and "generate now" gate helpers
// - session: Turn-by-turn discovery conversation state

mod diagnosis;
mod progress;
mod questions;
mod session;

pub use diagnosis::{count_sentences, count_words, diagnose, extract_signals};
pub use progress::{calculate_progress, should_show_gate, GATE_MIN_ANSWERED};
pub use questions::{generate_question_plan, generate_questions, question_for};
pub use session::DiscoverySession;
