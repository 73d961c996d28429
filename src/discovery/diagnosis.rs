// Input entropy diagnosis
//
// Scores a free-text submission plus already-known fields into one of four
// entropy levels. Pure and total: every input, including the empty string,
// yields a diagnosis.

use crate::models::{DetectedDetails, EntropyLevel, InputDiagnosis, InputSignals, KnownInputs};
use regex::Regex;
use std::sync::OnceLock;

const AUDIENCE_KEYWORDS: [&str; 5] = [
    "audience",
    "people",
    "students",
    "entrepreneurs",
    "developers",
];

const GOAL_KEYWORDS: [&str; 5] = ["want", "goal", "help", "teach", "show"];

const STRUCTURE_KEYWORDS: [&str; 5] = ["first", "then", "finally", "step 1", "part 1"];

// Word-count gates for each level
const ARCHITECTED_MIN_WORDS: usize = 40;
const INTUITIVE_MIN_WORDS: usize = 15;
const UNSTRUCTURED_MIN_WORDS: usize = 8;
const CONTEXT_MIN_WORDS: usize = 20;
const CONTEXT_MIN_SENTENCES: usize = 3;
const TOPIC_MIN_WORDS: usize = 3;

// Compiled regex patterns (matched against lowercased input)
static AUDIENCE_PATTERN: OnceLock<Regex> = OnceLock::new();
static GOAL_PATTERN: OnceLock<Regex> = OnceLock::new();
static STRUCTURE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_audience_pattern() -> &'static Regex {
    AUDIENCE_PATTERN.get_or_init(|| Regex::new(r"(for|to|helping|teaching)\s+\w+").unwrap())
}

fn get_goal_pattern() -> &'static Regex {
    GOAL_PATTERN.get_or_init(|| Regex::new(r"(so that|in order to|because)").unwrap())
}

fn get_structure_pattern() -> &'static Regex {
    STRUCTURE_PATTERN.get_or_init(|| Regex::new(r"\b(intro|hook|body|conclusion)\b").unwrap())
}

/// Count whitespace-delimited words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences split on `.`, `!` and `?`, ignoring blank segments
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Extract the raw feature booleans for a submission
pub fn extract_signals(user_input: &str, known: &KnownInputs) -> InputSignals {
    let lower = user_input.to_lowercase();
    let word_count = count_words(user_input);
    let sentence_count = count_sentences(user_input);

    let has_topic = known.has_topic() || word_count >= TOPIC_MIN_WORDS;

    let has_audience = known.has_target_audience()
        || AUDIENCE_KEYWORDS.iter().any(|k| lower.contains(k))
        || get_audience_pattern().is_match(&lower);

    let has_goal = known.has_goal()
        || GOAL_KEYWORDS.iter().any(|k| lower.contains(k))
        || get_goal_pattern().is_match(&lower);

    let has_context = word_count > CONTEXT_MIN_WORDS || sentence_count >= CONTEXT_MIN_SENTENCES;

    let has_structure = STRUCTURE_KEYWORDS.iter().any(|k| lower.contains(k))
        || get_structure_pattern().is_match(&lower);

    let element_count = [has_topic, has_audience, has_goal, has_context, has_structure]
        .iter()
        .filter(|&&x| x)
        .count();

    InputSignals {
        has_topic,
        has_audience,
        has_goal,
        has_context,
        has_structure,
        word_count,
        sentence_count,
        element_count,
    }
}

/// Diagnose a discovery turn.
///
/// Rules are evaluated in priority order and the first match wins. Each
/// branch builds its own `DetectedDetails` literally: some flags are forced
/// regardless of what was detected, so the reported details are a curated
/// view for that level rather than a copy of the raw signals.
pub fn diagnose(user_input: &str, known: &KnownInputs) -> InputDiagnosis {
    let s = extract_signals(user_input, known);

    let diagnosis = if s.has_structure
        && s.has_context
        && s.has_topic
        && s.has_audience
        && s.word_count > ARCHITECTED_MIN_WORDS
    {
        build(
            EntropyLevel::Architected,
            DetectedDetails {
                topic: true,
                audience: true,
                goal: s.has_goal,
                context: true,
                structure: true,
            },
            "Input already has a clear structure, context and audience. Only a couple of refinements are needed.",
        )
    } else if s.has_context
        && s.has_topic
        && (s.has_audience || s.has_goal)
        && s.word_count > INTUITIVE_MIN_WORDS
    {
        build(
            EntropyLevel::Intuitive,
            DetectedDetails {
                topic: s.has_topic,
                audience: s.has_audience,
                goal: s.has_goal,
                context: s.has_context,
                structure: false,
            },
            "Input has good context and direction but no explicit structure. A few targeted questions will shape it.",
        )
    } else if s.word_count > UNSTRUCTURED_MIN_WORDS && s.has_topic && s.element_count >= 2 {
        build(
            EntropyLevel::Unstructured,
            DetectedDetails {
                topic: s.has_topic,
                audience: s.has_audience,
                goal: s.has_goal,
                context: false,
                structure: false,
            },
            "Input names a topic with some supporting detail, but the idea is still loose. Several questions will organize it.",
        )
    } else {
        build(
            EntropyLevel::Cold,
            DetectedDetails {
                topic: s.has_topic,
                ..Default::default()
            },
            "Input is brief or missing key details. A full round of discovery questions is needed.",
        )
    };

    log::debug!(
        "Diagnosed input as {} ({} words, {} elements)",
        diagnosis.level,
        s.word_count,
        s.element_count
    );

    diagnosis
}

fn build(level: EntropyLevel, has_details: DetectedDetails, reasoning: &str) -> InputDiagnosis {
    InputDiagnosis {
        level,
        has_details,
        recommended_questions: level.recommended_questions(),
        reasoning: reasoning.to_string(),
        confidence: level.confidence(),
    }
}
