// Discovery Models - Canonical type definitions for input diagnosis and follow-up questions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Entropy Levels
// ============================================================================

/// How much unprompted detail a free-text submission already carries.
///
/// Variants are ordered from least to most information. Classification does
/// not walk this order; each level is chosen by its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntropyLevel {
    Cold,
    Unstructured,
    Intuitive,
    Architected,
}

impl EntropyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntropyLevel::Cold => "COLD",
            EntropyLevel::Unstructured => "UNSTRUCTURED",
            EntropyLevel::Intuitive => "INTUITIVE",
            EntropyLevel::Architected => "ARCHITECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntropyLevel::Cold => "Cold Start",
            EntropyLevel::Unstructured => "Unstructured Idea",
            EntropyLevel::Intuitive => "Intuitive Creator",
            EntropyLevel::Architected => "Architected Plan",
        }
    }

    /// Follow-up question budget for this level
    pub fn recommended_questions(&self) -> usize {
        match self {
            EntropyLevel::Cold => 6,
            EntropyLevel::Unstructured => 5,
            EntropyLevel::Intuitive => 3,
            EntropyLevel::Architected => 2,
        }
    }

    /// Self-reported certainty, fixed per level
    pub fn confidence(&self) -> f32 {
        match self {
            EntropyLevel::Cold => 0.90,
            EntropyLevel::Unstructured => 0.70,
            EntropyLevel::Intuitive => 0.80,
            EntropyLevel::Architected => 0.95,
        }
    }
}

impl std::fmt::Display for EntropyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntropyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cold" => Ok(EntropyLevel::Cold),
            "unstructured" => Ok(EntropyLevel::Unstructured),
            "intuitive" => Ok(EntropyLevel::Intuitive),
            "architected" => Ok(EntropyLevel::Architected),
            _ => Err(format!(
                "Invalid entropy level: '{}'. Expected 'cold', 'unstructured', 'intuitive', or 'architected'",
                s
            )),
        }
    }
}

// ============================================================================
// Diagnosis Types
// ============================================================================

/// Which content elements the diagnosis reports as already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedDetails {
    pub topic: bool,
    pub audience: bool,
    pub goal: bool,
    pub context: bool,
    pub structure: bool,
}

/// Result of diagnosing one discovery turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDiagnosis {
    pub level: EntropyLevel,
    pub has_details: DetectedDetails,
    /// Always `level.recommended_questions()`
    pub recommended_questions: usize,
    /// Human-readable justification, not parsed downstream
    pub reasoning: String,
    /// Fixed per level, see `EntropyLevel::confidence`
    pub confidence: f32,
}

/// Raw feature booleans before any per-level narrowing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSignals {
    pub has_topic: bool,
    pub has_audience: bool,
    pub has_goal: bool,
    pub has_context: bool,
    pub has_structure: bool,
    pub word_count: usize,
    pub sentence_count: usize,
    pub element_count: usize,
}

// ============================================================================
// Known Inputs
// ============================================================================

/// Fields the user already confirmed earlier in the conversation.
///
/// A field counts as known when it is present and non-empty. Anything
/// without a dedicated field lands in `extra`, keyed in camelCase and with
/// whatever JSON value the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uav_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_points: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |v| !v.is_empty())
}

impl KnownInputs {
    pub fn has_topic(&self) -> bool {
        is_set(&self.topic)
    }

    pub fn has_target_audience(&self) -> bool {
        is_set(&self.target_audience)
    }

    pub fn has_goal(&self) -> bool {
        is_set(&self.goal)
    }

    pub fn has_uav_description(&self) -> bool {
        is_set(&self.uav_description)
    }

    /// Credentials or proof points, either one is enough
    pub fn has_credibility(&self) -> bool {
        is_set(&self.credentials) || is_set(&self.proof_points)
    }

    /// Record an answer into the field the question fills
    pub fn record(&mut self, question: QuestionId, answer: &str) {
        let value = Some(answer.to_string());
        match question {
            QuestionId::TargetAudience => self.target_audience = value,
            QuestionId::Goal => self.goal = value,
            QuestionId::UniqueAngle => self.uav_description = value,
            QuestionId::Credibility => self.credentials = value,
            other => {
                self.extra
                    .insert(other.field_key().to_string(), Value::from(answer));
            }
        }
    }
}

// ============================================================================
// Question Types
// ============================================================================

/// Stable identifier for every follow-up question the generator can ask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    TargetAudience,
    Goal,
    UniqueAngle,
    Credibility,
    PlatformDuration,
    SurprisingFact,
    CommonMistake,
    KeyInsight,
    Obstacle,
    FilmingConstraints,
    Tone,
    VisualStyle,
    Modifications,
    DurationPreference,
}

impl QuestionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::TargetAudience => "target_audience",
            QuestionId::Goal => "goal",
            QuestionId::UniqueAngle => "unique_angle",
            QuestionId::Credibility => "credibility",
            QuestionId::PlatformDuration => "platform_duration",
            QuestionId::SurprisingFact => "surprising_fact",
            QuestionId::CommonMistake => "common_mistake",
            QuestionId::KeyInsight => "key_insight",
            QuestionId::Obstacle => "obstacle",
            QuestionId::FilmingConstraints => "filming_constraints",
            QuestionId::Tone => "tone",
            QuestionId::VisualStyle => "visual_style",
            QuestionId::Modifications => "modifications",
            QuestionId::DurationPreference => "duration_preference",
        }
    }
}

impl QuestionId {
    /// camelCase key used when the answer is stored in `KnownInputs::extra`
    pub fn field_key(&self) -> &'static str {
        match self {
            QuestionId::TargetAudience => "targetAudience",
            QuestionId::Goal => "goal",
            QuestionId::UniqueAngle => "uniqueAngle",
            QuestionId::Credibility => "credibility",
            QuestionId::PlatformDuration => "platformDuration",
            QuestionId::SurprisingFact => "surprisingFact",
            QuestionId::CommonMistake => "commonMistake",
            QuestionId::KeyInsight => "keyInsight",
            QuestionId::Obstacle => "obstacle",
            QuestionId::FilmingConstraints => "filmingConstraints",
            QuestionId::Tone => "tone",
            QuestionId::VisualStyle => "visualStyle",
            QuestionId::Modifications => "modifications",
            QuestionId::DurationPreference => "durationPreference",
        }
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A follow-up question ready to be asked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryQuestion {
    pub id: QuestionId,
    /// The question text to display
    pub question: String,
    /// Hint or helper text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// A question the user already answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_level_ordering() {
        assert!(EntropyLevel::Cold < EntropyLevel::Unstructured);
        assert!(EntropyLevel::Unstructured < EntropyLevel::Intuitive);
        assert!(EntropyLevel::Intuitive < EntropyLevel::Architected);
    }

    #[test]
    fn test_entropy_level_serializes_screaming_case() {
        let json = serde_json::to_string(&EntropyLevel::Unstructured).unwrap();
        assert_eq!(json, "\"UNSTRUCTURED\"");

        let parsed: EntropyLevel = "architected".parse().unwrap();
        assert_eq!(parsed, EntropyLevel::Architected);
        assert!("lukewarm".parse::<EntropyLevel>().is_err());
    }

    #[test]
    fn test_known_inputs_presence_checks() {
        let mut inputs = KnownInputs {
            topic: Some(String::new()),
            proof_points: Some("10k subscribers".to_string()),
            ..Default::default()
        };

        assert!(!inputs.has_topic());
        assert!(inputs.has_credibility());

        inputs.record(QuestionId::TargetAudience, "indie hackers");
        inputs.record(QuestionId::Tone, "playful");
        assert!(inputs.has_target_audience());
        assert_eq!(inputs.extra.get("tone"), Some(&Value::from("playful")));
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let mut inputs = KnownInputs::default();
        inputs.record(QuestionId::PlatformDuration, "TikTok, 60 seconds");
        inputs.record(QuestionId::FilmingConstraints, "phone only");

        let json = serde_json::to_value(&inputs).unwrap();
        assert_eq!(json["platformDuration"], "TikTok, 60 seconds");
        assert_eq!(json["filmingConstraints"], "phone only");
        assert!(json.get("platform_duration").is_none());
    }

    #[test]
    fn test_known_inputs_deserializes_camel_case_and_extra() {
        let json = r#"{"topic":"sourdough","targetAudience":"home bakers","platform":"YouTube"}"#;
        let inputs: KnownInputs = serde_json::from_str(json).unwrap();

        assert!(inputs.has_topic());
        assert!(inputs.has_target_audience());
        assert!(!inputs.has_goal());
        assert_eq!(inputs.extra.get("platform"), Some(&Value::from("YouTube")));
    }

    #[test]
    fn test_known_inputs_accepts_non_string_extra() {
        let json = r#"{"topic":"sourdough","durationSeconds":60,"tags":["bread","baking"]}"#;
        let inputs: KnownInputs = serde_json::from_str(json).unwrap();

        assert!(inputs.has_topic());
        assert_eq!(inputs.extra.get("durationSeconds"), Some(&Value::from(60)));
        assert!(inputs.extra.get("tags").map_or(false, Value::is_array));
    }
}
