// Adaptive follow-up question generator

use crate::models::{DiscoveryQuestion, EntropyLevel, InputDiagnosis, KnownInputs, QuestionId};

// ============================================================================
// Question Catalog
// ============================================================================

/// Text and hint for a question id
pub fn question_for(id: QuestionId) -> DiscoveryQuestion {
    let (question, hint) = match id {
        QuestionId::TargetAudience => (
            "Who exactly is this video for? Describe the specific person you want watching.",
            Some("e.g., first-time founders, nursing students, weekend woodworkers"),
        ),
        QuestionId::Goal => (
            "What should viewers think, feel, or do after watching?",
            Some("One concrete outcome works better than several vague ones"),
        ),
        QuestionId::UniqueAngle => (
            "What makes your perspective on this topic different from everyone else covering it?",
            Some("Your unique angle: a method, an experience, or a contrarian take"),
        ),
        QuestionId::Credibility => (
            "Why should viewers trust you on this? Share any results, credentials, or proof points.",
            Some("Status, power, credibility, likeness: numbers, titles, stories"),
        ),
        QuestionId::PlatformDuration => (
            "Which platform is this for, and roughly how long should the video be?",
            Some("e.g., YouTube 8-10 minutes, TikTok under 60 seconds"),
        ),
        QuestionId::SurprisingFact => (
            "What's one surprising fact or counterintuitive idea about this topic?",
            None,
        ),
        QuestionId::CommonMistake => (
            "What's the most common mistake people make with this topic?",
            None,
        ),
        QuestionId::KeyInsight => (
            "If viewers remember only one thing from this video, what should it be?",
            None,
        ),
        QuestionId::Obstacle => (
            "What's the biggest obstacle your audience faces with this?",
            None,
        ),
        QuestionId::FilmingConstraints => (
            "Do you have any filming constraints, such as location, equipment, or on-camera vs. voiceover?",
            None,
        ),
        QuestionId::Tone => (
            "What tone do you want: educational, entertaining, inspirational, or something else?",
            None,
        ),
        QuestionId::VisualStyle => (
            "Do you have a visual style in mind, such as talking head, b-roll heavy, or screen recording?",
            None,
        ),
        QuestionId::Modifications => (
            "Your outline is already solid. Is there anything you'd like to modify or emphasize?",
            None,
        ),
        QuestionId::DurationPreference => ("What's your preferred video duration?", None),
    };

    DiscoveryQuestion {
        id,
        question: question.to_string(),
        hint: hint.map(|h| h.to_string()),
    }
}

/// Level-specific depth questions, in asking order
fn level_fillers(level: EntropyLevel) -> &'static [QuestionId] {
    match level {
        EntropyLevel::Cold => &[
            QuestionId::PlatformDuration,
            QuestionId::SurprisingFact,
            QuestionId::CommonMistake,
        ],
        EntropyLevel::Unstructured => &[
            QuestionId::KeyInsight,
            QuestionId::Obstacle,
            QuestionId::FilmingConstraints,
        ],
        EntropyLevel::Intuitive => &[QuestionId::Tone, QuestionId::VisualStyle],
        EntropyLevel::Architected => &[QuestionId::Modifications, QuestionId::DurationPreference],
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Select and order the next batch of follow-up questions.
///
/// Universal gap-fillers come first, each skipped when already answered.
/// Level fillers are only added while under budget, and the result is
/// truncated (never padded) to `diagnosis.recommended_questions`.
pub fn generate_question_plan(
    diagnosis: &InputDiagnosis,
    known: &KnownInputs,
) -> Vec<DiscoveryQuestion> {
    let count = diagnosis.recommended_questions;
    let mut ids = Vec::with_capacity(count + 4);

    if !diagnosis.has_details.audience && !known.has_target_audience() {
        ids.push(QuestionId::TargetAudience);
    }

    if !diagnosis.has_details.goal && !known.has_goal() {
        ids.push(QuestionId::Goal);
    }

    if !known.has_uav_description() {
        ids.push(QuestionId::UniqueAngle);
    }

    if !known.has_credibility() {
        ids.push(QuestionId::Credibility);
    }

    for &filler in level_fillers(diagnosis.level) {
        if ids.len() < count {
            ids.push(filler);
        }
    }

    ids.truncate(count);
    ids.into_iter().map(question_for).collect()
}

/// Question texts for the next batch, see `generate_question_plan`
pub fn generate_questions(diagnosis: &InputDiagnosis, known: &KnownInputs) -> Vec<String> {
    generate_question_plan(diagnosis, known)
        .into_iter()
        .map(|q| q.question)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::diagnose;
    use crate::models::DetectedDetails;

    fn diagnosis_for(level: EntropyLevel, has_details: DetectedDetails) -> InputDiagnosis {
        InputDiagnosis {
            level,
            has_details,
            recommended_questions: level.recommended_questions(),
            reasoning: String::new(),
            confidence: level.confidence(),
        }
    }

    fn ids(questions: &[DiscoveryQuestion]) -> Vec<QuestionId> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_empty_input_asks_full_cold_round() {
        let known = KnownInputs::default();
        let plan = generate_question_plan(&diagnose("", &known), &known);

        assert_eq!(
            ids(&plan),
            vec![
                QuestionId::TargetAudience,
                QuestionId::Goal,
                QuestionId::UniqueAngle,
                QuestionId::Credibility,
                QuestionId::PlatformDuration,
                QuestionId::SurprisingFact,
            ]
        );
    }

    #[test]
    fn test_cold_fillers_fill_remaining_budget() {
        let known = KnownInputs {
            target_audience: Some("nurses".to_string()),
            goal: Some("pass the boards".to_string()),
            uav_description: Some("I failed twice first".to_string()),
            credentials: Some("RN for 10 years".to_string()),
            ..Default::default()
        };
        let plan = generate_question_plan(&diagnose("AI", &known), &known);

        assert_eq!(
            ids(&plan),
            vec![
                QuestionId::PlatformDuration,
                QuestionId::SurprisingFact,
                QuestionId::CommonMistake,
            ]
        );
    }

    #[test]
    fn test_architected_budget_cuts_off_fillers() {
        let diagnosis = diagnosis_for(
            EntropyLevel::Architected,
            DetectedDetails {
                topic: true,
                audience: true,
                goal: true,
                context: true,
                structure: true,
            },
        );
        let plan = generate_question_plan(&diagnosis, &KnownInputs::default());

        assert_eq!(
            ids(&plan),
            vec![QuestionId::UniqueAngle, QuestionId::Credibility]
        );
    }

    #[test]
    fn test_architected_with_known_angle_and_proof() {
        let diagnosis = diagnosis_for(
            EntropyLevel::Architected,
            DetectedDetails {
                topic: true,
                audience: true,
                goal: false,
                context: true,
                structure: true,
            },
        );
        let known = KnownInputs {
            uav_description: Some("built it in public".to_string()),
            proof_points: Some("$40k MRR".to_string()),
            ..Default::default()
        };
        let plan = generate_question_plan(&diagnosis, &known);

        assert_eq!(ids(&plan), vec![QuestionId::Goal, QuestionId::Modifications]);
    }

    #[test]
    fn test_intuitive_truncates_universal_questions() {
        let diagnosis = diagnosis_for(EntropyLevel::Intuitive, DetectedDetails::default());
        let plan = generate_question_plan(&diagnosis, &KnownInputs::default());

        assert_eq!(plan.len(), 3);
        assert_eq!(
            ids(&plan),
            vec![
                QuestionId::TargetAudience,
                QuestionId::Goal,
                QuestionId::UniqueAngle,
            ]
        );
    }

    #[test]
    fn test_unstructured_fillers_in_order() {
        let diagnosis = diagnosis_for(
            EntropyLevel::Unstructured,
            DetectedDetails {
                topic: true,
                audience: true,
                goal: true,
                ..Default::default()
            },
        );
        let known = KnownInputs {
            credentials: Some("teacher".to_string()),
            ..Default::default()
        };
        let plan = generate_question_plan(&diagnosis, &known);

        assert_eq!(
            ids(&plan),
            vec![
                QuestionId::UniqueAngle,
                QuestionId::KeyInsight,
                QuestionId::Obstacle,
                QuestionId::FilmingConstraints,
            ]
        );
    }

    #[test]
    fn test_never_exceeds_budget_for_any_level() {
        let levels = [
            EntropyLevel::Cold,
            EntropyLevel::Unstructured,
            EntropyLevel::Intuitive,
            EntropyLevel::Architected,
        ];
        for level in levels {
            let diagnosis = diagnosis_for(level, DetectedDetails::default());
            let questions = generate_questions(&diagnosis, &KnownInputs::default());
            assert!(questions.len() <= level.recommended_questions());
            assert!(questions.iter().all(|q| !q.is_empty()));
        }
    }
}
