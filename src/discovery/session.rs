// Discovery session: sequences diagnosis and questions across conversation turns

use super::{calculate_progress, diagnose, generate_question_plan, should_show_gate};
use crate::error::{Error, Result};
use crate::models::{
    AnsweredQuestion, DiscoveryQuestion, InputDiagnosis, KnownInputs, QuestionId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's discovery conversation.
///
/// Free-text messages accumulate in `transcript` and are re-diagnosed on
/// every new message. Questions are asked one at a time from `pending`;
/// answers are written into `inputs` so later turns see them as known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub transcript: Vec<String>,
    #[serde(default)]
    pub inputs: KnownInputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<InputDiagnosis>,
    #[serde(default)]
    pub pending: Vec<DiscoveryQuestion>,
    #[serde(default)]
    pub answers: Vec<AnsweredQuestion>,
    #[serde(default)]
    pub skipped: Vec<QuestionId>,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::with_inputs(KnownInputs::default())
    }

    /// Start a session with fields confirmed elsewhere (e.g., a previous wizard step)
    pub fn with_inputs(inputs: KnownInputs) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            transcript: Vec::new(),
            inputs,
            diagnosis: None,
            pending: Vec::new(),
            answers: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Full free text submitted so far
    pub fn combined_text(&self) -> String {
        self.transcript.join("\n")
    }

    /// Add a free-text message, re-diagnose, and refresh the pending questions
    pub fn submit_message(&mut self, text: &str) -> &InputDiagnosis {
        if !text.trim().is_empty() {
            self.transcript.push(text.trim().to_string());
        }

        let diagnosis = diagnose(&self.combined_text(), &self.inputs);
        let plan = generate_question_plan(&diagnosis, &self.inputs);

        self.pending = plan
            .into_iter()
            .filter(|q| !self.is_settled(q.id))
            .collect();

        log::debug!(
            "Session {}: {} with {} pending questions",
            self.id,
            diagnosis.level,
            self.pending.len()
        );

        self.updated_at = Utc::now();
        self.diagnosis.insert(diagnosis)
    }

    /// The question to ask next, if any
    pub fn next_question(&self) -> Option<&DiscoveryQuestion> {
        self.pending.first()
    }

    /// Answer the next pending question
    pub fn answer(&mut self, text: &str) -> Result<QuestionId> {
        let answer = text.trim();
        if answer.is_empty() {
            return Err(Error::EmptyAnswer);
        }
        if self.pending.is_empty() {
            return Err(Error::NoPendingQuestion);
        }

        let question = self.pending.remove(0);
        self.inputs.record(question.id, answer);
        self.answers.push(AnsweredQuestion {
            id: question.id,
            question: question.question,
            answer: answer.to_string(),
        });
        self.updated_at = Utc::now();

        Ok(question.id)
    }

    /// Drop the next pending question without answering it
    pub fn skip(&mut self) -> Result<QuestionId> {
        if self.pending.is_empty() {
            return Err(Error::NoPendingQuestion);
        }

        let question = self.pending.remove(0);
        self.skipped.push(question.id);
        self.updated_at = Utc::now();

        Ok(question.id)
    }

    pub fn answered_count(&self) -> u32 {
        self.answers.len() as u32
    }

    /// Answered plus still-pending questions
    pub fn total_questions(&self) -> u32 {
        (self.answers.len() + self.pending.len()) as u32
    }

    pub fn progress(&self) -> u8 {
        calculate_progress(self.answered_count(), self.total_questions())
    }

    pub fn should_show_gate(&self) -> bool {
        should_show_gate(self.answered_count(), self.total_questions())
    }

    /// Diagnosed at least once and nothing left to ask
    pub fn is_complete(&self) -> bool {
        self.diagnosis.is_some() && self.pending.is_empty()
    }

    fn is_settled(&self, id: QuestionId) -> bool {
        self.answers.iter().any(|a| a.id == id) || self.skipped.contains(&id)
    }
}

impl Default for DiscoverySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntropyLevel;

    #[test]
    fn test_new_session_is_empty() {
        let session = DiscoverySession::new();

        assert!(session.diagnosis.is_none());
        assert!(session.next_question().is_none());
        assert!(!session.is_complete());
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn test_submit_message_diagnoses_and_plans() {
        let mut session = DiscoverySession::new();
        let level = session.submit_message("AI").level;

        assert_eq!(level, EntropyLevel::Cold);
        assert_eq!(session.pending.len(), 6);
        assert_eq!(
            session.next_question().map(|q| q.id),
            Some(QuestionId::TargetAudience)
        );
    }

    #[test]
    fn test_answer_records_into_inputs() {
        let mut session = DiscoverySession::new();
        session.submit_message("AI");

        let id = session.answer("  solo founders  ").unwrap();
        assert_eq!(id, QuestionId::TargetAudience);
        assert_eq!(
            session.inputs.target_audience.as_deref(),
            Some("solo founders")
        );
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.total_questions(), 6);
        assert_eq!(session.progress(), 17);
    }

    #[test]
    fn test_answer_errors() {
        let mut session = DiscoverySession::new();
        assert!(matches!(
            session.answer("anything"),
            Err(Error::NoPendingQuestion)
        ));

        session.submit_message("AI");
        assert!(matches!(session.answer("   "), Err(Error::EmptyAnswer)));
        assert!(matches!(session.skip(), Ok(QuestionId::TargetAudience)));
    }

    #[test]
    fn test_gate_after_three_answers() {
        let mut session = DiscoverySession::new();
        session.submit_message("AI");

        session.answer("designers").unwrap();
        session.answer("ship faster").unwrap();
        assert!(!session.should_show_gate());

        session.answer("I used to work at a studio").unwrap();
        assert!(session.should_show_gate());
        assert_eq!(session.progress(), 50);
    }

    #[test]
    fn test_resubmit_does_not_repeat_settled_questions() {
        let mut session = DiscoverySession::new();
        session.submit_message("AI");
        session.answer("designers").unwrap();
        session.skip().unwrap();

        session.submit_message("Tools");
        let pending: Vec<QuestionId> = session.pending.iter().map(|q| q.id).collect();

        assert!(!pending.contains(&QuestionId::TargetAudience));
        assert!(!pending.contains(&QuestionId::Goal));
        assert_eq!(pending.first(), Some(&QuestionId::UniqueAngle));
    }

    #[test]
    fn test_complete_when_all_answered() {
        let mut session = DiscoverySession::new();
        session.submit_message("AI");
        while session.next_question().is_some() {
            session.answer("an answer").unwrap();
        }

        assert!(session.is_complete());
        assert!(!session.should_show_gate());
        assert_eq!(session.progress(), 100);
    }
}
