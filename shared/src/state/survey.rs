//! Waitlist survey state machine.
//!
//! `Collecting` accepts selections until [`SurveyForm::submit`] moves the form to
//! `Submitted`, which is terminal. Answers are never validated: an empty
//! submission is accepted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::waitlist::{Question, QuestionKind, OTHER_OPTION, WAITLIST_QUESTIONS};
use crate::error::{Result, SurveyError};

pub const CONFIRMATION_MESSAGE: &str = "Thank you for your interest! We will keep you updated.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    /// Insertion order
    Multi(Vec<String>),
}

/// Accumulated answers, serialized as one flat object keyed by question and other-field keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyAnswers {
    #[serde(flatten)]
    selections: BTreeMap<String, Answer>,
    #[serde(flatten)]
    other_text: BTreeMap<String, String>,
}

impl SurveyAnswers {
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.selections.get(key) {
            Some(Answer::Single(value)) => Some(value),
            _ => None,
        }
    }

    pub fn multi(&self, key: &str) -> &[String] {
        match self.selections.get(key) {
            Some(Answer::Multi(values)) => values,
            _ => &[],
        }
    }

    /// Free text stored under a question's other-field key.
    pub fn other_text(&self, other_key: &str) -> Option<&str> {
        self.other_text.get(other_key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.other_text.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyPhase {
    Collecting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyForm {
    questions: &'static [Question],
    answers: SurveyAnswers,
    phase: SurveyPhase,
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::waitlist()
    }
}

impl SurveyForm {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            answers: SurveyAnswers::default(),
            phase: SurveyPhase::Collecting,
        }
    }

    /// The CineX waitlist questionnaire.
    pub fn waitlist() -> Self {
        Self::new(WAITLIST_QUESTIONS)
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn answers(&self) -> &SurveyAnswers {
        &self.answers
    }

    pub fn phase(&self) -> SurveyPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SurveyPhase::Submitted
    }

    /// Shown in place of the form once submitted.
    pub fn confirmation_message(&self) -> Option<&'static str> {
        self.is_submitted().then_some(CONFIRMATION_MESSAGE)
    }

    /// Record a single-select answer, replacing any previous value.
    pub fn select(&mut self, key: &str, option: &str) -> Result<()> {
        let question = self.question_for_edit(key, option)?;
        if question.kind != QuestionKind::SingleSelect {
            return Err(SurveyError::NotSingleSelect(key.to_string()).into());
        }

        self.answers
            .selections
            .insert(key.to_string(), Answer::Single(option.to_string()));
        Ok(())
    }

    /// Add or remove a multi-select option. Returns whether it is now checked.
    pub fn toggle(&mut self, key: &str, option: &str) -> Result<bool> {
        let question = self.question_for_edit(key, option)?;
        if question.kind != QuestionKind::MultiSelect {
            return Err(SurveyError::NotMultiSelect(key.to_string()).into());
        }

        let entry = self
            .answers
            .selections
            .entry(key.to_string())
            .or_insert_with(|| Answer::Multi(Vec::new()));

        let Answer::Multi(values) = entry else {
            return Err(SurveyError::NotMultiSelect(key.to_string()).into());
        };

        match values.iter().position(|v| v == option) {
            Some(index) => {
                values.remove(index);
                Ok(false)
            }
            None => {
                values.push(option.to_string());
                Ok(true)
            }
        }
    }

    /// Store the free text of a question's "Other" field.
    ///
    /// The text is kept even while another option is selected, but only
    /// [`SurveyForm::resolved_answer`] with "Other" selected reports it.
    pub fn set_other_text(&mut self, key: &str, text: &str) -> Result<()> {
        self.ensure_collecting()?;
        let question = self.question(key)?;
        let other_key = question
            .other_key
            .ok_or_else(|| SurveyError::NoOtherField(key.to_string()))?;

        self.answers
            .other_text
            .insert(other_key.to_string(), text.to_string());
        Ok(())
    }

    /// Free text stored for question `key`, kept while the field is hidden.
    pub fn other_text_for(&self, key: &str) -> &str {
        self.question(key)
            .ok()
            .and_then(|q| q.other_key)
            .and_then(|other_key| self.answers.other_text(other_key))
            .unwrap_or_default()
    }

    pub fn is_selected(&self, key: &str, option: &str) -> bool {
        match self.answers.selections.get(key) {
            Some(Answer::Single(value)) => value == option,
            Some(Answer::Multi(values)) => values.iter().any(|v| v == option),
            None => false,
        }
    }

    /// Whether the "Other" text input is rendered for this question.
    pub fn other_field_visible(&self, key: &str) -> bool {
        self.questions
            .iter()
            .any(|q| q.key == key && q.other_key.is_some())
            && self.answers.single(key) == Some(OTHER_OPTION)
    }

    /// Single-select answer with the "Other" free text substituted when present.
    pub fn resolved_answer(&self, key: &str) -> Option<String> {
        let selected = self.answers.single(key)?;
        if self.other_field_visible(key) {
            let other_key = self.question(key).ok()?.other_key?;
            if let Some(text) = self.answers.other_text(other_key) {
                if !text.trim().is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        Some(selected.to_string())
    }

    /// Finish the survey. Answers are only logged; nothing is transmitted.
    pub fn submit(&mut self) -> Result<&SurveyAnswers> {
        self.ensure_collecting()?;
        self.phase = SurveyPhase::Submitted;

        log::info!("Waitlist form data: {}", self.answers.to_json());
        Ok(&self.answers)
    }

    fn question(&self, key: &str) -> Result<&'static Question> {
        self.questions
            .iter()
            .find(|q| q.key == key)
            .ok_or_else(|| SurveyError::UnknownQuestion(key.to_string()).into())
    }

    fn question_for_edit(&self, key: &str, option: &str) -> Result<&'static Question> {
        self.ensure_collecting()?;
        let question = self.question(key)?;
        if !question.has_option(option) {
            return Err(SurveyError::UnknownOption {
                key: key.to_string(),
                option: option.to_string(),
            }
            .into());
        }
        Ok(question)
    }

    fn ensure_collecting(&self) -> Result<()> {
        if self.is_submitted() {
            return Err(SurveyError::AlreadySubmitted.into());
        }
        Ok(())
    }
}
