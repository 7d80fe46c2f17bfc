//! Questionnaire definitions: weighted yes/no questions and the list of
//! business segments a respondent picks from.
//!
//! Both are read from JSON files at startup and never change during an
//! assessment run. Answers are matched to questions by position, so the
//! order of the question file is significant.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::QuestionnaireError;

/// A weighted yes/no question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    #[serde(rename = "pergunta")]
    text: String,
    #[serde(rename = "peso")]
    weight: f64,
}

/// Question as stored on disk, before weight validation.
#[derive(Deserialize)]
struct RawQuestion {
    #[serde(rename = "pergunta", alias = "text")]
    text: String,
    #[serde(rename = "peso", alias = "weight")]
    weight: f64,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionnaireError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Self::new(raw.text, raw.weight)
    }
}

impl Question {
    /// Create a question. The weight must be finite and not negative.
    pub fn new(text: impl Into<String>, weight: f64) -> Result<Self, QuestionnaireError> {
        let text = text.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(QuestionnaireError::InvalidWeight { text, weight });
        }
        Ok(Self { text, weight })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Questions plus the segment labels offered to the respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct Questionnaire {
    questions: Vec<Question>,
    segments: Vec<String>,
}

impl Questionnaire {
    /// Build a questionnaire. At least one segment is required because the
    /// first one is the pre-selected default.
    pub fn new(
        questions: Vec<Question>,
        segments: Vec<String>,
    ) -> Result<Self, QuestionnaireError> {
        if segments.is_empty() {
            return Err(QuestionnaireError::NoSegments);
        }
        Ok(Self {
            questions,
            segments,
        })
    }

    /// Load questions and segments from their JSON files.
    pub fn load(questions_path: &Path, segments_path: &Path) -> Result<Self, QuestionnaireError> {
        let questions = load_questions(questions_path)?;
        let segments = load_segments(segments_path)?;
        info!(
            questions = questions.len(),
            segments = segments.len(),
            "Loaded questionnaire"
        );
        Self::new(questions, segments)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The segment selected before the respondent changes anything.
    pub fn default_segment(&self) -> &str {
        // Non-empty by construction
        &self.segments[0]
    }
}

/// Read a JSON array of `{"pergunta": ..., "peso": ...}` objects.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuestionnaireError> {
    read_json(path)
}

/// Read a JSON array of segment labels.
pub fn load_segments(path: &Path) -> Result<Vec<String>, QuestionnaireError> {
    let segments: Vec<String> = read_json(path)?;
    if segments.is_empty() {
        return Err(QuestionnaireError::NoSegments);
    }
    Ok(segments)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, QuestionnaireError> {
    let contents = fs::read_to_string(path).map_err(|source| QuestionnaireError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| QuestionnaireError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
