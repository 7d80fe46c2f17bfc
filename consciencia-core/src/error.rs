//! Error types for consciencia-core

use std::path::PathBuf;

use thiserror::Error;

use crate::tables::Tier;

/// Top-level error type for consciencia-core
#[derive(Error, Debug)]
pub enum ConscienciaError {
    #[error("Questionnaire error: {0}")]
    Questionnaire(#[from] QuestionnaireError),

    #[error("Scoring tables error: {0}")]
    Tables(#[from] TablesError),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Report store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for consciencia-core operations.
pub type Result<T> = std::result::Result<T, ConscienciaError>;

/// Contract violations detected while scoring a questionnaire run.
///
/// All variants mean the caller handed the scorer inputs it cannot score
/// (e.g. a stale question set). None is retriable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Answer count {answers} does not match question count {questions}")]
    LengthMismatch { answers: usize, questions: usize },

    #[error("Question set has zero total weight; score is undefined")]
    DegenerateQuestionSet,

    #[error("Question set total weight overflows; score is undefined")]
    WeightOverflow,
}

/// Errors loading or validating questionnaire definitions
#[derive(Error, Debug)]
pub enum QuestionnaireError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Question {text:?} has invalid weight {weight}")]
    InvalidWeight { text: String, weight: f64 },

    #[error("Segment list is empty")]
    NoSegments,
}

/// Errors validating scoring tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TablesError {
    #[error("Multiplier must be a finite positive number, got {0}")]
    InvalidMultiplier(f64),

    #[error("Multiplier rule {rule} has an empty keyword")]
    EmptyKeyword { rule: usize },

    #[error("Tier {tier} needs exactly 3 recommendations, got {count}")]
    RecommendationCount { tier: Tier, count: usize },
}

/// Errors persisting or reading assessment reports
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid report at {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
