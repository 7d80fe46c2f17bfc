//! Core library for consciencia.
//!
//! Scores a security-maturity questionnaire: weighted yes/no questions
//! plus a business segment become an [`AssessmentReport`] with a
//! percentual score, a maturity [`Tier`], and recommendations.
//!
//! # Architecture
//!
//! - **Questionnaire** ([`Questionnaire`], [`Question`]) is loaded once and
//!   never mutated during a run
//! - **Scorer** ([`Scorer`]) is pure apart from reading the clock, and is
//!   configured with immutable [`ScoringTables`]
//! - **Storage** ([`ReportStore`]) persists finished reports; the scorer
//!   never touches it

pub mod error;
mod questionnaire;
mod report;
mod scorer;
mod store;
mod tables;

// Error types
pub use error::{
    ConscienciaError, QuestionnaireError, Result, ScoringError, StoreError, TablesError,
};

// Questionnaire types
pub use questionnaire::{Question, Questionnaire, load_questions, load_segments};

// Report
pub use report::AssessmentReport;

// Scoring
pub use scorer::{Scorer, compute_raw_score};

// Storage
pub use store::{JsonFileReportStore, ReportStore, StoredReport};

// Tables
pub use tables::{MultiplierRule, RECOMMENDATIONS_PER_TIER, Recommendations, ScoringTables, Tier};
