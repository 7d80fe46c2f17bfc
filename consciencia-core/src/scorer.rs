//! Assessment scoring: weighted raw score, segment multiplier,
//! normalized percentual, and tier lookup.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::{ScoringError, TablesError};
use crate::questionnaire::Question;
use crate::report::AssessmentReport;
use crate::tables::{ScoringTables, Tier};

/// Sum the weight of every question answered `true`.
///
/// Answers pair with questions by position; the two slices must have the
/// same length.
pub fn compute_raw_score(answers: &[bool], questions: &[Question]) -> Result<f64, ScoringError> {
    if answers.len() != questions.len() {
        return Err(ScoringError::LengthMismatch {
            answers: answers.len(),
            questions: questions.len(),
        });
    }

    Ok(answers
        .iter()
        .zip(questions)
        .filter(|(answer, _)| **answer)
        .map(|(_, question)| question.weight())
        .sum())
}

/// Multiplier rule with keywords lowercased once up front.
#[derive(Debug, Clone)]
struct KeywordRule {
    keywords: Vec<String>,
    multiplier: f64,
}

/// Turns answer sets into [`AssessmentReport`]s.
///
/// Immutable after construction; a single scorer can be shared across
/// threads and used for any number of runs.
#[derive(Debug, Clone)]
pub struct Scorer {
    tables: ScoringTables,
    rules: Vec<KeywordRule>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_tables(ScoringTables::default())
    }
}

impl Scorer {
    /// Create a scorer from validated tables.
    pub fn new(tables: ScoringTables) -> Result<Self, TablesError> {
        tables.validate()?;
        Ok(Self::from_tables(tables))
    }

    fn from_tables(tables: ScoringTables) -> Self {
        let rules = tables
            .multiplier_rules
            .iter()
            .map(|rule| KeywordRule {
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                multiplier: rule.multiplier,
            })
            .collect();
        Self { tables, rules }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Multiplier for a free-text segment label.
    ///
    /// Case-insensitive substring match against each rule's keywords, in
    /// rule order. Unmatched labels get the default multiplier.
    pub fn resolve_multiplier(&self, segment: &str) -> f64 {
        let segment = segment.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| segment.contains(k.as_str())))
            .map_or(self.tables.default_multiplier, |rule| rule.multiplier)
    }

    /// Score a completed questionnaire, stamped with the current local time.
    pub fn generate_report(
        &self,
        answers: &[bool],
        questions: &[Question],
        segment: &str,
    ) -> Result<AssessmentReport, ScoringError> {
        self.generate_report_at(answers, questions, segment, Local::now())
    }

    /// Score a completed questionnaire with an explicit timestamp.
    pub fn generate_report_at(
        &self,
        answers: &[bool],
        questions: &[Question],
        segment: &str,
        generated_at: DateTime<Local>,
    ) -> Result<AssessmentReport, ScoringError> {
        let raw = compute_raw_score(answers, questions)?;
        let multiplier = self.resolve_multiplier(segment);
        let scored = raw * multiplier;

        let max_possible = questions.iter().map(Question::weight).sum::<f64>() * multiplier;
        if max_possible == 0.0 {
            return Err(ScoringError::DegenerateQuestionSet);
        }
        // Finite weights can still sum past f64::MAX. Since the raw score
        // never exceeds the total, a finite total keeps `scored` finite too.
        if !max_possible.is_finite() {
            return Err(ScoringError::WeightOverflow);
        }

        let percentual = to_percentual(scored, max_possible);
        let tier = Tier::for_percentual(percentual);
        debug!(raw, multiplier, percentual, %tier, segment, "Scored assessment");

        Ok(AssessmentReport::new(
            percentual,
            tier,
            segment.to_string(),
            multiplier,
            generated_at,
            self.tables.recommendations.for_tier(tier).to_vec(),
        ))
    }
}

/// `scored / max_possible` as a whole percentage, ties rounded half to even.
fn to_percentual(scored: f64, max_possible: f64) -> u8 {
    let percent = (scored / max_possible * 100.0).round_ties_even();
    // Weights are non-negative, so this only trims float noise.
    percent.clamp(0.0, 100.0) as u8
}
