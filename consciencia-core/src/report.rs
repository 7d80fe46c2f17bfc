//! The immutable result of one scored questionnaire run.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::tables::Tier;

/// Outcome of a completed assessment.
///
/// Serializes with the field names of the persisted report record
/// (`score_percentual`, `nível`, `segmento`, ...). Fields are private so a
/// report cannot be altered after the scorer builds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    #[serde(rename = "score_percentual")]
    percentual_score: u8,

    #[serde(rename = "nível")]
    tier: Tier,

    /// Segment exactly as the respondent chose it
    #[serde(rename = "segmento")]
    segment: String,

    #[serde(rename = "multiplicador")]
    multiplier: f64,

    #[serde(rename = "data", with = "local_timestamp")]
    generated_at: DateTime<Local>,

    #[serde(rename = "recomendações")]
    recommendations: Vec<String>,
}

impl AssessmentReport {
    pub(crate) fn new(
        percentual_score: u8,
        tier: Tier,
        segment: String,
        multiplier: f64,
        generated_at: DateTime<Local>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            percentual_score,
            tier,
            segment,
            multiplier,
            generated_at,
            recommendations,
        }
    }

    /// Score normalized to 0..=100.
    pub fn percentual_score(&self) -> u8 {
        self.percentual_score
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// `DateTime<Local>` as `"%Y-%m-%d %H:%M:%S"` wall-clock time.
pub(crate) mod local_timestamp {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Local>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&s, FORMAT).map_err(D::Error::custom)?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| D::Error::custom(format!("nonexistent local time: {s}")))
    }
}
