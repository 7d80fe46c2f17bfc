//! Static scoring configuration: maturity tiers, segment multipliers,
//! and per-tier recommendations.
//!
//! The built-in values live in [`ScoringTables::default`]. A deployment
//! may replace them through configuration, so tables are validated
//! before a [`Scorer`](crate::Scorer) accepts them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TablesError;

/// Number of recommendations attached to every tier.
pub const RECOMMENDATIONS_PER_TIER: usize = 3;

/// Security maturity tier, ordered from least to most mature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "1 - Inexistente")]
    Inexistente,
    #[serde(rename = "2 - Inicial")]
    Inicial,
    #[serde(rename = "3 - Parcial")]
    Parcial,
    #[serde(rename = "4 - Consistente")]
    Consistente,
    #[serde(rename = "5 - Otimizado")]
    Otimizado,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 5] = [
        Tier::Inexistente,
        Tier::Inicial,
        Tier::Parcial,
        Tier::Consistente,
        Tier::Otimizado,
    ];

    /// Map a percentual score to its tier.
    ///
    /// Intervals are half-open `[low, high)`; the last one is closed at 100.
    /// Values above 100 never come out of the scorer but still map to the top tier.
    #[must_use]
    pub fn for_percentual(percentual: u8) -> Self {
        match percentual {
            0..40 => Self::Inexistente,
            40..60 => Self::Inicial,
            60..75 => Self::Parcial,
            75..90 => Self::Consistente,
            _ => Self::Otimizado,
        }
    }

    /// Display label, e.g. `"3 - Parcial"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inexistente => "1 - Inexistente",
            Self::Inicial => "2 - Inicial",
            Self::Parcial => "3 - Parcial",
            Self::Consistente => "4 - Consistente",
            Self::Otimizado => "5 - Otimizado",
        }
    }

    /// Numeric level from 1 to 5.
    #[must_use]
    pub fn level(&self) -> u8 {
        match self {
            Self::Inexistente => 1,
            Self::Inicial => 2,
            Self::Parcial => 3,
            Self::Consistente => 4,
            Self::Otimizado => 5,
        }
    }

    /// Parse from a display label.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == s)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Segment keywords sharing one multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRule {
    /// Matched as case-insensitive substrings of the segment label
    pub keywords: Vec<String>,
    pub multiplier: f64,
}

impl MultiplierRule {
    pub fn new<I, S>(keywords: I, multiplier: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            multiplier,
        }
    }
}

/// Fixed recommendation lists, one per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub inexistente: Vec<String>,
    pub inicial: Vec<String>,
    pub parcial: Vec<String>,
    pub consistente: Vec<String>,
    pub otimizado: Vec<String>,
}

impl Recommendations {
    #[must_use]
    pub fn for_tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Inexistente => &self.inexistente,
            Tier::Inicial => &self.inicial,
            Tier::Parcial => &self.parcial,
            Tier::Consistente => &self.consistente,
            Tier::Otimizado => &self.otimizado,
        }
    }
}

impl Default for Recommendations {
    fn default() -> Self {
        fn list(items: [&str; RECOMMENDATIONS_PER_TIER]) -> Vec<String> {
            items.into_iter().map(String::from).collect()
        }

        Self {
            inexistente: list([
                "Implementar do zero todas as práticas de segurança.",
                "Desenvolver política formal de segurança.",
                "Sensibilizar liderança sobre riscos cibernéticos.",
            ]),
            inicial: list([
                "Formalizar os processos de segurança existentes.",
                "Treinar a equipe regularmente.",
                "Contratar apoio externo para estruturar segurança.",
            ]),
            parcial: list([
                "Padronizar e documentar processos.",
                "Realizar auditorias internas.",
                "Implementar ferramentas de monitoramento.",
            ]),
            consistente: list([
                "Buscar certificações como ISO 27001.",
                "Realizar testes de intrusão regulares.",
                "Automatizar processos críticos de segurança.",
            ]),
            otimizado: list([
                "Manter melhoria contínua com base em métricas.",
                "Realizar auditorias externas periódicas.",
                "Investir em inovação e segurança proativa.",
            ]),
        }
    }
}

fn default_multiplier() -> f64 {
    1.0
}

/// Multiplier rules and recommendations used by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTables {
    /// Applied when no rule matches
    #[serde(default = "default_multiplier")]
    pub default_multiplier: f64,

    /// Evaluated in order; the first rule with a matching keyword wins
    pub multiplier_rules: Vec<MultiplierRule>,

    pub recommendations: Recommendations,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            default_multiplier: default_multiplier(),
            multiplier_rules: vec![
                MultiplierRule::new(
                    [
                        "tecnologia da informação",
                        "information technology",
                        "serviços financeiros",
                        "financial services",
                    ],
                    1.2,
                ),
                MultiplierRule::new(["educação", "education", "saúde", "health"], 1.1),
            ],
            recommendations: Recommendations::default(),
        }
    }
}

impl ScoringTables {
    /// Check that every multiplier is usable and every tier carries
    /// exactly [`RECOMMENDATIONS_PER_TIER`] recommendations.
    pub fn validate(&self) -> Result<(), TablesError> {
        check_multiplier(self.default_multiplier)?;

        for (index, rule) in self.multiplier_rules.iter().enumerate() {
            check_multiplier(rule.multiplier)?;
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(TablesError::EmptyKeyword { rule: index });
            }
        }

        for tier in Tier::ALL {
            let count = self.recommendations.for_tier(tier).len();
            if count != RECOMMENDATIONS_PER_TIER {
                return Err(TablesError::RecommendationCount { tier, count });
            }
        }

        Ok(())
    }
}

fn check_multiplier(value: f64) -> Result<(), TablesError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TablesError::InvalidMultiplier(value))
    }
}
