//! Types shared between the valuation and strategy modules

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language::Language;

/// Qualitative risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Stable identifier, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Localized label
    pub fn label(&self, language: &Language) -> &'static str {
        match self {
            RiskLevel::Low => language.pick("Low", "Thấp"),
            RiskLevel::Medium => language.pick("Medium", "Trung bình"),
            RiskLevel::High => language.pick("High", "Cao"),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
