//! Survey total to investor-profile band

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::BandThresholds;
use crate::error::HawkeyeError;
use crate::language::Language;

/// Investor-profile band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestorProfile {
    Defensive,
    Balanced,
    Aggressive,
}

impl InvestorProfile {
    pub const ALL: [InvestorProfile; 3] = [
        InvestorProfile::Defensive,
        InvestorProfile::Balanced,
        InvestorProfile::Aggressive,
    ];

    /// Stable identifier, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestorProfile::Defensive => "DEFENSIVE",
            InvestorProfile::Balanced => "BALANCED",
            InvestorProfile::Aggressive => "AGGRESSIVE",
        }
    }

    /// Localized profile name
    pub fn label(&self, language: &Language) -> &'static str {
        match self {
            InvestorProfile::Defensive => language.pick("Defensive", "Nhà đầu tư Bảo Toàn"),
            InvestorProfile::Balanced => language.pick("Balanced", "Nhà đầu tư Cân Bằng"),
            InvestorProfile::Aggressive => language.pick("Aggressive", "Nhà đầu tư Tăng Trưởng"),
        }
    }
}

impl fmt::Display for InvestorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestorProfile {
    type Err = HawkeyeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEFENSIVE" | "A" => Ok(InvestorProfile::Defensive),
            "BALANCED" | "B" => Ok(InvestorProfile::Balanced),
            "AGGRESSIVE" | "C" => Ok(InvestorProfile::Aggressive),
            other => Err(HawkeyeError::invalid(
                "profile",
                format!("unknown investor profile '{other}'"),
            )),
        }
    }
}

/// Band for a survey total using the default thresholds (21 / 31).
pub fn band_from_score(total: u32) -> InvestorProfile {
    band_with(total, &BandThresholds::default())
}

/// Band for a survey total using custom thresholds.
pub fn band_with(total: u32, thresholds: &BandThresholds) -> InvestorProfile {
    if total >= thresholds.aggressive_min {
        InvestorProfile::Aggressive
    } else if total >= thresholds.balanced_min {
        InvestorProfile::Balanced
    } else {
        InvestorProfile::Defensive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_from_score(0), InvestorProfile::Defensive);
        assert_eq!(band_from_score(10), InvestorProfile::Defensive);
        assert_eq!(band_from_score(20), InvestorProfile::Defensive);
        assert_eq!(band_from_score(21), InvestorProfile::Balanced);
        assert_eq!(band_from_score(30), InvestorProfile::Balanced);
        assert_eq!(band_from_score(31), InvestorProfile::Aggressive);
        assert_eq!(band_from_score(40), InvestorProfile::Aggressive);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = BandThresholds {
            balanced_min: 5,
            aggressive_min: 12,
        };
        assert_eq!(band_with(4, &t), InvestorProfile::Defensive);
        assert_eq!(band_with(5, &t), InvestorProfile::Balanced);
        assert_eq!(band_with(12, &t), InvestorProfile::Aggressive);
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!("balanced".parse::<InvestorProfile>().unwrap(), InvestorProfile::Balanced);
        assert_eq!(" AGGRESSIVE ".parse::<InvestorProfile>().unwrap(), InvestorProfile::Aggressive);
        assert_eq!("a".parse::<InvestorProfile>().unwrap(), InvestorProfile::Defensive);
        assert!("yolo".parse::<InvestorProfile>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(InvestorProfile::Balanced.label(&Language::Vietnamese), "Nhà đầu tư Cân Bằng");
        assert_eq!(InvestorProfile::Balanced.label(&Language::English), "Balanced");
        assert_eq!(
            serde_json::to_string(&InvestorProfile::Defensive).unwrap(),
            "\"DEFENSIVE\""
        );
    }
}
