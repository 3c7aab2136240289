//! Strategy Allocator
//!
//! Fixed allocation and trading-rule profiles keyed by investor band.

use serde::Serialize;

use crate::language::Language;
use crate::survey::{InvestorProfile, band_from_score};
use crate::types::RiskLevel;

/// Portfolio split in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub stocks: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etfs: Option<u8>,
    pub bonds: u8,
    pub cash: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<u8>,
}

impl AssetAllocation {
    /// Sum of every defined bucket.
    pub fn total(&self) -> u32 {
        [
            Some(self.stocks),
            self.etfs,
            Some(self.bonds),
            Some(self.cash),
            self.alternatives,
        ]
        .into_iter()
        .flatten()
        .map(u32::from)
        .sum()
    }

    /// Named buckets in display order, skipping undefined ones.
    pub fn buckets(&self) -> Vec<(&'static str, u8)> {
        let mut out = vec![("stocks", self.stocks)];
        if let Some(etfs) = self.etfs {
            out.push(("etfs", etfs));
        }
        out.push(("bonds", self.bonds));
        out.push(("cash", self.cash));
        if let Some(alternatives) = self.alternatives {
            out.push(("alternatives", alternatives));
        }
        out
    }
}

/// Stop-loss band, as negative percentages from entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopLossRule {
    pub min: i8,
    pub max: i8,
    pub description: &'static str,
}

/// One take-profit step: at `target` % gain, exit `sell_percent` of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitTier {
    pub target: u8,
    pub sell_percent: u8,
}

/// Up to two take-profit tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitPlan {
    pub first: TakeProfitTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<TakeProfitTier>,
}

impl TakeProfitPlan {
    pub fn tiers(&self) -> impl Iterator<Item = &TakeProfitTier> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    /// Share of the position sold once every tier has fired.
    pub fn total_exit_percent(&self) -> u32 {
        self.tiers().map(|t| u32::from(t.sell_percent)).sum()
    }
}

/// Allocation mix and trading rules for one investor band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyProfile {
    pub id: InvestorProfile,
    pub name: &'static str,
    pub name_vietnamese: &'static str,
    pub description: &'static str,
    pub allocation: AssetAllocation,
    pub stop_loss: StopLossRule,
    pub take_profit: TakeProfitPlan,
    pub focus_stocks: &'static [&'static str],
    /// Max % of NAV in a single position
    pub max_position_size: u8,
    pub risk_level: RiskLevel,
}

impl StrategyProfile {
    pub fn display_name(&self, language: &Language) -> &'static str {
        language.pick(self.name, self.name_vietnamese)
    }
}

static DEFENSIVE: StrategyProfile = StrategyProfile {
    id: InvestorProfile::Defensive,
    name: "Defensive",
    name_vietnamese: "Nhà đầu tư Bảo Toàn",
    description: "Chiến lược tập trung vào bảo toàn vốn với rủi ro thấp. Phù hợp cho nhà đầu tư ưu tiên an toàn và thu nhập ổn định.",
    allocation: AssetAllocation {
        stocks: 15,
        etfs: Some(15),
        bonds: 50,
        cash: 20,
        alternatives: None,
    },
    stop_loss: StopLossRule {
        min: -5,
        max: -5,
        description: "Cắt lỗ nghiêm ngặt ở -5%",
    },
    take_profit: TakeProfitPlan {
        first: TakeProfitTier {
            target: 10,
            sell_percent: 50,
        },
        second: Some(TakeProfitTier {
            target: 20,
            sell_percent: 30,
        }),
    },
    focus_stocks: &["VNM", "FPT", "VCB", "TCB", "VRE"],
    max_position_size: 15,
    risk_level: RiskLevel::Low,
};

static BALANCED: StrategyProfile = StrategyProfile {
    id: InvestorProfile::Balanced,
    name: "Balanced",
    name_vietnamese: "Nhà đầu tư Cân Bằng",
    description: "Chiến lược cân bằng giữa tăng trưởng và bảo toàn vốn. Phù hợp cho nhà đầu tư muốn tăng trưởng ổn định với rủi ro kiểm soát.",
    allocation: AssetAllocation {
        stocks: 40,
        etfs: Some(10),
        bonds: 30,
        cash: 20,
        alternatives: None,
    },
    stop_loss: StopLossRule {
        min: -7,
        max: -10,
        description: "Cắt lỗ ở -7% đến -10% tùy tình huống",
    },
    take_profit: TakeProfitPlan {
        first: TakeProfitTier {
            target: 15,
            sell_percent: 50,
        },
        second: Some(TakeProfitTier {
            target: 30,
            sell_percent: 30,
        }),
    },
    focus_stocks: &["HPG", "MBB", "MWG", "MSN", "VIC", "FPT", "VCB"],
    max_position_size: 20,
    risk_level: RiskLevel::Medium,
};

static AGGRESSIVE: StrategyProfile = StrategyProfile {
    id: InvestorProfile::Aggressive,
    name: "Aggressive",
    name_vietnamese: "Nhà đầu tư Tăng Trưởng",
    description: "Chiến lược tập trung vào tăng trưởng mạnh với rủi ro cao. Phù hợp cho nhà đầu tư trẻ, có thời gian dài và chấp nhận biến động.",
    allocation: AssetAllocation {
        stocks: 70,
        etfs: None,
        bonds: 0,
        cash: 20,
        alternatives: Some(10),
    },
    stop_loss: StopLossRule {
        min: -10,
        max: -15,
        description: "Cắt lỗ linh hoạt ở -10% đến -15%",
    },
    take_profit: TakeProfitPlan {
        first: TakeProfitTier {
            target: 25,
            sell_percent: 40,
        },
        second: Some(TakeProfitTier {
            target: 50,
            sell_percent: 30,
        }),
    },
    focus_stocks: &["SSI", "VCI", "VIC", "VHM", "FPT", "MWG", "HPG"],
    max_position_size: 25,
    risk_level: RiskLevel::High,
};

/// Profile record for a band.
pub fn profile_for(band: InvestorProfile) -> &'static StrategyProfile {
    match band {
        InvestorProfile::Defensive => &DEFENSIVE,
        InvestorProfile::Balanced => &BALANCED,
        InvestorProfile::Aggressive => &AGGRESSIVE,
    }
}

/// Profile record for a survey total, using the default band thresholds.
pub fn strategy_for_score(score: u32) -> &'static StrategyProfile {
    profile_for(band_from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocations_sum_to_100() {
        for band in InvestorProfile::ALL {
            assert_eq!(profile_for(band).allocation.total(), 100, "{band}");
        }
    }

    #[test]
    fn test_profile_ids_match_band() {
        for band in InvestorProfile::ALL {
            assert_eq!(profile_for(band).id, band);
        }
    }

    #[test]
    fn test_balanced_profile_for_score_25() {
        let profile = strategy_for_score(25);
        assert_eq!(profile.id, InvestorProfile::Balanced);
        assert_eq!(
            profile.allocation,
            AssetAllocation {
                stocks: 40,
                etfs: Some(10),
                bonds: 30,
                cash: 20,
                alternatives: None,
            }
        );
        assert_eq!(profile.max_position_size, 20);
        assert_eq!(profile.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_risk_rises_with_band() {
        assert_eq!(strategy_for_score(20).risk_level, RiskLevel::Low);
        assert_eq!(strategy_for_score(31).risk_level, RiskLevel::High);
        let sizes: Vec<u8> = InvestorProfile::ALL
            .iter()
            .map(|b| profile_for(*b).max_position_size)
            .collect();
        assert_eq!(sizes, [15, 20, 25]);
    }

    #[test]
    fn test_take_profit_schedule() {
        let aggressive = profile_for(InvestorProfile::Aggressive);
        let targets: Vec<u8> = aggressive.take_profit.tiers().map(|t| t.target).collect();
        assert_eq!(targets, [25, 50]);
        assert_eq!(aggressive.take_profit.total_exit_percent(), 70);
        assert_eq!(profile_for(InvestorProfile::Defensive).take_profit.total_exit_percent(), 80);
    }

    #[test]
    fn test_buckets_skip_undefined() {
        let names: Vec<&str> = profile_for(InvestorProfile::Aggressive)
            .allocation
            .buckets()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["stocks", "bonds", "cash", "alternatives"]);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(profile_for(InvestorProfile::Defensive)).unwrap();
        assert_eq!(json["id"], "DEFENSIVE");
        assert_eq!(json["riskLevel"], "LOW");
        assert_eq!(json["allocation"]["etfs"], 15);
        assert!(json["allocation"].get("alternatives").is_none());
        assert_eq!(json["focusStocks"][0], "VNM");
    }
}
