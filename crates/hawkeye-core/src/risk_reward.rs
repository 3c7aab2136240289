//! Risk/Reward Calculator
//!
//! Undefined results (zero risk, a 100% loss, missing prices) come back as
//! `None` and must be rendered as "—", never compared or sorted as numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::language::Language;

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Reward per unit of risk. `None` when entry equals stop-loss or a price is
/// missing, non-finite or non-positive.
pub fn risk_reward(entry: f64, exit: f64, stop_loss: f64) -> Option<f64> {
    let (entry, exit, stop_loss) = (positive(entry)?, positive(exit)?, positive(stop_loss)?);
    let risk = (entry - stop_loss).abs();
    let reward = (exit - entry).abs();
    (risk > 0.0).then(|| reward / risk)
}

/// Shares to buy so that hitting the stop loses at most `max_loss_pct` of
/// `capital`. Rounds down.
pub fn position_size(capital: f64, max_loss_pct: f64, entry: f64, stop_loss: f64) -> Option<u64> {
    let capital = positive(capital)?;
    let max_loss_pct = positive(max_loss_pct)?;
    let risk_per_share = (positive(entry)? - positive(stop_loss)?).abs();
    if risk_per_share <= 0.0 {
        return None;
    }

    let max_loss_amount = capital * max_loss_pct / 100.0;
    Some((max_loss_amount / risk_per_share).floor() as u64)
}

/// Gain needed to get back to break-even after losing `max_loss_pct`.
/// `None` at or beyond a total loss, or for negative input.
pub fn required_gain_to_recover(max_loss_pct: f64) -> Option<f64> {
    if !max_loss_pct.is_finite() || !(0.0..100.0).contains(&max_loss_pct) {
        return None;
    }
    Some(max_loss_pct / (100.0 - max_loss_pct) * 100.0)
}

/// Qualitative rating of a risk/reward ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardQuality {
    /// 2:1 or better
    Good,
    /// Between 1:1 and 2:1
    Fair,
    /// Risking more than the expected reward
    Poor,
}

impl RewardQuality {
    /// Rate the ratio as displayed, i.e. rounded to two decimals.
    pub fn from_ratio(ratio: f64) -> Self {
        let ratio = (ratio * 100.0).round() / 100.0;
        if ratio >= 2.0 {
            RewardQuality::Good
        } else if ratio >= 1.0 {
            RewardQuality::Fair
        } else {
            RewardQuality::Poor
        }
    }

    pub fn label(&self, language: &Language) -> &'static str {
        match self {
            RewardQuality::Good => language.pick("Good", "Tốt"),
            RewardQuality::Fair => language.pick("Fair", "Trung bình"),
            RewardQuality::Poor => language.pick("High risk", "Rủi ro cao"),
        }
    }
}

/// Trade plan figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardInput {
    pub entry: f64,
    /// Exit or target price
    pub exit: f64,
    pub stop_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loss_pct: Option<f64>,
}

impl RiskRewardInput {
    pub fn new(entry: f64, exit: f64, stop_loss: f64) -> Self {
        Self {
            entry,
            exit,
            stop_loss,
            capital: None,
            max_loss_pct: None,
        }
    }

    /// Add capital and loss budget for position sizing.
    pub fn with_sizing(mut self, capital: f64, max_loss_pct: f64) -> Self {
        self.capital = Some(capital);
        self.max_loss_pct = Some(max_loss_pct);
        self
    }
}

/// Everything derivable from a [`RiskRewardInput`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardResult {
    pub risk: f64,
    pub reward: f64,
    pub ratio: Option<f64>,
    pub quality: Option<RewardQuality>,
    pub position_size: Option<u64>,
    pub required_gain_to_recover: Option<f64>,
}

/// Evaluate a trade plan.
pub fn evaluate(input: &RiskRewardInput) -> RiskRewardResult {
    let ratio = risk_reward(input.entry, input.exit, input.stop_loss);
    let position_size = match (input.capital, input.max_loss_pct) {
        (Some(capital), Some(pct)) => position_size(capital, pct, input.entry, input.stop_loss),
        _ => None,
    };
    let required_gain_to_recover = input.max_loss_pct.and_then(required_gain_to_recover);

    let result = RiskRewardResult {
        risk: (input.entry - input.stop_loss).abs(),
        reward: (input.exit - input.entry).abs(),
        ratio,
        quality: ratio.map(RewardQuality::from_ratio),
        position_size,
        required_gain_to_recover,
    };
    debug!(?result, "risk/reward evaluated");
    result
}
