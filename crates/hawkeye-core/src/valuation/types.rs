//! Valuation input and result types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language::Language;
use crate::types::RiskLevel;

/// Per-share snapshot of the company being valued
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanyMetrics {
    /// Earnings per share
    pub eps: f64,
    /// Current P/E ratio, if quoted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe: Option<f64>,
    /// Current P/B ratio, if quoted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pb: Option<f64>,
    /// Book value per share
    pub bvps: f64,
}

/// One comparable company in the peer universe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerSample {
    pub ticker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pb: Option<f64>,
}

impl PeerSample {
    pub fn new(ticker: impl Into<String>, pe: Option<f64>, pb: Option<f64>) -> Self {
        Self {
            ticker: ticker.into(),
            pe,
            pb,
        }
    }
}

/// Everything needed to value one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInput {
    pub ticker: String,
    pub current_price: f64,
    pub metrics: CompanyMetrics,
    #[serde(default)]
    pub peers: Vec<PeerSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl ValuationInput {
    /// Parse an input record from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Five-level recommendation derived from upside %
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

/// Lower bounds (inclusive) on upside %, checked top-down. Anything below the
/// last row is `StrongSell`.
pub const VERDICT_THRESHOLDS: [(f64, Verdict); 4] = [
    (30.0, Verdict::StrongBuy),
    (15.0, Verdict::Buy),
    (-5.0, Verdict::Hold),
    (-15.0, Verdict::Sell),
];

impl Verdict {
    /// Map an upside percentage to its verdict band.
    pub fn from_upside(upside_percentage: f64) -> Self {
        VERDICT_THRESHOLDS
            .iter()
            .find(|(floor, _)| upside_percentage >= *floor)
            .map_or(Verdict::StrongSell, |(_, verdict)| *verdict)
    }

    /// Stable identifier, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::StrongBuy => "STRONG_BUY",
            Verdict::Buy => "BUY",
            Verdict::Hold => "HOLD",
            Verdict::Sell => "SELL",
            Verdict::StrongSell => "STRONG_SELL",
        }
    }

    /// Localized recommendation label
    pub fn label(&self, language: &Language) -> &'static str {
        match self {
            Verdict::StrongBuy => language.pick("STRONG BUY", "MUA MẠNH"),
            Verdict::Buy => language.pick("BUY", "MUA"),
            Verdict::Hold => language.pick("HOLD", "NẮM GIỮ"),
            Verdict::Sell => language.pick("SELL", "BÁN"),
            Verdict::StrongSell => language.pick("STRONG SELL", "BÁN MẠNH"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a peer multiple sample was reduced to an industry average
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSummary {
    /// Peer values that passed the plausibility filter
    pub valid: usize,
    /// Values kept after outlier trimming
    pub retained: usize,
    /// Set when trimming removed everything and the untrimmed mean was used
    pub fell_back: bool,
    /// Resulting average (0 for an empty sample)
    pub mean: f64,
}

impl SampleSummary {
    pub fn is_empty(&self) -> bool {
        self.valid == 0
    }

    /// Values dropped by trimming
    pub fn trimmed(&self) -> usize {
        self.valid - self.retained
    }
}

/// Outcome of one valuation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    #[serde(rename = "industryAvgPE")]
    pub industry_avg_pe: f64,
    #[serde(rename = "industryAvgPB")]
    pub industry_avg_pb: f64,
    #[serde(rename = "fairValuePE")]
    pub fair_value_pe: f64,
    #[serde(rename = "fairValuePB")]
    pub fair_value_pb: f64,
    pub composite_fair_value: f64,
    pub upside_percentage: f64,
    pub verdict: Verdict,
    pub recommendation: String,
    pub risk_level: RiskLevel,
    /// Company P/E relative to the industry average, in %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_premium: Option<f64>,
    /// Company P/B relative to the industry average, in %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pb_premium: Option<f64>,
    pub pe_sample: SampleSummary,
    pub pb_sample: SampleSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValuationResult {
    /// True when at least one multiple had no usable peer data.
    pub fn is_underspecified(&self) -> bool {
        self.pe_sample.is_empty() || self.pb_sample.is_empty()
    }
}
