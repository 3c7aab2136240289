//! Valuation and strategy-scoring engine
//!
//! This crate holds the computational core of the Hawkeye investor platform:
//!
//! - Peer-relative valuation: industry-average P/E and P/B (plausibility
//!   filtered, outlier trimmed), fair value, upside and a five-level verdict
//! - Risk-appetite survey scoring and investor-profile banding
//! - Fixed allocation and trading-rule profiles per band
//! - Risk/reward ratio, position sizing and recovery maths
//!
//! Every operation is a pure, synchronous function. Persistence, transport
//! and rendering belong to the caller.
//!
//! # Example
//!
//! ```
//! use hawkeye_core::{CompanyMetrics, PeerSample, Verdict, compute_valuation};
//!
//! let metrics = CompanyMetrics { eps: 1800.0, pe: None, pb: None, bvps: 17800.0 };
//! let peers = vec![
//!     PeerSample::new("HSG", Some(14.2), Some(1.4)),
//!     PeerSample::new("NKG", Some(16.5), Some(1.5)),
//! ];
//!
//! let result = compute_valuation(28_500.0, &metrics, &peers)?;
//! assert_eq!(
//!     result.composite_fair_value,
//!     (result.fair_value_pe + result.fair_value_pb) / 2.0
//! );
//! assert_eq!(result.verdict, Verdict::from_upside(result.upside_percentage));
//! # Ok::<(), hawkeye_core::HawkeyeError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod language;
pub mod risk_reward;
pub mod strategy;
pub mod survey;
pub mod types;
pub mod valuation;

pub use config::{BandThresholds, EngineConfig, ValuationConfig};
pub use error::{HawkeyeError, Result};
pub use language::Language;
pub use risk_reward::{
    RewardQuality, RiskRewardInput, RiskRewardResult, position_size, required_gain_to_recover,
    risk_reward,
};
pub use strategy::{StrategyProfile, profile_for, strategy_for_score};
pub use survey::{
    InvestorProfile, QuestionBank, SurveyAnswerSet, SurveyAssessment, assess_survey,
    band_from_score, score_survey,
};
pub use types::RiskLevel;
pub use valuation::{
    CompanyMetrics, PeerSample, ValuationEngine, ValuationInput, ValuationResult, Verdict,
    compute_valuation,
};
