//! Valuation Engine
//!
//! Fair value from industry-average P/E and P/B multiples, with the peer
//! sample filtered for plausibility and trimmed of outliers before averaging.

pub mod engine;
pub mod stats;
pub mod types;

pub use engine::{ValuationEngine, compute_valuation};
pub use types::{
    CompanyMetrics, PeerSample, SampleSummary, VERDICT_THRESHOLDS, ValuationInput,
    ValuationResult, Verdict,
};
