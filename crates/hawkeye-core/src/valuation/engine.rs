//! Peer-relative fair value calculation

use tracing::{debug, warn};

use super::stats::{plausible, trimmed_mean};
use super::types::{CompanyMetrics, PeerSample, SampleSummary, ValuationInput, ValuationResult, Verdict};
use crate::config::ValuationConfig;
use crate::error::{ensure_finite, ensure_positive, Result};
use crate::language::Language;
use crate::types::RiskLevel;

/// Values a company against the average P/E and P/B of its peers.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: ValuationConfig,
    language: Language,
}

impl ValuationEngine {
    /// Create an engine with the default domain constants and Vietnamese labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config, rejecting it if [`ValuationConfig::validate`] fails.
    pub fn with_config(config: ValuationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            language: Language::default(),
        })
    }

    /// Set the language used for the recommendation label.
    pub fn with_language(mut self, language: impl Into<Language>) -> Self {
        self.language = language.into();
        self
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Value a full input record.
    pub fn evaluate(&self, input: &ValuationInput) -> Result<ValuationResult> {
        debug!(ticker = %input.ticker, peers = input.peers.len(), "valuing");
        self.compute(input.current_price, &input.metrics, &input.peers)
    }

    /// Compute fair values, upside, verdict and risk band.
    ///
    /// `current_price` must be finite and positive; `eps` and `bvps` must be
    /// finite but may be negative. Inputs large enough to overflow a fair
    /// value or the upside are rejected as invalid. An empty or fully
    /// implausible peer set yields a zero average for that multiple and a
    /// warning on the result.
    pub fn compute(
        &self,
        current_price: f64,
        metrics: &CompanyMetrics,
        peers: &[PeerSample],
    ) -> Result<ValuationResult> {
        let current_price = ensure_positive("current_price", current_price)?;
        let eps = ensure_finite("eps", metrics.eps)?;
        let bvps = ensure_finite("bvps", metrics.bvps)?;

        let pe_sample = self.industry_average(peers.iter().map(|p| p.pe), self.config.pe_ceiling);
        let pb_sample = self.industry_average(peers.iter().map(|p| p.pb), self.config.pb_ceiling);

        let fair_value_pe = ensure_finite("fair_value_pe", eps * pe_sample.mean)?;
        let fair_value_pb = ensure_finite("fair_value_pb", bvps * pb_sample.mean)?;
        // No per-sector weighting of the two methods.
        let composite_fair_value =
            ensure_finite("composite_fair_value", (fair_value_pe + fair_value_pb) / 2.0)?;
        let upside_percentage = ensure_finite(
            "upside_percentage",
            (composite_fair_value - current_price) / current_price * 100.0,
        )?;

        let verdict = Verdict::from_upside(upside_percentage);
        let risk_level = self.risk_level(upside_percentage);

        let mut warnings = Vec::new();
        collect_warnings(&mut warnings, "P/E", &pe_sample);
        collect_warnings(&mut warnings, "P/B", &pb_sample);
        for warning in &warnings {
            warn!("{warning}");
        }

        debug!(
            industry_avg_pe = pe_sample.mean,
            industry_avg_pb = pb_sample.mean,
            composite_fair_value,
            upside_percentage,
            %verdict,
            "valuation computed"
        );

        Ok(ValuationResult {
            industry_avg_pe: pe_sample.mean,
            industry_avg_pb: pb_sample.mean,
            fair_value_pe,
            fair_value_pb,
            composite_fair_value,
            upside_percentage,
            verdict,
            recommendation: verdict.label(&self.language).to_string(),
            risk_level,
            pe_premium: premium(metrics.pe, pe_sample.mean),
            pb_premium: premium(metrics.pb, pb_sample.mean),
            pe_sample,
            pb_sample,
            warnings,
        })
    }

    fn industry_average(
        &self,
        values: impl Iterator<Item = Option<f64>>,
        ceiling: f64,
    ) -> SampleSummary {
        trimmed_mean(&plausible(values, ceiling), self.config.outlier_sigmas)
    }

    /// Medium inside the ±band, otherwise low for upside and high for downside.
    fn risk_level(&self, upside_percentage: f64) -> RiskLevel {
        if upside_percentage.abs() < self.config.medium_risk_band {
            RiskLevel::Medium
        } else if upside_percentage > 0.0 {
            RiskLevel::Low
        } else {
            RiskLevel::High
        }
    }
}

/// Value with the default engine: Vietnamese labels, standard ceilings.
pub fn compute_valuation(
    current_price: f64,
    metrics: &CompanyMetrics,
    peers: &[PeerSample],
) -> Result<ValuationResult> {
    ValuationEngine::new().compute(current_price, metrics, peers)
}

fn premium(own: Option<f64>, industry_avg: f64) -> Option<f64> {
    let own = own.filter(|v| v.is_finite())?;
    (industry_avg != 0.0).then(|| (own - industry_avg) / industry_avg * 100.0)
}

fn collect_warnings(warnings: &mut Vec<String>, multiple: &str, sample: &SampleSummary) {
    if sample.is_empty() {
        warnings.push(format!(
            "no usable {multiple} peers, industry average set to 0"
        ));
    } else if sample.fell_back {
        warnings.push(format!(
            "every {multiple} peer was trimmed as an outlier, using untrimmed mean"
        ));
    }
}
