//! Configuration for the valuation and survey engines

use crate::error::{HawkeyeError, Result};
use crate::language::Language;
use crate::survey::QuestionBank;
use serde::{Deserialize, Serialize};

/// Domain constants for peer-relative valuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Peer P/E values at or above this are treated as data-quality outliers
    pub pe_ceiling: f64,
    /// Peer P/B values at or above this are treated as data-quality outliers
    pub pb_ceiling: f64,
    /// Trimming width, in population standard deviations
    pub outlier_sigmas: f64,
    /// `|upside|` below this is rated medium risk
    pub medium_risk_band: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            pe_ceiling: 100.0,
            pb_ceiling: 10.0,
            outlier_sigmas: 2.0,
            medium_risk_band: 10.0,
        }
    }
}

impl ValuationConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("pe_ceiling", self.pe_ceiling),
            ("pb_ceiling", self.pb_ceiling),
            ("medium_risk_band", self.medium_risk_band),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(HawkeyeError::ConfigError(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if !(self.outlier_sigmas.is_finite() && self.outlier_sigmas >= 0.0) {
            return Err(HawkeyeError::ConfigError(format!(
                "outlier_sigmas must be non-negative, got {}",
                self.outlier_sigmas
            )));
        }

        Ok(())
    }
}

/// Minimum survey totals for the balanced and aggressive bands
///
/// Derived for the standard ten-question bank (range 10..=40). A bank with a
/// different size needs new thresholds; see [`BandThresholds::validate_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub balanced_min: u32,
    pub aggressive_min: u32,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            balanced_min: 21,
            aggressive_min: 31,
        }
    }
}

impl BandThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.balanced_min >= self.aggressive_min {
            return Err(HawkeyeError::ConfigError(format!(
                "balanced_min ({}) must be below aggressive_min ({})",
                self.balanced_min, self.aggressive_min
            )));
        }
        Ok(())
    }

    /// Check that every band is reachable with a complete answer set for `bank`.
    pub fn validate_for(&self, bank: &QuestionBank) -> Result<()> {
        self.validate()?;

        let (min, max) = bank.score_range();
        if self.balanced_min <= min || self.aggressive_min > max {
            return Err(HawkeyeError::ConfigError(format!(
                "band thresholds {}/{} do not fit the question bank score range {min}..={max}",
                self.balanced_min, self.aggressive_min
            )));
        }
        Ok(())
    }
}

/// Engine-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub valuation: ValuationConfig,
    pub bands: BandThresholds,
    /// Language for recommendation and profile labels
    pub language: Language,
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.valuation.validate()?;
        self.bands.validate()
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    valuation: Option<ValuationConfig>,
    pe_ceiling: Option<f64>,
    pb_ceiling: Option<f64>,
    outlier_sigmas: Option<f64>,
    bands: Option<BandThresholds>,
    language: Option<Language>,
}

impl EngineConfigBuilder {
    /// Replace the whole valuation section
    pub fn valuation(mut self, valuation: ValuationConfig) -> Self {
        self.valuation = Some(valuation);
        self
    }

    /// Set the peer P/E plausibility ceiling
    pub fn pe_ceiling(mut self, ceiling: f64) -> Self {
        self.pe_ceiling = Some(ceiling);
        self
    }

    /// Set the peer P/B plausibility ceiling
    pub fn pb_ceiling(mut self, ceiling: f64) -> Self {
        self.pb_ceiling = Some(ceiling);
        self
    }

    /// Set the outlier trimming width
    pub fn outlier_sigmas(mut self, sigmas: f64) -> Self {
        self.outlier_sigmas = Some(sigmas);
        self
    }

    /// Set survey band thresholds
    pub fn bands(mut self, bands: BandThresholds) -> Self {
        self.bands = Some(bands);
        self
    }

    /// Set label language
    pub fn language(mut self, language: impl Into<Language>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let mut valuation = self.valuation.unwrap_or_default();
        if let Some(ceiling) = self.pe_ceiling {
            valuation.pe_ceiling = ceiling;
        }
        if let Some(ceiling) = self.pb_ceiling {
            valuation.pb_ceiling = ceiling;
        }
        if let Some(sigmas) = self.outlier_sigmas {
            valuation.outlier_sigmas = sigmas;
        }

        let config = EngineConfig {
            valuation,
            bands: self.bands.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.valuation.pe_ceiling, 100.0);
        assert_eq!(config.valuation.pb_ceiling, 10.0);
        assert_eq!(config.valuation.outlier_sigmas, 2.0);
        assert_eq!(config.bands.balanced_min, 21);
        assert_eq!(config.bands.aggressive_min, 31);
        assert_eq!(config.language, Language::Vietnamese);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::builder()
            .pe_ceiling(60.0)
            .outlier_sigmas(1.5)
            .language("en")
            .build()
            .unwrap();

        assert_eq!(config.valuation.pe_ceiling, 60.0);
        assert_eq!(config.valuation.pb_ceiling, 10.0);
        assert_eq!(config.valuation.outlier_sigmas, 1.5);
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        assert!(EngineConfig::builder().pb_ceiling(0.0).build().is_err());
        assert!(EngineConfig::builder().outlier_sigmas(-1.0).build().is_err());
        assert!(
            EngineConfig::builder()
                .bands(BandThresholds {
                    balanced_min: 31,
                    aggressive_min: 21,
                })
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_default_bands_fit_standard_bank() {
        let bank = QuestionBank::standard();
        assert!(BandThresholds::default().validate_for(&bank).is_ok());

        let too_high = BandThresholds {
            balanced_min: 21,
            aggressive_min: 41,
        };
        assert!(too_high.validate_for(&bank).is_err());

        let too_low = BandThresholds {
            balanced_min: 10,
            aggressive_min: 31,
        };
        assert!(too_low.validate_for(&bank).is_err());
    }
}
