//! Survey scoring
//!
//! Unanswered questions and answers that match no option contribute zero.
//! Partial answer sets are normal while the survey is being filled in; only
//! [`assess_survey`] insists on a complete set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::band::{InvestorProfile, band_with};
use super::bank::QuestionBank;
use crate::config::BandThresholds;
use crate::error::{HawkeyeError, Result};

/// Question id to chosen option value
pub type SurveyAnswerSet = BTreeMap<String, String>;

/// Sum the scores of the selected options.
pub fn score_survey(answers: &SurveyAnswerSet, bank: &QuestionBank) -> u32 {
    bank.questions()
        .iter()
        .filter_map(|question| {
            let value = answers.get(&question.id)?;
            question.option(value).map(|opt| opt.score)
        })
        .sum()
}

/// How far a respondent has got through a bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyProgress {
    pub answered: usize,
    pub total: usize,
    /// Ids of questions without a valid answer, in bank order
    pub missing: Vec<String>,
}

impl SurveyProgress {
    /// An answer only counts when it names one of the question's options.
    pub fn of(answers: &SurveyAnswerSet, bank: &QuestionBank) -> Self {
        let missing: Vec<String> = bank
            .questions()
            .iter()
            .filter(|q| {
                answers
                    .get(&q.id)
                    .and_then(|value| q.option(value))
                    .is_none()
            })
            .map(|q| q.id.clone())
            .collect();

        Self {
            answered: bank.len() - missing.len(),
            total: bank.len(),
            missing,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Completion as a percentage; an empty bank counts as complete.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.answered as f64 / self.total as f64 * 100.0
    }
}

/// Score and band of a submitted survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAssessment {
    pub score: u32,
    pub profile: InvestorProfile,
}

/// Score a completed survey and place it in a band.
pub fn assess_survey(answers: &SurveyAnswerSet, bank: &QuestionBank) -> Result<SurveyAssessment> {
    assess_survey_with(answers, bank, &BandThresholds::default())
}

/// [`assess_survey`] with custom band thresholds.
pub fn assess_survey_with(
    answers: &SurveyAnswerSet,
    bank: &QuestionBank,
    thresholds: &BandThresholds,
) -> Result<SurveyAssessment> {
    let progress = SurveyProgress::of(answers, bank);
    if !progress.is_complete() {
        return Err(HawkeyeError::IncompleteSurvey {
            missing: progress.missing,
        });
    }

    let score = score_survey(answers, bank);
    let profile = band_with(score, thresholds);
    debug!(score, %profile, "survey assessed");

    Ok(SurveyAssessment { score, profile })
}
