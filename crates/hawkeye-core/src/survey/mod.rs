//! Risk-Survey Scorer

pub mod band;
pub mod bank;
pub mod scorer;

pub use band::{InvestorProfile, band_from_score, band_with};
pub use bank::{QuestionBank, QuestionId, SurveyOption, SurveyQuestion};
pub use scorer::{
    SurveyAnswerSet, SurveyAssessment, SurveyProgress, assess_survey, assess_survey_with,
    score_survey,
};
