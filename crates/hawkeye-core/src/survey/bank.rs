//! Risk-appetite question bank
//!
//! The option sets are configuration: a bank can be loaded from JSON, and the
//! scorer never assumes a fixed per-option score range. The standard bank is
//! built from [`QuestionId`] through an exhaustive match, so adding an id
//! without its question does not compile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HawkeyeError, Result};

/// Identifiers of the ten questions in the standard bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Age,
    InvestmentGoal,
    MarketCrash,
    Experience,
    CapitalSource,
    TimeHorizon,
    LossTolerance,
    PortfolioSize,
    MarketVolatility,
    InvestmentKnowledge,
}

impl QuestionId {
    /// Presentation order of the standard bank
    pub const ALL: [QuestionId; 10] = [
        QuestionId::Age,
        QuestionId::InvestmentGoal,
        QuestionId::MarketCrash,
        QuestionId::Experience,
        QuestionId::CapitalSource,
        QuestionId::TimeHorizon,
        QuestionId::LossTolerance,
        QuestionId::PortfolioSize,
        QuestionId::MarketVolatility,
        QuestionId::InvestmentKnowledge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::InvestmentGoal => "investment_goal",
            QuestionId::MarketCrash => "market_crash",
            QuestionId::Experience => "experience",
            QuestionId::CapitalSource => "capital_source",
            QuestionId::TimeHorizon => "time_horizon",
            QuestionId::LossTolerance => "loss_tolerance",
            QuestionId::PortfolioSize => "portfolio_size",
            QuestionId::MarketVolatility => "market_volatility",
            QuestionId::InvestmentKnowledge => "investment_knowledge",
        }
    }

    fn build(self) -> SurveyQuestion {
        let (question, description, options) = match self {
            QuestionId::Age => (
                "Bạn ở độ tuổi nào?",
                "Tuổi tác ảnh hưởng đến khả năng chấp nhận rủi ro",
                [
                    ("under_30", "Dưới 30 tuổi", 4, "Thời gian dài để phục hồi từ rủi ro"),
                    ("30_45", "30 - 45 tuổi", 3, "Thời gian trung bình, cân bằng rủi ro"),
                    ("45_60", "45 - 60 tuổi", 2, "Cần bảo toàn vốn nhiều hơn"),
                    ("over_60", "Trên 60 tuổi", 1, "Ưu tiên bảo toàn vốn"),
                ],
            ),
            QuestionId::InvestmentGoal => (
                "Mục tiêu đầu tư chính của bạn là gì?",
                "Mục tiêu quyết định chiến lược phù hợp",
                [
                    ("quick_profit", "Lợi nhuận nhanh", 4, "Tìm kiếm cơ hội ngắn hạn"),
                    ("growth", "Tăng trưởng dài hạn", 3, "Xây dựng tài sản theo thời gian"),
                    ("income", "Thu nhập/Cổ tức", 2, "Tạo dòng tiền đều đặn"),
                    ("preservation", "Bảo toàn vốn", 1, "Giữ vốn an toàn là ưu tiên"),
                ],
            ),
            QuestionId::MarketCrash => (
                "Nếu danh mục của bạn giảm 20% trong 1 tuần, bạn sẽ làm gì?",
                "Phản ứng với biến động thị trường",
                [
                    ("buy_more", "Mua thêm (Cơ hội tích lũy)", 4, "Chấp nhận rủi ro cao"),
                    ("hold", "Giữ nguyên (Chờ phục hồi)", 3, "Kiên nhẫn, chấp nhận rủi ro trung bình"),
                    ("sell_half", "Bán một nửa (Cắt lỗ một phần)", 2, "Thận trọng, giảm rủi ro"),
                    ("sell_all", "Bán hết (Thoát khỏi thị trường)", 1, "Không chấp nhận rủi ro"),
                ],
            ),
            QuestionId::Experience => (
                "Kinh nghiệm đầu tư của bạn?",
                "Kinh nghiệm ảnh hưởng đến khả năng quản lý rủi ro",
                [
                    ("expert", "Trên 3 năm", 4, "Hiểu rõ thị trường và rủi ro"),
                    ("intermediate", "1 - 3 năm", 3, "Có kinh nghiệm cơ bản"),
                    ("beginner", "Dưới 1 năm", 2, "Đang học hỏi"),
                    ("newbie", "Mới bắt đầu", 1, "Cần hướng dẫn chi tiết"),
                ],
            ),
            QuestionId::CapitalSource => (
                "Nguồn vốn đầu tư của bạn?",
                "Nguồn vốn quyết định mức độ áp lực",
                [
                    ("idle_money", "Tiền nhàn rỗi / Không áp lực", 4, "Có thể chấp nhận rủi ro cao"),
                    ("salary", "Tiết kiệm từ lương", 3, "Áp lực trung bình"),
                    ("short_term", "Tiết kiệm ngắn hạn", 2, "Cần thận trọng hơn"),
                    ("loan", "Vay mượn / Margin", 1, "Rủi ro rất cao, không khuyến nghị"),
                ],
            ),
            QuestionId::TimeHorizon => (
                "Thời gian đầu tư dự kiến?",
                "Thời gian càng dài, khả năng chấp nhận rủi ro càng cao",
                [
                    ("long_term", "Trên 5 năm", 4, "Có thể đầu tư tăng trưởng mạnh"),
                    ("medium_term", "3 - 5 năm", 3, "Cân bằng tăng trưởng và ổn định"),
                    ("short_term", "1 - 3 năm", 2, "Cần thận trọng hơn"),
                    ("very_short", "Dưới 1 năm", 1, "Ưu tiên bảo toàn vốn"),
                ],
            ),
            QuestionId::LossTolerance => (
                "Bạn có thể chấp nhận mất bao nhiêu % vốn trong 1 năm?",
                "Khả năng chịu đựng thua lỗ",
                [
                    ("high_tolerance", "Trên 20%", 4, "Chấp nhận rủi ro cao"),
                    ("medium_high", "10 - 20%", 3, "Chấp nhận rủi ro trung bình-cao"),
                    ("medium", "5 - 10%", 2, "Chấp nhận rủi ro trung bình"),
                    ("low_tolerance", "Dưới 5%", 1, "Rủi ro thấp, bảo toàn vốn"),
                ],
            ),
            QuestionId::PortfolioSize => (
                "Quy mô danh mục đầu tư dự kiến?",
                "Quy mô ảnh hưởng đến chiến lược phân bổ",
                [
                    ("large", "Trên 5 tỷ VND", 4, "Có thể đa dạng hóa mạnh"),
                    ("medium_large", "1 - 5 tỷ VND", 3, "Đa dạng hóa tốt"),
                    ("medium", "100 triệu - 1 tỷ VND", 2, "Tập trung vào cổ phiếu chính"),
                    ("small", "Dưới 100 triệu VND", 1, "Tập trung vào cổ phiếu bluechip"),
                ],
            ),
            QuestionId::MarketVolatility => (
                "Bạn cảm thấy thế nào về biến động giá cổ phiếu?",
                "Thái độ với biến động thị trường",
                [
                    ("comfortable", "Thoải mái, đây là cơ hội", 4, "Chấp nhận biến động cao"),
                    ("acceptable", "Chấp nhận được nếu có lý do", 3, "Chấp nhận biến động trung bình"),
                    ("worried", "Hơi lo lắng nhưng vẫn đầu tư", 2, "Thích ổn định hơn"),
                    ("very_worried", "Rất lo lắng, muốn tránh biến động", 1, "Ưu tiên ổn định"),
                ],
            ),
            QuestionId::InvestmentKnowledge => (
                "Mức độ hiểu biết về đầu tư chứng khoán?",
                "Kiến thức ảnh hưởng đến khả năng quản lý rủi ro",
                [
                    ("expert", "Rất am hiểu (Đọc báo cáo tài chính)", 4, "Có thể tự phân tích"),
                    ("good", "Khá hiểu (Biết P/E, P/B cơ bản)", 3, "Có kiến thức cơ bản"),
                    ("basic", "Hiểu ít (Chỉ biết mua/bán)", 2, "Cần hướng dẫn nhiều"),
                    ("beginner", "Mới tìm hiểu", 1, "Cần hướng dẫn chi tiết"),
                ],
            ),
        };

        SurveyQuestion {
            id: self.as_str().to_string(),
            question: question.to_string(),
            description: Some(description.to_string()),
            options: options
                .into_iter()
                .map(|(value, label, score, description)| SurveyOption {
                    value: value.to_string(),
                    label: label.to_string(),
                    score,
                    description: Some(description.to_string()),
                })
                .collect(),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyOption {
    pub value: String,
    pub label: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A question and its ordered options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: Vec<SurveyOption>,
}

impl SurveyQuestion {
    /// Find the option matching an answer value.
    pub fn option(&self, value: &str) -> Option<&SurveyOption> {
        self.options.iter().find(|opt| opt.value == value)
    }

    fn min_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).min().unwrap_or(0)
    }

    fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }
}

/// Ordered set of survey questions with unique ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SurveyQuestion>", into = "Vec<SurveyQuestion>")]
pub struct QuestionBank {
    questions: Vec<SurveyQuestion>,
}

impl QuestionBank {
    /// The ten-question risk-appetite survey.
    pub fn standard() -> Self {
        Self {
            questions: QuestionId::ALL.into_iter().map(QuestionId::build).collect(),
        }
    }

    /// Build a custom bank. Question ids must be unique and the highest
    /// reachable total must fit in a `u32`.
    pub fn new(questions: Vec<SurveyQuestion>) -> Result<Self> {
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|earlier| earlier.id == q.id) {
                return Err(HawkeyeError::ConfigError(format!(
                    "duplicate survey question id: {}",
                    q.id
                )));
            }
        }

        questions
            .iter()
            .try_fold(0u32, |total, q| total.checked_add(q.max_score()))
            .ok_or_else(|| {
                HawkeyeError::ConfigError(
                    "survey option scores overflow the maximum total score".to_string(),
                )
            })?;

        Ok(Self { questions })
    }

    /// Parse a bank from a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn questions(&self) -> &[SurveyQuestion] {
        &self.questions
    }

    /// Get question by id
    pub fn question(&self, id: &str) -> Option<&SurveyQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Lowest and highest total reachable with every question answered.
    ///
    /// Cannot overflow: [`QuestionBank::new`] bounds the highest total.
    pub fn score_range(&self) -> (u32, u32) {
        self.questions.iter().fold((0, 0), |(lo, hi), q| {
            (lo + q.min_score(), hi + q.max_score())
        })
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<SurveyQuestion>> for QuestionBank {
    type Error = HawkeyeError;

    fn try_from(questions: Vec<SurveyQuestion>) -> Result<Self> {
        Self::new(questions)
    }
}

impl From<QuestionBank> for Vec<SurveyQuestion> {
    fn from(bank: QuestionBank) -> Self {
        bank.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bank_shape() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 10);
        for (question, id) in bank.questions().iter().zip(QuestionId::ALL) {
            assert_eq!(question.id, id.as_str());
            assert_eq!(question.options.len(), 4);
        }
        assert_eq!(bank.score_range(), (10, 40));
    }

    #[test]
    fn test_question_lookup() {
        let bank = QuestionBank::standard();
        let q = bank.question("market_crash").unwrap();
        assert_eq!(q.option("buy_more").unwrap().score, 4);
        assert_eq!(q.option("sell_all").unwrap().score, 1);
        assert!(q.option("panic").is_none());
        assert!(bank.question("favourite_colour").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let q = QuestionId::Age.build();
        let err = QuestionBank::new(vec![q.clone(), q]).unwrap_err();
        assert!(err.to_string().contains("duplicate survey question id: age"));
    }

    #[test]
    fn test_overflowing_scores_rejected() {
        let json = format!(
            r#"[
                {{ "id": "q1", "question": "One", "options": [
                    {{ "value": "max", "label": "Max", "score": {} }}
                ]}},
                {{ "id": "q2", "question": "Two", "options": [
                    {{ "value": "one", "label": "One", "score": 1 }}
                ]}}
            ]"#,
            u32::MAX
        );
        let err = QuestionBank::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("overflow the maximum total score"));

        let at_limit = json.replace(r#""score": 1 "#, r#""score": 0 "#);
        let bank = QuestionBank::from_json(&at_limit).unwrap();
        assert_eq!(bank.score_range(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_custom_bank_from_json() {
        let bank = QuestionBank::from_json(
            r#"[
                { "id": "horizon", "question": "How long?", "options": [
                    { "value": "short", "label": "< 1y", "score": 0 },
                    { "value": "long", "label": "> 5y", "score": 10 }
                ]},
                { "id": "goal", "question": "Why?", "options": [
                    { "value": "keep", "label": "Preserve", "score": 2 },
                    { "value": "grow", "label": "Grow", "score": 7 }
                ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.score_range(), (2, 17));

        let dup = r#"[
            { "id": "x", "question": "?", "options": [] },
            { "id": "x", "question": "?", "options": [] }
        ]"#;
        assert!(QuestionBank::from_json(dup).is_err());
    }

    #[test]
    fn test_bank_serde_round_trip_keeps_order() {
        let bank = QuestionBank::standard();
        let json = serde_json::to_string(&bank).unwrap();
        let parsed = QuestionBank::from_json(&json).unwrap();
        assert_eq!(parsed, bank);
    }
}
