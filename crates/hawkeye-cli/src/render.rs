//! Table rendering for engine results

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use hawkeye_core::format::{MISSING, format_percentage, format_price, format_ratio, or_missing};
use hawkeye_core::survey::{QuestionBank, SurveyProgress};
use hawkeye_core::{Language, RiskRewardResult, StrategyProfile, ValuationInput, ValuationResult};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn valuation(input: &ValuationInput, result: &ValuationResult, language: &Language) -> String {
    let mut t = table(&["Metric", "Value"]);
    t.add_row(vec!["Ticker".to_string(), input.ticker.clone()]);
    t.add_row(vec!["Current price".to_string(), format_price(input.current_price)]);
    t.add_row(vec![
        "Industry avg P/E".to_string(),
        format!(
            "{:.2} ({}/{} peers)",
            result.industry_avg_pe, result.pe_sample.retained, result.pe_sample.valid
        ),
    ]);
    t.add_row(vec![
        "Industry avg P/B".to_string(),
        format!(
            "{:.2} ({}/{} peers)",
            result.industry_avg_pb, result.pb_sample.retained, result.pb_sample.valid
        ),
    ]);
    t.add_row(vec!["Fair value (P/E)".to_string(), format_price(result.fair_value_pe.round())]);
    t.add_row(vec!["Fair value (P/B)".to_string(), format_price(result.fair_value_pb.round())]);
    t.add_row(vec![
        "Composite fair value".to_string(),
        format_price(result.composite_fair_value.round()),
    ]);
    t.add_row(vec!["Upside".to_string(), format_percentage(result.upside_percentage, 1)]);
    t.add_row(vec![
        "P/E vs industry".to_string(),
        or_missing(result.pe_premium, |p| format_percentage(p, 1)),
    ]);
    t.add_row(vec![
        "P/B vs industry".to_string(),
        or_missing(result.pb_premium, |p| format_percentage(p, 1)),
    ]);
    t.add_row(vec![
        "Recommendation".to_string(),
        format!("{} ({})", result.recommendation, result.verdict),
    ]);
    t.add_row(vec!["Risk".to_string(), result.risk_level.label(language).to_string()]);

    let mut out = t.to_string();
    for warning in &result.warnings {
        out.push_str(&format!("\n⚠️  {warning}"));
    }
    out
}

pub fn strategy(profile: &StrategyProfile, score: Option<u32>, language: &Language) -> String {
    let mut t = table(&["Rule", "Value"]);
    if let Some(score) = score {
        t.add_row(vec!["Survey score".to_string(), score.to_string()]);
    }
    t.add_row(vec!["Profile".to_string(), profile.display_name(language).to_string()]);
    for (bucket, pct) in profile.allocation.buckets() {
        t.add_row(vec![format!("Allocation: {bucket}"), format!("{pct}%")]);
    }
    let stop_loss = if profile.stop_loss.min == profile.stop_loss.max {
        format!("{}%", profile.stop_loss.min)
    } else {
        format!("{}% .. {}%", profile.stop_loss.min, profile.stop_loss.max)
    };
    t.add_row(vec!["Stop-loss".to_string(), stop_loss]);
    for (i, tier) in profile.take_profit.tiers().enumerate() {
        t.add_row(vec![
            format!("Take-profit {}", i + 1),
            format!("+{}%: sell {}%", tier.target, tier.sell_percent),
        ]);
    }
    t.add_row(vec!["Focus".to_string(), profile.focus_stocks.join(", ")]);
    t.add_row(vec![
        "Max position".to_string(),
        format!("{}% NAV", profile.max_position_size),
    ]);
    t.add_row(vec!["Risk".to_string(), profile.risk_level.label(language).to_string()]);
    t.to_string()
}

pub fn progress(progress: &SurveyProgress, score: u32) -> String {
    let mut t = table(&["Survey", "Value"]);
    t.add_row(vec![
        "Answered".to_string(),
        format!("{}/{} ({:.0}%)", progress.answered, progress.total, progress.percent()),
    ]);
    t.add_row(vec!["Partial score".to_string(), score.to_string()]);
    t.add_row(vec!["Missing".to_string(), progress.missing.join(", ")]);
    t.to_string()
}

pub fn questions(bank: &QuestionBank) -> String {
    let mut t = table(&["Id", "Question", "Options (value = score)"]);
    for q in bank.questions() {
        let options = q
            .options
            .iter()
            .map(|o| format!("{} = {}", o.value, o.score))
            .collect::<Vec<_>>()
            .join("\n");
        t.add_row(vec![q.id.clone(), q.question.clone(), options]);
    }
    t.to_string()
}

pub fn risk_reward(result: &RiskRewardResult, language: &Language) -> String {
    let mut t = table(&["Result", "Value"]);
    t.add_row(vec!["Risk / share".to_string(), format_price(result.risk)]);
    t.add_row(vec!["Reward / share".to_string(), format_price(result.reward)]);
    t.add_row(vec![
        "Risk-reward ratio".to_string(),
        match result.quality {
            Some(quality) => format!("{} ({})", format_ratio(result.ratio), quality.label(language)),
            None => MISSING.to_string(),
        },
    ]);
    t.add_row(vec![
        "Position size (shares)".to_string(),
        or_missing(result.position_size, |n| n.to_string()),
    ]);
    t.add_row(vec![
        "Required gain to recover".to_string(),
        or_missing(result.required_gain_to_recover, |g| format!("{g:.2}%")),
    ]);
    t.to_string()
}
