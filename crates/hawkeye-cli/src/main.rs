//! Command-line interface for the hawkeye engine
//!
//! ```bash
//! hawkeye valuate --input crates/hawkeye-core/fixtures/hpg.json
//! hawkeye survey --answers crates/hawkeye-core/fixtures/balanced_answers.json
//! hawkeye profile balanced --lang en
//! hawkeye risk-reward --entry 100000 --exit 115000 --stop-loss 95000 \
//!     --capital 100000000 --max-loss 5
//! ```

mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hawkeye_core::survey::{SurveyProgress, assess_survey_with, score_survey};
use hawkeye_core::{
    EngineConfig, InvestorProfile, Language, QuestionBank, RiskRewardInput, SurveyAnswerSet,
    ValuationEngine, ValuationInput, profile_for,
};
use hawkeye_utils::AppConfig;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hawkeye")]
#[command(about = "Valuation, risk survey and position sizing", long_about = None)]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Label language (vi, en); defaults to HAWKEYE_LANG or Vietnamese
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Value a ticker against its peers
    Valuate {
        /// Valuation input JSON file, or - for stdin
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Score a risk-appetite survey and show the matching strategy
    Survey {
        /// Answers JSON object (question id -> option value), or - for stdin
        #[arg(short, long)]
        answers: PathBuf,
        /// Custom question bank JSON file
        #[arg(long)]
        bank: Option<PathBuf>,
        /// Report progress for an unfinished survey instead of failing
        #[arg(long)]
        allow_partial: bool,
    },
    /// List the survey questions and option scores
    Questions {
        /// Custom question bank JSON file
        #[arg(long)]
        bank: Option<PathBuf>,
    },
    /// Show the strategy profile for a band
    Profile {
        /// defensive, balanced or aggressive
        band: InvestorProfile,
    },
    /// Risk/reward ratio and position sizing for a trade plan
    RiskReward {
        #[arg(long)]
        entry: f64,
        /// Exit or target price
        #[arg(long)]
        exit: f64,
        #[arg(long)]
        stop_loss: f64,
        /// Capital available for the trade
        #[arg(long, requires = "max_loss")]
        capital: Option<f64>,
        /// Maximum loss as % of capital
        #[arg(long)]
        max_loss: Option<f64>,
    },
}

fn main() -> Result<()> {
    let app = AppConfig::from_env().context("reading HAWKEYE_* environment")?;
    hawkeye_utils::init_tracing_with(app.log_format);

    let cli = Cli::parse();
    let language = Language::from_code(cli.lang.as_deref().unwrap_or(&app.language));
    let config = EngineConfig::builder().language(language).build()?;

    info!(environment = %app.environment, language = %config.language, "starting hawkeye");

    match cli.command {
        Commands::Valuate { input } => {
            let input = ValuationInput::from_json(&read_source(&input)?)
                .context("parsing valuation input")?;
            let engine = ValuationEngine::with_config(config.valuation)?
                .with_language(config.language.clone());
            let result = engine.evaluate(&input)?;
            emit(cli.json, &result, || render::valuation(&input, &result, &config.language))
        }
        Commands::Survey {
            answers,
            bank,
            allow_partial,
        } => {
            let answers: SurveyAnswerSet = serde_json::from_str(&read_source(&answers)?)
                .context("parsing survey answers")?;
            let bank = load_bank(bank.as_deref())?;
            config.bands.validate_for(&bank)?;

            let progress = SurveyProgress::of(&answers, &bank);
            if !progress.is_complete() && allow_partial {
                let score = score_survey(&answers, &bank);
                return emit(cli.json, &progress, || render::progress(&progress, score));
            }

            let assessment = assess_survey_with(&answers, &bank, &config.bands)?;
            let profile = profile_for(assessment.profile);
            if cli.json {
                print_json(&serde_json::json!({
                    "score": assessment.score,
                    "profile": profile,
                }))
            } else {
                println!("{}", render::strategy(profile, Some(assessment.score), &config.language));
                Ok(())
            }
        }
        Commands::Questions { bank } => {
            let bank = load_bank(bank.as_deref())?;
            emit(cli.json, &bank, || render::questions(&bank))
        }
        Commands::Profile { band } => {
            let profile = profile_for(band);
            emit(cli.json, profile, || render::strategy(profile, None, &config.language))
        }
        Commands::RiskReward {
            entry,
            exit,
            stop_loss,
            capital,
            max_loss,
        } => {
            let input = RiskRewardInput {
                entry,
                exit,
                stop_loss,
                capital,
                max_loss_pct: max_loss,
            };
            let result = hawkeye_core::risk_reward::evaluate(&input);
            emit(cli.json, &result, || render::risk_reward(&result, &config.language))
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank> {
    let Some(path) = path else {
        return Ok(QuestionBank::standard());
    };
    let bank = QuestionBank::from_json(&read_source(path)?)
        .with_context(|| format!("parsing question bank {}", path.display()))?;
    if bank.is_empty() {
        bail!("question bank {} has no questions", path.display());
    }
    Ok(bank)
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, table: impl FnOnce() -> String) -> Result<()> {
    if json {
        print_json(value)
    } else {
        println!("{}", table());
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
