//! Property tests for the engine's algebraic guarantees

use hawkeye_core::survey::QuestionBank;
use hawkeye_core::valuation::stats::{mean_and_std_dev, trimmed_mean};
use hawkeye_core::{CompanyMetrics, PeerSample, SurveyAnswerSet, Verdict, compute_valuation, score_survey};
use proptest::prelude::*;

fn peer_strategy() -> impl Strategy<Value = PeerSample> {
    (
        "[A-Z]{3}",
        proptest::option::of(-10.0..150.0_f64),
        proptest::option::of(-1.0..15.0_f64),
    )
        .prop_map(|(ticker, pe, pb)| PeerSample::new(ticker, pe, pb))
}

/// Verdict bands written out as half-open intervals.
fn bands_containing(upside: f64) -> Vec<Verdict> {
    let table = [
        (30.0, f64::INFINITY, Verdict::StrongBuy),
        (15.0, 30.0, Verdict::Buy),
        (-5.0, 15.0, Verdict::Hold),
        (-15.0, -5.0, Verdict::Sell),
        (f64::NEG_INFINITY, -15.0, Verdict::StrongSell),
    ];
    table
        .iter()
        .filter(|(lo, hi, _)| upside >= *lo && upside < *hi)
        .map(|(_, _, v)| *v)
        .collect()
}

proptest! {
    #[test]
    fn composite_is_mean_of_methods(
        price in 1.0..1_000_000.0_f64,
        eps in -10_000.0..10_000.0_f64,
        bvps in -50_000.0..50_000.0_f64,
        peers in proptest::collection::vec(peer_strategy(), 0..12),
    ) {
        let metrics = CompanyMetrics { eps, pe: None, pb: None, bvps };
        let result = compute_valuation(price, &metrics, &peers).unwrap();

        prop_assert_eq!(
            result.composite_fair_value,
            (result.fair_value_pe + result.fair_value_pb) / 2.0
        );
        prop_assert_eq!(
            result.upside_percentage,
            (result.composite_fair_value - price) / price * 100.0
        );
        prop_assert_eq!(result.verdict, Verdict::from_upside(result.upside_percentage));
        prop_assert!(result.industry_avg_pe >= 0.0 && result.industry_avg_pe < 100.0);
        prop_assert!(result.industry_avg_pb >= 0.0 && result.industry_avg_pb < 10.0);
    }

    #[test]
    fn exactly_one_verdict_band(upside in -1_000.0..1_000.0_f64) {
        let bands = bands_containing(upside);
        prop_assert_eq!(bands.len(), 1);
        prop_assert_eq!(bands[0], Verdict::from_upside(upside));
    }

    #[test]
    fn trimming_a_tight_cluster_is_a_no_op(
        values in proptest::collection::vec(0.1..99.9_f64, 1..12),
    ) {
        let (mean, sd) = mean_and_std_dev(&values).unwrap();
        prop_assume!(values.iter().all(|v| (v - mean).abs() <= 2.0 * sd));

        let once = trimmed_mean(&values, 2.0);
        prop_assert_eq!(once.retained, values.len());
        prop_assert!((once.mean - mean).abs() < 1e-9);
    }

    #[test]
    fn retrimming_the_retained_values_keeps_the_mean(
        values in proptest::collection::vec(0.1..99.9_f64, 1..12),
    ) {
        let (mean, sd) = mean_and_std_dev(&values).unwrap();
        let retained: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| (v - mean).abs() <= 2.0 * sd)
            .collect();
        prop_assume!(!retained.is_empty());

        let (retained_mean, retained_sd) = mean_and_std_dev(&retained).unwrap();
        prop_assume!(retained.iter().all(|v| (v - retained_mean).abs() <= 2.0 * retained_sd));

        let once = trimmed_mean(&values, 2.0);
        prop_assert_eq!(once.retained, retained.len());

        let twice = trimmed_mean(&retained, 2.0);
        prop_assert_eq!(twice.retained, retained.len());
        prop_assert!(!twice.fell_back);
        prop_assert!((twice.mean - once.mean).abs() < 1e-9);
    }

    #[test]
    fn raising_one_answer_never_lowers_total(
        picks in proptest::collection::vec(proptest::option::of(0usize..4), 10),
        target in 0usize..10,
        better in 0usize..4,
    ) {
        let bank = QuestionBank::standard();
        let questions = bank.questions();

        let mut answers: SurveyAnswerSet = questions
            .iter()
            .zip(&picks)
            .filter_map(|(q, pick)| pick.map(|i| (q.id.clone(), q.options[i].value.clone())))
            .collect();
        let before = score_survey(&answers, &bank);

        let question = &questions[target];
        let current = picks[target].map_or(0, |i| question.options[i].score);
        let candidate = &question.options[better];
        prop_assume!(candidate.score >= current);

        answers.insert(question.id.clone(), candidate.value.clone());
        prop_assert!(score_survey(&answers, &bank) >= before);
    }
}
