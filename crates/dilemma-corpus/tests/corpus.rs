//! Integration tests: every corpus member must survive full matches
//! against a reference set, deterministically, without panics.

use dilemma_engine::Strategy as _;
use dilemma_engine::{payoff, run_match, Action, MatchView, RoundConfig, SeededRng};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const REFERENCE: &[&str] = &["Tit for Tat", "Always Defect", "Always Cooperate", "Random"];

#[test]
fn corpus_has_expected_size() {
    assert_eq!(dilemma_corpus::names().len(), 102);
}

#[test]
fn every_strategy_survives_reference_matches() {
    init_logging();
    let config = RoundConfig::standard();

    for name in dilemma_corpus::names() {
        for (index, reference) in REFERENCE.iter().enumerate() {
            let mut a = dilemma_corpus::build(name).unwrap();
            let mut b = dilemma_corpus::build(reference).unwrap();
            let result = run_match(a.as_mut(), b.as_mut(), 42, index as u32, &config);

            assert!(
                (config.min_rounds()..=config.max_rounds()).contains(&result.round_count),
                "{} vs {}: round count {} out of bounds",
                name,
                reference,
                result.round_count
            );
            assert_eq!(result.rounds.len() as u32, result.round_count);

            let mut total_a = 0u32;
            let mut total_b = 0u32;
            for round in &result.rounds {
                let (sa, sb) = payoff(round.action_a, round.action_b);
                assert_eq!(round.score_a, sa, "{} vs {}: bad payoff", name, reference);
                assert_eq!(round.score_b, sb, "{} vs {}: bad payoff", name, reference);
                total_a += u32::from(sa);
                total_b += u32::from(sb);
                assert_eq!(round.cumulative_a, total_a);
                assert_eq!(round.cumulative_b, total_b);
            }
            assert_eq!(result.total_score_a, total_a);
            assert_eq!(result.total_score_b, total_b);
        }
    }
}

#[test]
fn every_strategy_survives_announced_matches() {
    init_logging();
    let config = RoundConfig::fixed(30);

    for name in dilemma_corpus::names() {
        let mut a = dilemma_corpus::build(name).unwrap();
        let mut b = dilemma_corpus::build("Tit for Tat").unwrap();
        let result = run_match(a.as_mut(), b.as_mut(), 7, 0, &config);
        assert_eq!(result.round_count, 30, "{}: fixed length not honored", name);
    }
}

#[test]
fn every_strategy_survives_self_play() {
    init_logging();
    let config = RoundConfig::compressed();

    for name in dilemma_corpus::names() {
        let mut a = dilemma_corpus::build(name).unwrap();
        let mut b = dilemma_corpus::build(name).unwrap();
        let result = run_match(a.as_mut(), b.as_mut(), 3, 0, &config);
        assert!(result.round_count >= config.min_rounds(), "{}", name);
    }
}

#[test]
fn matches_are_deterministic_per_seed() {
    init_logging();
    let config = RoundConfig::standard();

    for name in dilemma_corpus::names() {
        let run = |seed: u64| {
            let mut a = dilemma_corpus::build(name).unwrap();
            let mut b = dilemma_corpus::build("Tit for Tat").unwrap();
            let result = run_match(a.as_mut(), b.as_mut(), seed, 5, &config);
            serde_json::to_string(&result).unwrap()
        };
        assert_eq!(run(42), run(42), "{}: same seed diverged", name);
    }
}

#[test]
fn known_matchup_tft_vs_all_defect() {
    init_logging();
    let mut tft = dilemma_corpus::build("Tit for Tat").unwrap();
    let mut all_d = dilemma_corpus::build("Always Defect").unwrap();
    let result = run_match(tft.as_mut(), all_d.as_mut(), 42, 0, &RoundConfig::standard());

    assert_eq!(result.rounds[0].action_a, Action::Cooperate);
    assert_eq!(result.rounds[0].action_b, Action::Defect);
    for round in result.rounds.iter().skip(1) {
        assert_eq!(round.action_a, Action::Defect);
        assert_eq!(round.action_b, Action::Defect);
    }
}

#[test]
fn known_matchup_mutual_tft_stays_cooperative() {
    init_logging();
    let mut a = dilemma_corpus::build("Tit for Tat").unwrap();
    let mut b = dilemma_corpus::build("Tit for Tat").unwrap();
    let result = run_match(a.as_mut(), b.as_mut(), 42, 0, &RoundConfig::standard());

    for round in &result.rounds {
        assert_eq!(round.action_a, Action::Cooperate);
        assert_eq!(round.action_b, Action::Cooperate);
    }
}

#[test]
fn grim_trigger_never_recovers() {
    init_logging();
    let mut grim = dilemma_corpus::build("Grim Trigger").unwrap();
    let mut alternator = dilemma_corpus::build("Alternator").unwrap();
    let result = run_match(grim.as_mut(), alternator.as_mut(), 42, 0, &RoundConfig::standard());

    // Alternator defects on round 1; grim must defect from round 2 on
    for round in result.rounds.iter().skip(2) {
        assert_eq!(round.action_a, Action::Defect, "round {}", round.round);
    }
}

/// Build a plausible history pair: actions arbitrary, scores consistent
/// with the payoff matrix.
fn history_strategy() -> impl Strategy<Value = (Vec<Action>, Vec<Action>)> {
    prop::collection::vec((any::<bool>(), any::<bool>()), 0..40).prop_map(|pairs| {
        let to_action = |c: bool| if c { Action::Cooperate } else { Action::Defect };
        pairs
            .into_iter()
            .map(|(a, b)| (to_action(a), to_action(b)))
            .unzip()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn no_strategy_panics_on_arbitrary_history(
        (my, opp) in history_strategy(),
        seed: u64,
        announce_extra in prop::option::of(0u32..20),
    ) {
        let round = my.len() as u32;
        let (my_score, opp_score) = my.iter().zip(&opp).fold((0u32, 0u32), |acc, (m, o)| {
            let (sa, sb) = payoff(*m, *o);
            (acc.0 + u32::from(sa), acc.1 + u32::from(sb))
        });
        let expected = announce_extra.map(|extra| round + extra);
        let view = MatchView::new(round, &my, &opp, my_score, opp_score, expected);

        for mut strategy in dilemma_corpus::all() {
            let mut rng = SeededRng::new(seed);
            let _ = strategy.decide(&view, &mut rng);
        }
    }

    #[test]
    fn deterministic_strategies_repeat_under_same_rng(
        (my, opp) in history_strategy(),
        seed: u64,
    ) {
        let round = my.len() as u32;
        let view = MatchView::new(round, &my, &opp, 0, 0, None);

        for name in dilemma_corpus::names() {
            let mut first = dilemma_corpus::build(name).unwrap();
            let mut second = dilemma_corpus::build(name).unwrap();
            let mut rng_a = SeededRng::new(seed);
            let mut rng_b = SeededRng::new(seed);
            prop_assert_eq!(
                first.decide(&view, &mut rng_a),
                second.decide(&view, &mut rng_b),
                "{} diverged on identical state",
                name
            );
        }
    }
}
