//! Match execution engine

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::payoff;
use crate::random::SeededRng;
use crate::strategy::{Action, MatchView, Strategy};

/// Result of a single round
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub action_a: Action,
    pub action_b: Action,
    pub score_a: u8,
    pub score_b: u8,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub name_a: String,
    pub name_b: String,
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    pub round_count: u32,
}

/// Configuration for round count per match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    min_rounds: u32,
    max_rounds: u32,
    end_probability: u8, // % chance to end each round after min
    announced: bool,
}

impl RoundConfig {
    /// Geometric termination between `min` and `max` rounds, with
    /// `end_probability` percent chance of ending each round past the
    /// minimum. The length is not announced to strategies.
    pub fn new(min: u32, max: u32, end_probability: u8) -> Result<Self, EngineError> {
        if min == 0 || min > max {
            return Err(EngineError::InvalidRoundBounds { min, max });
        }
        if end_probability > 100 {
            return Err(EngineError::InvalidEndProbability(end_probability));
        }
        Ok(Self {
            min_rounds: min,
            max_rounds: max,
            end_probability,
            announced: false,
        })
    }

    /// Standard config: 20-50 rounds, 5% end chance per round.
    pub fn standard() -> Self {
        Self {
            min_rounds: 20,
            max_rounds: 50,
            end_probability: 5,
            announced: false,
        }
    }

    /// Compressed config for quick evaluation: 10-30 rounds, 7% end chance.
    pub fn compressed() -> Self {
        Self {
            min_rounds: 10,
            max_rounds: 30,
            end_probability: 7,
            announced: false,
        }
    }

    /// Exactly `rounds` rounds, announced to both strategies through
    /// [`MatchView::expected_length`]. Endgame rules key on this.
    pub fn fixed(rounds: u32) -> Self {
        let rounds = rounds.max(1);
        Self {
            min_rounds: rounds,
            max_rounds: rounds,
            end_probability: 0,
            announced: true,
        }
    }

    pub fn min_rounds(&self) -> u32 {
        self.min_rounds
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn end_probability(&self) -> u8 {
        self.end_probability
    }

    /// The horizon strategies get to see, if any.
    pub fn announced_length(&self) -> Option<u32> {
        self.announced.then_some(self.max_rounds)
    }
}

/// Determine how many rounds this match will have
///
/// Geometric distribution: after `min_rounds`, each further round is
/// reached with probability `1 - end_probability`.
fn determine_round_count(rng: &mut SeededRng, config: &RoundConfig) -> u32 {
    let mut rounds = config.min_rounds;

    while rounds < config.max_rounds {
        if rng.chance(config.end_probability) {
            break;
        }
        rounds += 1;
    }

    rounds
}

/// Run a complete match between two strategies
///
/// Both strategies decide simultaneously each round: each sees only the
/// histories up to the previous round, through a [`MatchView`] with the
/// sides swapped. Each (round, player) pair draws from its own RNG
/// substream so one player's draws never perturb the other's.
///
/// Deterministic: same strategies, seed, match index and config produce
/// an identical [`MatchResult`].
pub fn run_match(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    seed: u64,
    match_index: u32,
    config: &RoundConfig,
) -> MatchResult {
    let mut match_rng = SeededRng::new(seed).stream(u64::from(match_index));
    let round_count = determine_round_count(&mut match_rng, config);
    let expected = config.announced_length();

    let mut history_a: Vec<Action> = Vec::with_capacity(round_count as usize);
    let mut history_b: Vec<Action> = Vec::with_capacity(round_count as usize);
    let mut rounds: Vec<RoundResult> = Vec::with_capacity(round_count as usize);
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    for round in 0..round_count {
        let mut rng_a = match_rng.stream(u64::from(round) * 2);
        let mut rng_b = match_rng.stream(u64::from(round) * 2 + 1);

        let view_a = MatchView::new(round, &history_a, &history_b, total_a, total_b, expected);
        let view_b = MatchView::new(round, &history_b, &history_a, total_b, total_a, expected);

        let action_a = a.decide(&view_a, &mut rng_a);
        let action_b = b.decide(&view_b, &mut rng_b);

        let (score_a, score_b) = payoff(action_a, action_b);
        total_a += u32::from(score_a);
        total_b += u32::from(score_b);

        trace!(
            "round {}: {} {:?} vs {} {:?} -> ({}, {})",
            round,
            a.name(),
            action_a,
            b.name(),
            action_b,
            score_a,
            score_b
        );

        rounds.push(RoundResult {
            round,
            action_a,
            action_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        history_a.push(action_a);
        history_b.push(action_b);
    }

    debug!(
        "match {}: {} {} - {} {} over {} rounds",
        match_index,
        a.name(),
        total_a,
        b.name(),
        total_b,
        round_count
    );

    MatchResult {
        name_a: a.name().to_string(),
        name_b: b.name().to_string(),
        rounds,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Attitude;

    // Minimal reference strategies; the real corpus lives in dilemma-corpus.

    struct AlwaysCooperate;

    impl Strategy for AlwaysCooperate {
        fn name(&self) -> &'static str {
            "Always Cooperate"
        }
        fn attitude(&self) -> Attitude {
            Attitude::Cooperative
        }
        fn decide(&mut self, _view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
            Action::Cooperate
        }
    }

    struct AlwaysDefect;

    impl Strategy for AlwaysDefect {
        fn name(&self) -> &'static str {
            "Always Defect"
        }
        fn attitude(&self) -> Attitude {
            Attitude::Aggressive
        }
        fn decide(&mut self, _view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
            Action::Defect
        }
    }

    struct TitForTat;

    impl Strategy for TitForTat {
        fn name(&self) -> &'static str {
            "Tit for Tat"
        }
        fn attitude(&self) -> Attitude {
            Attitude::Cooperative
        }
        fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }

    struct RandomCoin;

    impl Strategy for RandomCoin {
        fn name(&self) -> &'static str {
            "Random"
        }
        fn attitude(&self) -> Attitude {
            Attitude::Neutral
        }
        fn decide(&mut self, _view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
            if rng.coin_flip() {
                Action::Cooperate
            } else {
                Action::Defect
            }
        }
    }

    #[test]
    fn test_round_config_validation() {
        assert!(RoundConfig::new(5, 10, 5).is_ok());
        assert_eq!(
            RoundConfig::new(10, 5, 5),
            Err(EngineError::InvalidRoundBounds { min: 10, max: 5 })
        );
        assert_eq!(
            RoundConfig::new(0, 5, 5),
            Err(EngineError::InvalidRoundBounds { min: 0, max: 5 })
        );
        assert_eq!(
            RoundConfig::new(5, 10, 101),
            Err(EngineError::InvalidEndProbability(101))
        );
    }

    #[test]
    fn test_fixed_config_is_announced() {
        let config = RoundConfig::fixed(25);
        assert_eq!(config.announced_length(), Some(25));
        assert_eq!(config.min_rounds(), 25);
        assert_eq!(config.max_rounds(), 25);

        // Geometric configs keep the horizon hidden
        assert_eq!(RoundConfig::standard().announced_length(), None);
    }

    #[test]
    fn test_round_count_in_range() {
        let config = RoundConfig::standard();

        for match_index in 0..200u32 {
            let mut rng = SeededRng::new(42).stream(u64::from(match_index));
            let count = determine_round_count(&mut rng, &config);
            assert!(count >= 20, "round count {} below minimum", count);
            assert!(count <= 50, "round count {} above maximum", count);
        }
    }

    #[test]
    fn test_round_count_distribution() {
        let config = RoundConfig::standard();
        let mut total = 0u32;
        let samples = 1000u32;

        for match_index in 0..samples {
            let mut rng = SeededRng::new(42).stream(u64::from(match_index));
            total += determine_round_count(&mut rng, &config);
        }

        let average = f64::from(total) / f64::from(samples);
        // Expected around 35 for the standard config
        assert!(average > 30.0, "average {} too low", average);
        assert!(average < 40.0, "average {} too high", average);
    }

    #[test]
    fn test_compressed_round_count_range() {
        let config = RoundConfig::compressed();
        for match_index in 0..200u32 {
            let mut rng = SeededRng::new(42).stream(u64::from(match_index));
            let count = determine_round_count(&mut rng, &config);
            assert!((10..=30).contains(&count), "count {} out of [10,30]", count);
        }
    }

    #[test]
    fn test_fixed_round_count_exact() {
        let config = RoundConfig::fixed(17);
        for match_index in 0..20u32 {
            let mut rng = SeededRng::new(42).stream(u64::from(match_index));
            assert_eq!(determine_round_count(&mut rng, &config), 17);
        }
    }

    #[test]
    fn test_match_determinism() {
        let r1 = run_match(
            &mut TitForTat,
            &mut RandomCoin,
            42,
            0,
            &RoundConfig::standard(),
        );
        let r2 = run_match(
            &mut TitForTat,
            &mut RandomCoin,
            42,
            0,
            &RoundConfig::standard(),
        );

        assert_eq!(r1.round_count, r2.round_count);
        assert_eq!(r1.total_score_a, r2.total_score_a);
        assert_eq!(r1.total_score_b, r2.total_score_b);

        for (a, b) in r1.rounds.iter().zip(r2.rounds.iter()) {
            assert_eq!(a.action_a, b.action_a);
            assert_eq!(a.action_b, b.action_b);
        }
    }

    #[test]
    fn test_different_match_indices_differ() {
        let r1 = run_match(
            &mut RandomCoin,
            &mut RandomCoin,
            42,
            0,
            &RoundConfig::standard(),
        );
        let r2 = run_match(
            &mut RandomCoin,
            &mut RandomCoin,
            42,
            1,
            &RoundConfig::standard(),
        );

        let moves1: Vec<_> = r1.rounds.iter().map(|r| (r.action_a, r.action_b)).collect();
        let moves2: Vec<_> = r2.rounds.iter().map(|r| (r.action_a, r.action_b)).collect();
        assert_ne!(moves1, moves2);
    }

    #[test]
    fn test_cooperate_vs_cooperate() {
        let result = run_match(
            &mut AlwaysCooperate,
            &mut AlwaysCooperate,
            42,
            0,
            &RoundConfig::standard(),
        );

        for round in &result.rounds {
            assert_eq!(round.action_a, Action::Cooperate);
            assert_eq!(round.action_b, Action::Cooperate);
            assert_eq!(round.score_a, 3);
            assert_eq!(round.score_b, 3);
        }

        assert_eq!(result.total_score_a, result.round_count * 3);
        assert_eq!(result.total_score_b, result.round_count * 3);
    }

    #[test]
    fn test_defect_vs_cooperate() {
        let result = run_match(
            &mut AlwaysDefect,
            &mut AlwaysCooperate,
            42,
            0,
            &RoundConfig::standard(),
        );

        for round in &result.rounds {
            assert_eq!(round.score_a, 5);
            assert_eq!(round.score_b, 0);
        }

        assert_eq!(result.total_score_a, result.round_count * 5);
        assert_eq!(result.total_score_b, 0);
    }

    #[test]
    fn test_tft_vs_always_defect() {
        let result = run_match(
            &mut TitForTat,
            &mut AlwaysDefect,
            42,
            0,
            &RoundConfig::standard(),
        );

        // Round 0: TFT cooperates, AD defects
        assert_eq!(result.rounds[0].action_a, Action::Cooperate);
        assert_eq!(result.rounds[0].action_b, Action::Defect);

        // Round 1+: TFT retaliates, both defect
        for round in result.rounds.iter().skip(1) {
            assert_eq!(round.action_a, Action::Defect);
            assert_eq!(round.action_b, Action::Defect);
        }
    }

    #[test]
    fn test_cumulative_scores_consistent() {
        let result = run_match(
            &mut TitForTat,
            &mut RandomCoin,
            7,
            3,
            &RoundConfig::standard(),
        );

        let mut expected_a = 0u32;
        let mut expected_b = 0u32;

        for round in &result.rounds {
            expected_a += u32::from(round.score_a);
            expected_b += u32::from(round.score_b);
            assert_eq!(round.cumulative_a, expected_a);
            assert_eq!(round.cumulative_b, expected_b);
        }

        assert_eq!(result.total_score_a, expected_a);
        assert_eq!(result.total_score_b, expected_b);
    }

    #[test]
    fn test_result_records_names() {
        let result = run_match(
            &mut TitForTat,
            &mut AlwaysDefect,
            1,
            0,
            &RoundConfig::compressed(),
        );
        assert_eq!(result.name_a, "Tit for Tat");
        assert_eq!(result.name_b, "Always Defect");
    }

    #[test]
    fn test_result_serializes() {
        let result = run_match(
            &mut TitForTat,
            &mut AlwaysDefect,
            1,
            0,
            &RoundConfig::fixed(5),
        );

        let json = serde_json::to_string(&result).unwrap();
        let back: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.round_count, 5);
        assert_eq!(back.total_score_a, result.total_score_a);
        assert_eq!(back.rounds.len(), 5);
    }
}
