//! Strategy contract: actions, attitude metadata, and the per-round match view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    /// The opposite action.
    pub fn flip(self) -> Action {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }

    pub fn is_cooperate(self) -> bool {
        self == Action::Cooperate
    }

    pub fn is_defect(self) -> bool {
        self == Action::Defect
    }
}

/// Author-assigned classification of a strategy's disposition.
///
/// Descriptive metadata only; nothing enforces that an `Aggressive`
/// strategy actually defects more than a `Cooperative` one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attitude {
    Aggressive,
    Cooperative,
    Neutral,
}

impl fmt::Display for Attitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Attitude::Aggressive => "aggressive",
            Attitude::Cooperative => "cooperative",
            Attitude::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Read-only snapshot of the match as seen by one player at one round.
///
/// Built by the runner each round with the two sides swapped, so a
/// strategy always sees itself as "my" and the other player as
/// "opponent". Histories are append-only and always equal in length to
/// the current round number.
#[derive(Clone, Copy, Debug)]
pub struct MatchView<'a> {
    round: u32,
    my_history: &'a [Action],
    opponent_history: &'a [Action],
    my_score: u32,
    opponent_score: u32,
    expected_length: Option<u32>,
}

impl<'a> MatchView<'a> {
    pub fn new(
        round: u32,
        my_history: &'a [Action],
        opponent_history: &'a [Action],
        my_score: u32,
        opponent_score: u32,
        expected_length: Option<u32>,
    ) -> Self {
        Self {
            round,
            my_history,
            opponent_history,
            my_score,
            opponent_score,
            expected_length,
        }
    }

    /// Current round, 0-indexed.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_first_round(&self) -> bool {
        self.round == 0
    }

    pub fn my_history(&self) -> &'a [Action] {
        self.my_history
    }

    pub fn opponent_history(&self) -> &'a [Action] {
        self.opponent_history
    }

    /// My cumulative score over all completed rounds.
    pub fn my_score(&self) -> u32 {
        self.my_score
    }

    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    /// Total match length, when announced by the runner.
    ///
    /// `None` for geometric termination: the match can end any round and
    /// endgame rules have nothing to key on.
    pub fn expected_length(&self) -> Option<u32> {
        self.expected_length
    }

    /// Rounds left including the current one, when the length is known.
    pub fn rounds_remaining(&self) -> Option<u32> {
        self.expected_length
            .map(|len| len.saturating_sub(self.round))
    }

    pub fn my_last(&self) -> Option<Action> {
        self.my_history.last().copied()
    }

    pub fn opponent_last(&self) -> Option<Action> {
        self.opponent_history.last().copied()
    }

    /// My action `n` rounds ago (`n = 0` is the most recent).
    pub fn my_nth_back(&self, n: usize) -> Option<Action> {
        nth_back(self.my_history, n)
    }

    /// Opponent's action `n` rounds ago (`n = 0` is the most recent).
    pub fn opponent_nth_back(&self, n: usize) -> Option<Action> {
        nth_back(self.opponent_history, n)
    }

    pub fn my_defections(&self) -> u32 {
        count(self.my_history, Action::Defect)
    }

    pub fn my_cooperations(&self) -> u32 {
        count(self.my_history, Action::Cooperate)
    }

    pub fn opponent_defections(&self) -> u32 {
        count(self.opponent_history, Action::Defect)
    }

    pub fn opponent_cooperations(&self) -> u32 {
        count(self.opponent_history, Action::Cooperate)
    }

    /// Length of the opponent's trailing run of defections.
    pub fn opponent_defection_streak(&self) -> u32 {
        trailing_streak(self.opponent_history, Action::Defect)
    }

    /// Length of the opponent's trailing run of cooperations.
    pub fn opponent_cooperation_streak(&self) -> u32 {
        trailing_streak(self.opponent_history, Action::Cooperate)
    }

    /// Length of my trailing run of defections.
    pub fn my_defection_streak(&self) -> u32 {
        trailing_streak(self.my_history, Action::Defect)
    }

    /// Length of my trailing run of cooperations.
    pub fn my_cooperation_streak(&self) -> u32 {
        trailing_streak(self.my_history, Action::Cooperate)
    }

    /// Fraction of opponent moves that were cooperations.
    ///
    /// 1.0 before any history exists, so optimistic rules extend trust
    /// on the first round.
    pub fn opponent_cooperation_rate(&self) -> f64 {
        if self.opponent_history.is_empty() {
            1.0
        } else {
            f64::from(self.opponent_cooperations()) / self.opponent_history.len() as f64
        }
    }

    /// Opponent defections within the last `n` rounds.
    pub fn opponent_defections_in_last(&self, n: usize) -> u32 {
        let start = self.opponent_history.len().saturating_sub(n);
        count(&self.opponent_history[start..], Action::Defect)
    }

    /// Opponent cooperations within the last `n` rounds.
    pub fn opponent_cooperations_in_last(&self, n: usize) -> u32 {
        let start = self.opponent_history.len().saturating_sub(n);
        count(&self.opponent_history[start..], Action::Cooperate)
    }

    /// Payoff I received last round, if any round has completed.
    pub fn my_last_payoff(&self) -> Option<u8> {
        let mine = self.my_last()?;
        let theirs = self.opponent_last()?;
        Some(crate::payoff(mine, theirs).0)
    }
}

fn nth_back(history: &[Action], n: usize) -> Option<Action> {
    if n >= history.len() {
        return None;
    }
    Some(history[history.len() - 1 - n])
}

fn count(history: &[Action], action: Action) -> u32 {
    history.iter().filter(|a| **a == action).count() as u32
}

fn trailing_streak(history: &[Action], action: Action) -> u32 {
    history.iter().rev().take_while(|a| **a == action).count() as u32
}

/// A decision rule for the iterated Prisoner's Dilemma.
///
/// `decide` takes `&mut self` so rules can keep local counters (streaks,
/// phases, trigger flags) across rounds. An instance serves exactly one
/// match; build a fresh one per match instead of resetting.
pub trait Strategy {
    /// Stable, human-readable name. Unique across the corpus.
    fn name(&self) -> &'static str;

    /// Author-assigned attitude label.
    fn attitude(&self) -> Attitude;

    /// Choose this round's action.
    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action;
}
