//! Match bookkeeping for the iterated Prisoner's Dilemma.
//!
//! This crate carries the machinery every strategy in the corpus relies on:
//! - round counting, history slices and score accumulation ([`MatchView`])
//! - the per-round decision contract ([`Strategy`], [`Attitude`])
//! - deterministic randomness for probabilistic rules ([`SeededRng`])
//! - a single-match runner ([`run_match`])
//!
//! The strategies themselves live in the `dilemma-corpus` crate.

mod error;
mod game;
mod random;
mod strategy;

pub use error::EngineError;
pub use game::{run_match, MatchResult, RoundConfig, RoundResult};
pub use random::SeededRng;
pub use strategy::{Action, Attitude, MatchView, Strategy};

/// Payoff matrix for the Prisoner's Dilemma.
/// Returns (score_a, score_b).
pub fn payoff(a: Action, b: Action) -> (u8, u8) {
    match (a, b) {
        (Action::Cooperate, Action::Cooperate) => (3, 3),
        (Action::Cooperate, Action::Defect) => (0, 5),
        (Action::Defect, Action::Cooperate) => (5, 0),
        (Action::Defect, Action::Defect) => (1, 1),
    }
}
