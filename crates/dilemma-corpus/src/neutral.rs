//! Neutral strategies: mixers, mirrors and reactive rules without a
//! fixed lean toward either action.

use dilemma_engine::{payoff, Action, Attitude, MatchView, SeededRng, Strategy};

use crate::registry::Entry;

/// Fair coin every round.
#[derive(Default)]
pub struct RandomCoin;

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

/// C, D, C, D, ...
#[derive(Default)]
pub struct Alternator;

impl Strategy for Alternator {
    fn name(&self) -> &'static str {
        "Alternator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 2 == 0 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Cooperates until the first betrayal, then defects forever.
#[derive(Default)]
pub struct GrimTrigger;

impl Strategy for GrimTrigger {
    fn name(&self) -> &'static str {
        "Grim Trigger"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections() > 0 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Win-stay lose-shift: repeats its move after a good round (3+ points),
/// switches after a bad one.
#[derive(Default)]
pub struct Pavlov;

impl Strategy for Pavlov {
    fn name(&self) -> &'static str {
        "Pavlov"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match view.my_last_payoff() {
            None => Action::Cooperate,
            Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Cooperate),
            Some(_) => view.my_last().map(Action::flip).unwrap_or(Action::Cooperate),
        }
    }
}

/// Escalating retaliation with built-in settling: after N opponent
/// defections, total own defections track N(N+1)/2.
#[derive(Default)]
pub struct Gradual;

impl Strategy for Gradual {
    fn name(&self) -> &'static str {
        "Gradual"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let theirs = view.opponent_defections();
        let expected = theirs * (theirs + 1) / 2;
        if view.my_defections() < expected {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Tit for Tat with a 5% tremble.
#[derive(Default)]
pub struct NoisyTitForTat;

impl Strategy for NoisyTitForTat {
    fn name(&self) -> &'static str {
        "Noisy Tit for Tat"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        let base = view.opponent_last().unwrap_or(Action::Cooperate);
        if rng.chance(5) {
            base.flip()
        } else {
            base
        }
    }
}

/// Plays the opponent's most common move over the last five rounds,
/// cooperating on ties.
#[derive(Default)]
pub struct WindowMajority;

impl Strategy for WindowMajority {
    fn name(&self) -> &'static str {
        "Window Majority"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections_in_last(5) > view.opponent_cooperations_in_last(5) {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Repeating C, C, D.
#[derive(Default)]
pub struct CyclerCcd;

impl Strategy for CyclerCcd {
    fn name(&self) -> &'static str {
        "Cycler CCD"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 3 == 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Cooperates with probability equal to the opponent's cooperation rate.
#[derive(Default)]
pub struct MirrorRate;

impl Strategy for MirrorRate {
    fn name(&self) -> &'static str {
        "Mirror Rate"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        if rng.next_f64() < view.opponent_cooperation_rate() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Plays to keep the scores level: cooperates while ahead, defects while
/// behind, mirrors on a tie.
#[derive(Default)]
pub struct Equalizer;

impl Strategy for Equalizer {
    fn name(&self) -> &'static str {
        "Equalizer"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        use std::cmp::Ordering;
        match view.my_score().cmp(&view.opponent_score()) {
            Ordering::Greater => Action::Cooperate,
            Ordering::Less => Action::Defect,
            Ordering::Equal => view.opponent_last().unwrap_or(Action::Cooperate),
        }
    }
}

/// Memory-one rule with a cooperation probability per joint outcome of
/// the previous round.
pub struct CalibratedMemoryOne {
    after_cc: u8,
    after_cd: u8,
    after_dc: u8,
    after_dd: u8,
}

impl Default for CalibratedMemoryOne {
    fn default() -> Self {
        Self {
            after_cc: 90,
            after_cd: 30,
            after_dc: 60,
            after_dd: 20,
        }
    }
}

impl Strategy for CalibratedMemoryOne {
    fn name(&self) -> &'static str {
        "Calibrated Memory-One"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        let percent = match (view.my_last(), view.opponent_last()) {
            (None, _) | (_, None) => return Action::Cooperate,
            (Some(Action::Cooperate), Some(Action::Cooperate)) => self.after_cc,
            (Some(Action::Cooperate), Some(Action::Defect)) => self.after_cd,
            (Some(Action::Defect), Some(Action::Cooperate)) => self.after_dc,
            (Some(Action::Defect), Some(Action::Defect)) => self.after_dd,
        };
        if rng.chance(percent) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Opens C, D, C, C to read the opponent. A spotless record afterwards
/// is treated as exploitable; anything else gets Tit for Tat.
#[derive(Default)]
pub struct Detective;

impl Strategy for Detective {
    fn name(&self) -> &'static str {
        "Detective"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match view.round() {
            0 | 2 | 3 => Action::Cooperate,
            1 => Action::Defect,
            _ => {
                if view.opponent_defections() == 0 {
                    Action::Defect
                } else {
                    view.opponent_last().unwrap_or(Action::Cooperate)
                }
            }
        }
    }
}

/// Plays the opposite of the opponent's last move.
#[derive(Default)]
pub struct Contrarian;

impl Strategy for Contrarian {
    fn name(&self) -> &'static str {
        "Contrarian"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        view.opponent_last()
            .map(Action::flip)
            .unwrap_or(Action::Cooperate)
    }
}

/// Copies the opponent 70% of the time, flips a coin otherwise.
#[derive(Default)]
pub struct FickleFollower;

impl Strategy for FickleFollower {
    fn name(&self) -> &'static str {
        "Fickle Follower"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        if rng.chance(70) {
            view.opponent_last().unwrap_or(Action::Cooperate)
        } else if rng.coin_flip() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Carries a budget of eight retaliations per match; once spent, it
/// cooperates no matter what.
#[derive(Default)]
pub struct BudgetDefector {
    spent: u32,
}

impl Strategy for BudgetDefector {
    fn name(&self) -> &'static str {
        "Budget Defector"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) && self.spent < 8 {
            self.spent += 1;
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Tit for Tat up to the midpoint (half an announced match, round 20
/// otherwise), Pavlov after.
#[derive(Default)]
pub struct MidpointSwitcher;

impl Strategy for MidpointSwitcher {
    fn name(&self) -> &'static str {
        "Midpoint Switcher"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let midpoint = view.expected_length().map(|len| len / 2).unwrap_or(20);
        if view.round() < midpoint {
            view.opponent_last().unwrap_or(Action::Cooperate)
        } else {
            match view.my_last_payoff() {
                None => Action::Cooperate,
                Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Cooperate),
                Some(_) => view.my_last().map(Action::flip).unwrap_or(Action::Cooperate),
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Impression {
    Mirror,
    Grudge,
}

/// Forms a permanent opinion from the opponent's first three moves:
/// mostly cooperative earns a mirror, otherwise a grudge.
#[derive(Default)]
pub struct FirstImpressions {
    mode: Option<Impression>,
}

impl Strategy for FirstImpressions {
    fn name(&self) -> &'static str {
        "First Impressions"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() < 3 {
            return Action::Cooperate;
        }
        let mode = *self.mode.get_or_insert_with(|| {
            let early_coops = view
                .opponent_history()
                .iter()
                .take(3)
                .filter(|a| a.is_cooperate())
                .count();
            if early_coops >= 2 {
                Impression::Mirror
            } else {
                Impression::Grudge
            }
        });
        match mode {
            Impression::Mirror => view.opponent_last().unwrap_or(Action::Cooperate),
            Impression::Grudge => Action::Defect,
        }
    }
}

/// Weighs defections half again as heavily as cooperations and
/// cooperates while the balance stays non-negative.
#[derive(Default)]
pub struct Thermostat;

impl Strategy for Thermostat {
    fn name(&self) -> &'static str {
        "Thermostat"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if 2 * view.opponent_cooperations() >= 3 * view.opponent_defections() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Mirrors, but refuses to repeat its own move five times: four
/// identical moves in a row force the opposite.
#[derive(Default)]
pub struct StreakBreaker;

impl Strategy for StreakBreaker {
    fn name(&self) -> &'static str {
        "Streak Breaker"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_defection_streak() >= 4 {
            Action::Cooperate
        } else if view.my_cooperation_streak() >= 4 {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Detects the two-round echo deadlock Tit for Tat falls into and breaks
/// it with two cooperations.
#[derive(Default)]
pub struct DeadlockBreaker {
    calming: u8,
}

impl Strategy for DeadlockBreaker {
    fn name(&self) -> &'static str {
        "Deadlock Breaker"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if self.calming > 0 {
            self.calming -= 1;
            return Action::Cooperate;
        }
        let echo = match (
            view.my_nth_back(0),
            view.opponent_nth_back(0),
            view.my_nth_back(1),
            view.opponent_nth_back(1),
        ) {
            (Some(m0), Some(o0), Some(m1), Some(o1)) => m0 != o0 && m1 != o1 && m0 != m1,
            _ => false,
        };
        if echo {
            self.calming = 1;
            return Action::Cooperate;
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Grim trigger with an unreliable memory: each round after triggering
/// there is an 8% chance the grudge is forgotten.
#[derive(Default)]
pub struct NoisyGrim {
    triggered: bool,
}

impl Strategy for NoisyGrim {
    fn name(&self) -> &'static str {
        "Noisy Grim"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) {
            self.triggered = true;
        }
        if self.triggered && rng.chance(8) {
            self.triggered = false;
        }
        if self.triggered {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Cooperation judged on a weighted record: the last five rounds count
/// double against everything earlier.
#[derive(Default)]
pub struct WeightedHistorian;

impl Strategy for WeightedHistorian {
    fn name(&self) -> &'static str {
        "Weighted Historian"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let len = view.opponent_history().len() as u32;
        if len == 0 {
            return Action::Cooperate;
        }
        let recent_len = len.min(5);
        let recent_coops = view.opponent_cooperations_in_last(5);
        let older_coops = view.opponent_cooperations() - recent_coops;
        let weighted = 2 * recent_coops + older_coops;
        let total = 2 * recent_len + (len - recent_len);
        if 2 * weighted >= total {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Ten rounds of goodwill, twenty of mirroring, then pure noise.
#[derive(Default)]
pub struct ThreePhases;

impl Strategy for ThreePhases {
    fn name(&self) -> &'static str {
        "Three Phases"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        match view.round() {
            0..=9 => Action::Cooperate,
            10..=29 => view.opponent_last().unwrap_or(Action::Cooperate),
            _ => {
                if rng.coin_flip() {
                    Action::Cooperate
                } else {
                    Action::Defect
                }
            }
        }
    }
}

/// Mirrors, except for a single defection on the last round of an
/// announced match.
#[derive(Default)]
pub struct FinalRoundDefector;

impl Strategy for FinalRoundDefector {
    fn name(&self) -> &'static str {
        "Final Round Defector"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.rounds_remaining() == Some(1) {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Counts the opponent's move-to-move transitions and plays whatever it
/// predicts they will play next.
#[derive(Default)]
pub struct BigramPredictor;

impl Strategy for BigramPredictor {
    fn name(&self) -> &'static str {
        "Bigram Predictor"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let opp = view.opponent_history();
        let last = match opp.last() {
            Some(a) => *a,
            None => return Action::Cooperate,
        };
        let mut to_coop = 0u32;
        let mut to_defect = 0u32;
        for pair in opp.windows(2) {
            if pair[0] == last {
                match pair[1] {
                    Action::Cooperate => to_coop += 1,
                    Action::Defect => to_defect += 1,
                }
            }
        }
        if to_defect > to_coop {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Every five rounds, compares its historical average payoff per action
/// and commits to the better one for the next stretch.
#[derive(Default)]
pub struct PayoffSeeker {
    choice: Option<Action>,
}

impl PayoffSeeker {
    fn best_action(view: &MatchView<'_>) -> Action {
        let mut coop = (0u32, 0u32); // (total payoff, rounds)
        let mut defect = (0u32, 0u32);
        for (mine, theirs) in view.my_history().iter().zip(view.opponent_history()) {
            let earned = u32::from(payoff(*mine, *theirs).0);
            match mine {
                Action::Cooperate => {
                    coop.0 += earned;
                    coop.1 += 1;
                }
                Action::Defect => {
                    defect.0 += earned;
                    defect.1 += 1;
                }
            }
        }
        if coop.1 == 0 || defect.1 == 0 {
            return Action::Cooperate;
        }
        // Compare means without dividing: a/b >= c/d <=> a*d >= c*b
        if u64::from(coop.0) * u64::from(defect.1) >= u64::from(defect.0) * u64::from(coop.1) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

impl Strategy for PayoffSeeker {
    fn name(&self) -> &'static str {
        "Payoff Seeker"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 5 == 0 || self.choice.is_none() {
            self.choice = Some(Self::best_action(view));
        }
        self.choice.unwrap_or(Action::Cooperate)
    }
}

/// Majority vote over the opponent's last three moves.
#[derive(Default)]
pub struct RecentMajority;

impl Strategy for RecentMajority {
    fn name(&self) -> &'static str {
        "Recent Majority"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_history().len() < 3 {
            Action::Cooperate
        } else if view.opponent_cooperations_in_last(3) >= 2 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// One cooperation, then a defection run that grows by one each cycle.
pub struct LengtheningCycle {
    pos: u32,
    cycle_len: u32,
}

impl Default for LengtheningCycle {
    fn default() -> Self {
        Self { pos: 0, cycle_len: 1 }
    }
}

impl Strategy for LengtheningCycle {
    fn name(&self) -> &'static str {
        "Lengthening Cycle"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, _view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let action = if self.pos == 0 {
            Action::Cooperate
        } else {
            Action::Defect
        };
        self.pos += 1;
        if self.pos > self.cycle_len {
            self.pos = 0;
            self.cycle_len += 1;
        }
        action
    }
}

/// Cooperates when round number plus opponent defections is even.
#[derive(Default)]
pub struct ParityPlayer;

impl Strategy for ParityPlayer {
    fn name(&self) -> &'static str {
        "Parity Player"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if (view.round() + view.opponent_defections()) % 2 == 0 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Win-stay lose-shift against a moving bar: a round counts as a win if
/// it paid at least the match average so far.
#[derive(Default)]
pub struct SlidingPavlov;

impl Strategy for SlidingPavlov {
    fn name(&self) -> &'static str {
        "Sliding Pavlov"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let round = view.round();
        let last = match view.my_last_payoff() {
            Some(p) => p,
            None => return Action::Cooperate,
        };
        let average = f64::from(view.my_score()) / f64::from(round.max(1));
        if f64::from(last) >= average {
            view.my_last().unwrap_or(Action::Cooperate)
        } else {
            view.my_last().map(Action::flip).unwrap_or(Action::Cooperate)
        }
    }
}

/// Pavlov that shrugs on a loss: instead of switching deterministically,
/// it flips a coin.
#[derive(Default)]
pub struct CoinPavlov;

impl Strategy for CoinPavlov {
    fn name(&self) -> &'static str {
        "Coin Pavlov"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        match view.my_last_payoff() {
            None => Action::Cooperate,
            Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Cooperate),
            Some(_) => {
                if rng.coin_flip() {
                    Action::Cooperate
                } else {
                    Action::Defect
                }
            }
        }
    }
}

/// Alternates decision rules by round parity: mirrors on even rounds,
/// plays win-stay lose-shift on odd ones.
#[derive(Default)]
pub struct Hedger;

impl Strategy for Hedger {
    fn name(&self) -> &'static str {
        "Hedger"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 2 == 0 {
            view.opponent_last().unwrap_or(Action::Cooperate)
        } else {
            match view.my_last_payoff() {
                None => Action::Cooperate,
                Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Cooperate),
                Some(_) => view.my_last().map(Action::flip).unwrap_or(Action::Cooperate),
            }
        }
    }
}

/// Sorts opponents into bands by cooperation rate once six rounds are
/// in: reliable partners get cooperation, chronic defectors get
/// defection, everyone else gets mirrored.
#[derive(Default)]
pub struct RateBander;

impl Strategy for RateBander {
    fn name(&self) -> &'static str {
        "Rate Bander"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() > 5 {
            let rate = view.opponent_cooperation_rate();
            if rate > 0.7 {
                return Action::Cooperate;
            }
            if rate < 0.3 {
                return Action::Defect;
            }
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Keeps its own record balanced: cooperates only while its
/// cooperations do not outnumber its defections.
#[derive(Default)]
pub struct SelfBalancer;

impl Strategy for SelfBalancer {
    fn name(&self) -> &'static str {
        "Self Balancer"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Neutral
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_cooperations() <= view.my_defections() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

pub(crate) const ENTRIES: &[Entry] = &[
    Entry::new::<RandomCoin>("Random", "Fair coin every round."),
    Entry::new::<Alternator>("Alternator", "Alternates starting with cooperation."),
    Entry::new::<GrimTrigger>("Grim Trigger", "One betrayal means permanent defection."),
    Entry::new::<Pavlov>("Pavlov", "Win-stay lose-shift."),
    Entry::new::<Gradual>(
        "Gradual",
        "Retaliation that escalates with each offense, then settles.",
    ),
    Entry::new::<NoisyTitForTat>("Noisy Tit for Tat", "Mirrors with a 5% tremble."),
    Entry::new::<WindowMajority>(
        "Window Majority",
        "Plays the opponent's most common move of the last five.",
    ),
    Entry::new::<CyclerCcd>("Cycler CCD", "Repeats C, C, D."),
    Entry::new::<MirrorRate>(
        "Mirror Rate",
        "Cooperates at exactly the opponent's cooperation rate.",
    ),
    Entry::new::<Equalizer>("Equalizer", "Plays to keep the scores level."),
    Entry::new::<CalibratedMemoryOne>(
        "Calibrated Memory-One",
        "Probabilistic response to the previous joint outcome.",
    ),
    Entry::new::<Detective>(
        "Detective",
        "A four-move opening book sorts mirrors from marks.",
    ),
    Entry::new::<Contrarian>("Contrarian", "Plays the opposite of the opponent's last move."),
    Entry::new::<FickleFollower>(
        "Fickle Follower",
        "Copies the opponent 70% of the time, flips a coin otherwise.",
    ),
    Entry::new::<BudgetDefector>(
        "Budget Defector",
        "Eight retaliations per match, then unconditional cooperation.",
    ),
    Entry::new::<MidpointSwitcher>(
        "Midpoint Switcher",
        "Tit for Tat in the first half, Pavlov in the second.",
    ),
    Entry::new::<FirstImpressions>(
        "First Impressions",
        "Locks a mirror-or-grudge opinion after three rounds.",
    ),
    Entry::new::<Thermostat>(
        "Thermostat",
        "Weighted balance of the record decides each round.",
    ),
    Entry::new::<StreakBreaker>(
        "Streak Breaker",
        "Mirrors, but never repeats itself five times.",
    ),
    Entry::new::<DeadlockBreaker>(
        "Deadlock Breaker",
        "Breaks Tit for Tat echo loops with two cooperations.",
    ),
    Entry::new::<NoisyGrim>("Noisy Grim", "Grim trigger that sometimes forgets."),
    Entry::new::<WeightedHistorian>(
        "Weighted Historian",
        "Recent rounds count double in the cooperation vote.",
    ),
    Entry::new::<ThreePhases>(
        "Three Phases",
        "Goodwill, then mirroring, then noise.",
    ),
    Entry::new::<FinalRoundDefector>(
        "Final Round Defector",
        "Mirrors, except for the known final round.",
    ),
    Entry::new::<BigramPredictor>(
        "Bigram Predictor",
        "Plays its prediction of the opponent's next move.",
    ),
    Entry::new::<PayoffSeeker>(
        "Payoff Seeker",
        "Commits to whichever action has paid better, reviewed every five rounds.",
    ),
    Entry::new::<RecentMajority>(
        "Recent Majority",
        "Majority vote over the opponent's last three moves.",
    ),
    Entry::new::<LengtheningCycle>(
        "Lengthening Cycle",
        "A defection run that grows by one each cycle.",
    ),
    Entry::new::<ParityPlayer>(
        "Parity Player",
        "Round parity plus opponent defections picks the move.",
    ),
    Entry::new::<SlidingPavlov>(
        "Sliding Pavlov",
        "Win-stay lose-shift against the match average.",
    ),
    Entry::new::<CoinPavlov>("Coin Pavlov", "Pavlov that flips a coin on a loss."),
    Entry::new::<Hedger>("Hedger", "Mirrors on even rounds, Pavlov on odd."),
    Entry::new::<RateBander>(
        "Rate Bander",
        "Bands opponents by cooperation rate after six rounds.",
    ),
    Entry::new::<SelfBalancer>(
        "Self Balancer",
        "Keeps its own cooperation rate pinned near one half.",
    ),
];
