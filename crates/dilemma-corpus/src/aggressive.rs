//! Aggressive strategies: defection, probing and exploitation.
//!
//! Most rules here open with defection or hunt for exploitable
//! cooperation; a few are fair-weather mirrors that turn nasty when the
//! numbers favor it.

use dilemma_engine::{Action, Attitude, MatchView, SeededRng, Strategy};

use crate::registry::Entry;

/// Never cooperates.
#[derive(Default)]
pub struct AlwaysDefect;

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

/// Tit for Tat that opens with a defection.
#[derive(Default)]
pub struct SuspiciousTitForTat;

impl Strategy for SuspiciousTitForTat {
    fn name(&self) -> &'static str {
        "Suspicious Tit for Tat"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        view.opponent_last().unwrap_or(Action::Defect)
    }
}

/// Opens hostile and holds a permanent grudge: defects first, cooperates
/// only while the opponent has a spotless record.
#[derive(Default)]
pub struct GrimPredator;

impl Strategy for GrimPredator {
    fn name(&self) -> &'static str {
        "Grim Predator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.is_first_round() || view.opponent_defections() > 0 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Pushes until pushed back: defects until the opponent retaliates once,
/// then settles into mirroring.
#[derive(Default)]
pub struct Bully;

impl Strategy for Bully {
    fn name(&self) -> &'static str {
        "Bully"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections() == 0 {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Defect)
        }
    }
}

/// Opens D, C, C. If the opponent let the probe pass unanswered, exploits
/// forever; otherwise falls back to Tit for Tat.
#[derive(Default)]
pub struct Prober;

impl Strategy for Prober {
    fn name(&self) -> &'static str {
        "Prober"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match view.round() {
            0 => Action::Defect,
            1 | 2 => Action::Cooperate,
            _ => {
                let opp = view.opponent_history();
                let unanswered = opp.get(1) == Some(&Action::Cooperate)
                    && opp.get(2) == Some(&Action::Cooperate);
                if unanswered {
                    Action::Defect
                } else {
                    view.opponent_last().unwrap_or(Action::Cooperate)
                }
            }
        }
    }
}

/// Mirrors faithfully until the final two rounds of an announced match,
/// then defects.
#[derive(Default)]
pub struct Backstabber;

impl Strategy for Backstabber {
    fn name(&self) -> &'static str {
        "Backstabber"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if let Some(remaining) = view.rounds_remaining() {
            if remaining <= 2 {
                return Action::Defect;
            }
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Builds goodwill for the first half, then defects to the end. Assumes
/// round 15 as the midpoint when no length is announced.
#[derive(Default)]
pub struct LateBetrayer;

impl Strategy for LateBetrayer {
    fn name(&self) -> &'static str {
        "Late Betrayer"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let midpoint = view.expected_length().map(|len| len / 2).unwrap_or(15);
        if view.round() >= midpoint {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Repeating D, D, C.
#[derive(Default)]
pub struct PeriodicPredator;

impl Strategy for PeriodicPredator {
    fn name(&self) -> &'static str {
        "Periodic Predator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 3 < 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Defects three rounds out of four at random.
#[derive(Default)]
pub struct RandomAggressor;

impl Strategy for RandomAggressor {
    fn name(&self) -> &'static str {
        "Random Aggressor"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, _view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        if rng.chance(25) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Cashes in on trust: punches whenever the opponent has cooperated
/// three rounds running, mirrors otherwise.
#[derive(Default)]
pub struct StreakPuncher;

impl Strategy for StreakPuncher {
    fn name(&self) -> &'static str {
        "Streak Puncher"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_cooperation_streak() >= 3 {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Two defections owed for every one received.
#[derive(Default)]
pub struct VengefulMirror {
    debt: u32,
}

impl Strategy for VengefulMirror {
    fn name(&self) -> &'static str {
        "Vengeful Mirror"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) {
            self.debt += 2;
        }
        if self.debt > 0 {
            self.debt -= 1;
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Five rounds of charm, then permanent defection.
#[derive(Default)]
pub struct TwoFaced;

impl Strategy for TwoFaced {
    fn name(&self) -> &'static str {
        "Two-Faced"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() < 5 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Presses any advantage: defects while ahead on points, mirrors
/// otherwise.
#[derive(Default)]
pub struct ScoreBully;

impl Strategy for ScoreBully {
    fn name(&self) -> &'static str {
        "Score Bully"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_score() > view.opponent_score() {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Alternates starting with defection.
#[derive(Default)]
pub struct SlyAlternator;

impl Strategy for SlyAlternator {
    fn name(&self) -> &'static str {
        "Sly Alternator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 2 == 0 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Three cold opening defections, then Tit for Tat.
#[derive(Default)]
pub struct ColdOpener;

impl Strategy for ColdOpener {
    fn name(&self) -> &'static str {
        "Cold Opener"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() < 3 {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Defect)
        }
    }
}

/// Defects whenever opponent defections at least tie their cooperations.
/// The empty record counts as a tie.
#[derive(Default)]
pub struct HardMajority;

impl Strategy for HardMajority {
    fn name(&self) -> &'static str {
        "Hard Majority"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections() >= view.opponent_cooperations() {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Win-stay lose-shift, opening with a defection.
#[derive(Default)]
pub struct PavlovBully;

impl Strategy for PavlovBully {
    fn name(&self) -> &'static str {
        "Pavlov Bully"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match view.my_last_payoff() {
            None => Action::Defect,
            Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Defect),
            Some(_) => view.my_last().map(Action::flip).unwrap_or(Action::Defect),
        }
    }
}

/// Any defection in the opponent's last five moves keeps it defecting.
#[derive(Default)]
pub struct ShortFuse;

impl Strategy for ShortFuse {
    fn name(&self) -> &'static str {
        "Short Fuse"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections_in_last(5) > 0 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Plays Soft Majority until the closing stretch (the final tenth of an
/// announced match, or past round 40), then defects.
#[derive(Default)]
pub struct EndgameOpportunist;

impl Strategy for EndgameOpportunist {
    fn name(&self) -> &'static str {
        "Endgame Opportunist"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match (view.rounds_remaining(), view.expected_length()) {
            (Some(remaining), Some(len)) if remaining <= len / 10 => return Action::Defect,
            (None, None) if view.round() >= 40 => return Action::Defect,
            _ => {}
        }
        if view.opponent_cooperations() >= view.opponent_defections() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Hunts doormats: once the opponent's cooperation rate tops 80% after
/// round five, it defects relentlessly.
#[derive(Default)]
pub struct HandshakeExploiter;

impl Strategy for HandshakeExploiter {
    fn name(&self) -> &'static str {
        "Handshake Exploiter"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() > 5 && view.opponent_cooperation_rate() > 0.8 {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Mirrors until it falls more than ten points behind, then flips the
/// table and defects for the rest of the match.
#[derive(Default)]
pub struct RageQuit {
    raging: bool,
}

impl Strategy for RageQuit {
    fn name(&self) -> &'static str {
        "Rage Quit"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_score() + 10 < view.opponent_score() {
            self.raging = true;
        }
        if self.raging {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Gradual with the forgiveness removed: the nth opponent defection buys
/// an n-round burst of retaliation, and bursts accumulate.
#[derive(Default)]
pub struct EscalatingRetaliator {
    defections_seen: u32,
    burst_left: u32,
}

impl Strategy for EscalatingRetaliator {
    fn name(&self) -> &'static str {
        "Escalating Retaliator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let total = view.opponent_defections();
        while self.defections_seen < total {
            self.defections_seen += 1;
            self.burst_left += self.defections_seen;
        }
        if self.burst_left > 0 {
            self.burst_left -= 1;
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Repeating D, D, C, C.
#[derive(Default)]
pub struct HitAndRun;

impl Strategy for HitAndRun {
    fn name(&self) -> &'static str {
        "Hit and Run"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 4 < 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Opens C, D, C to measure the response to a single probe. Retaliation
/// earns Tit for Tat; silence earns permanent defection.
#[derive(Default)]
pub struct ProbePunisher;

impl Strategy for ProbePunisher {
    fn name(&self) -> &'static str {
        "Probe Punisher"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match view.round() {
            0 => Action::Cooperate,
            1 => Action::Defect,
            2 => Action::Cooperate,
            _ => {
                let retaliated = view.opponent_history().get(2) == Some(&Action::Defect);
                if retaliated {
                    view.opponent_last().unwrap_or(Action::Cooperate)
                } else {
                    Action::Defect
                }
            }
        }
    }
}

/// Strikes whenever the opponent has cooperated twice running.
#[derive(Default)]
pub struct CautiousShark;

impl Strategy for CautiousShark {
    fn name(&self) -> &'static str {
        "Cautious Shark"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_cooperation_streak() >= 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Defects by default; when the opponent digs in with two straight
/// defections, feints a cooperation to reopen them.
#[derive(Default)]
pub struct FeintRetreat;

impl Strategy for FeintRetreat {
    fn name(&self) -> &'static str {
        "Feint and Retreat"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defection_streak() >= 2 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Defection odds scale with the score lead: 50% baseline, 5 points per
/// point of lead, clamped to [20%, 95%].
#[derive(Default)]
pub struct GreedyGambler;

impl Strategy for GreedyGambler {
    fn name(&self) -> &'static str {
        "Greedy Gambler"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        let lead = i64::from(view.my_score()) - i64::from(view.opponent_score());
        let percent = (50 + lead * 5).clamp(20, 95) as u8;
        if rng.chance(percent) {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Opens D, C, D, C. An opponent that never hit back during the
/// interrogation is exploited forever; anyone else gets Tit for Tat.
#[derive(Default)]
pub struct Interrogator;

impl Strategy for Interrogator {
    fn name(&self) -> &'static str {
        "Interrogator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match view.round() {
            0 | 2 => Action::Defect,
            1 | 3 => Action::Cooperate,
            _ => {
                let opp = view.opponent_history();
                let hit_back = opp.iter().take(4).skip(1).any(|a| *a == Action::Defect);
                if hit_back {
                    view.opponent_last().unwrap_or(Action::Cooperate)
                } else {
                    Action::Defect
                }
            }
        }
    }
}

/// Punishes forgiveness: a cooperation that immediately follows one of
/// its own defections marks an exploitable opponent.
#[derive(Default)]
pub struct ForgivenessHunter;

impl Strategy for ForgivenessHunter {
    fn name(&self) -> &'static str {
        "Forgiveness Hunter"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let forgave = view.my_nth_back(1) == Some(Action::Defect)
            && view.opponent_last() == Some(Action::Cooperate);
        if forgave {
            Action::Defect
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Memory-one extortion: concedes just often enough to keep a cooperator
/// on the hook.
#[derive(Default)]
pub struct Extortionist;

impl Strategy for Extortionist {
    fn name(&self) -> &'static str {
        "Extortionist"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        match (view.my_last(), view.opponent_last()) {
            (None, _) | (_, None) => Action::Defect,
            (Some(Action::Cooperate), Some(Action::Cooperate)) => {
                if rng.chance(40) {
                    Action::Defect
                } else {
                    Action::Cooperate
                }
            }
            (Some(Action::Cooperate), Some(Action::Defect)) => Action::Defect,
            (Some(Action::Defect), Some(Action::Cooperate)) => {
                if rng.chance(70) {
                    Action::Defect
                } else {
                    Action::Cooperate
                }
            }
            (Some(Action::Defect), Some(Action::Defect)) => {
                if rng.chance(30) {
                    Action::Cooperate
                } else {
                    Action::Defect
                }
            }
        }
    }
}

/// Scripted opening defections from a bitmask (rounds 0, 2 and 3), then
/// Tit for Tat.
#[derive(Default)]
pub struct OpeningBandit;

impl OpeningBandit {
    /// Bit n set = defect on round n.
    const MASK: u8 = 0b0000_1101;
}

impl Strategy for OpeningBandit {
    fn name(&self) -> &'static str {
        "Opening Bandit"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let round = view.round();
        if round < 8 && (Self::MASK >> round) & 1 == 1 {
            return Action::Defect;
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Random defection whose rate doubles every ten rounds: 10%, 20%, 40%,
/// then capped at 80%.
#[derive(Default)]
pub struct PressureCooker;

impl Strategy for PressureCooker {
    fn name(&self) -> &'static str {
        "Pressure Cooker"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        let step = (view.round() / 10).min(3);
        let percent = (10u32 << step) as u8;
        if rng.chance(percent) {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Waits out the opening, then punches any cooperation it sees.
#[derive(Default)]
pub struct SuckerPuncher;

impl Strategy for SuckerPuncher {
    fn name(&self) -> &'static str {
        "Sucker Puncher"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() >= 3 && view.opponent_last() == Some(Action::Cooperate) {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Defects three rounds out of every four on a fixed schedule.
#[derive(Default)]
pub struct Tollbooth;

impl Strategy for Tollbooth {
    fn name(&self) -> &'static str {
        "Tollbooth"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Aggressive
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 4 == 3 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

pub(crate) const ENTRIES: &[Entry] = &[
    Entry::new::<AlwaysDefect>("Always Defect", "Never cooperates."),
    Entry::new::<SuspiciousTitForTat>(
        "Suspicious Tit for Tat",
        "Mirrors, but opens with a defection.",
    ),
    Entry::new::<GrimPredator>(
        "Grim Predator",
        "Hostile opening plus a permanent grudge.",
    ),
    Entry::new::<Bully>("Bully", "Defects until the opponent hits back, then mirrors."),
    Entry::new::<Prober>(
        "Prober",
        "Probes with an early defection and exploits the meek.",
    ),
    Entry::new::<Backstabber>(
        "Backstabber",
        "Faithful mirror until the announced endgame.",
    ),
    Entry::new::<LateBetrayer>(
        "Late Betrayer",
        "Charming first half, treacherous second half.",
    ),
    Entry::new::<PeriodicPredator>("Periodic Predator", "Repeats D, D, C."),
    Entry::new::<RandomAggressor>("Random Aggressor", "Defects 75% of the time at random."),
    Entry::new::<StreakPuncher>(
        "Streak Puncher",
        "Punches three-round cooperation streaks, mirrors otherwise.",
    ),
    Entry::new::<VengefulMirror>(
        "Vengeful Mirror",
        "Repays every defection twice over.",
    ),
    Entry::new::<TwoFaced>("Two-Faced", "Five friendly rounds, then permanent defection."),
    Entry::new::<ScoreBully>("Score Bully", "Defects while ahead on points."),
    Entry::new::<SlyAlternator>("Sly Alternator", "Alternates starting with defection."),
    Entry::new::<ColdOpener>("Cold Opener", "Three opening defections, then Tit for Tat."),
    Entry::new::<HardMajority>(
        "Hard Majority",
        "Defects whenever defections at least tie cooperations.",
    ),
    Entry::new::<PavlovBully>("Pavlov Bully", "Win-stay lose-shift with a hostile opening."),
    Entry::new::<ShortFuse>(
        "Short Fuse",
        "Defects while any defection sits in the last five rounds.",
    ),
    Entry::new::<EndgameOpportunist>(
        "Endgame Opportunist",
        "Soft Majority until the closing stretch, then defection.",
    ),
    Entry::new::<HandshakeExploiter>(
        "Handshake Exploiter",
        "Turns on opponents who cooperate too reliably.",
    ),
    Entry::new::<RageQuit>(
        "Rage Quit",
        "Mirrors until ten points behind, then defects forever.",
    ),
    Entry::new::<EscalatingRetaliator>(
        "Escalating Retaliator",
        "Ever-longer retaliation bursts with no forgiveness.",
    ),
    Entry::new::<HitAndRun>("Hit and Run", "Repeats D, D, C, C."),
    Entry::new::<ProbePunisher>(
        "Probe Punisher",
        "One measured probe decides between mirroring and exploitation.",
    ),
    Entry::new::<CautiousShark>(
        "Cautious Shark",
        "Strikes two-round cooperation streaks.",
    ),
    Entry::new::<FeintRetreat>(
        "Feint and Retreat",
        "Defects by default, feints cooperation to reopen defenders.",
    ),
    Entry::new::<GreedyGambler>(
        "Greedy Gambler",
        "Defection odds scale with the score lead.",
    ),
    Entry::new::<Interrogator>(
        "Interrogator",
        "A four-round interrogation sorts mirrors from marks.",
    ),
    Entry::new::<ForgivenessHunter>(
        "Forgiveness Hunter",
        "Defects again the moment a defection is forgiven.",
    ),
    Entry::new::<Extortionist>(
        "Extortionist",
        "Memory-one extortion that concedes just enough.",
    ),
    Entry::new::<OpeningBandit>(
        "Opening Bandit",
        "Scripted opening defections from a bitmask, then mirrors.",
    ),
    Entry::new::<PressureCooker>(
        "Pressure Cooker",
        "Random defection rate that doubles every ten rounds.",
    ),
    Entry::new::<SuckerPuncher>(
        "Sucker Puncher",
        "Punches any cooperation once the opening is over.",
    ),
    Entry::new::<Tollbooth>("Tollbooth", "Defects three rounds of every four on schedule."),
];

#[cfg(test)]
mod tests {
    use super::*;

    const C: Action = Action::Cooperate;
    const D: Action = Action::Defect;

    fn rng() -> SeededRng {
        SeededRng::new(42)
    }

    fn view<'a>(my: &'a [Action], opp: &'a [Action]) -> MatchView<'a> {
        MatchView::new(my.len() as u32, my, opp, 0, 0, None)
    }

    #[test]
    fn test_always_defect() {
        let mut s = AlwaysDefect;
        for _ in 0..5 {
            assert_eq!(s.decide(&view(&[], &[]), &mut rng()), D);
        }
    }

    #[test]
    fn test_suspicious_tft_opens_hostile() {
        let mut s = SuspiciousTitForTat;
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[D], &[C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[D], &[D]), &mut rng()), D);
    }

    #[test]
    fn test_bully_stops_when_hit() {
        let mut s = Bully;
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[D], &[C]), &mut rng()), D);
        // Opponent retaliated: switch to mirroring
        assert_eq!(s.decide(&view(&[D, D], &[C, D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[D, D, D], &[C, D, C]), &mut rng()), C);
    }

    #[test]
    fn test_prober_exploits_the_meek() {
        let mut s = Prober::default();
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[D], &[C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[D, C], &[C, C]), &mut rng()), C);
        // No retaliation to the probe: exploit
        assert_eq!(s.decide(&view(&[D, C, C], &[C, C, C]), &mut rng()), D);
    }

    #[test]
    fn test_prober_respects_retaliation() {
        let mut s = Prober::default();
        // Opponent answered the probe with a defection at round 1
        assert_eq!(s.decide(&view(&[D, C, C], &[C, D, C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[D, C, C, C], &[C, D, C, D]), &mut rng()), D);
    }

    #[test]
    fn test_backstabber_endgame() {
        let mut s = Backstabber;
        let my = [C; 8];
        let opp = [C; 8];
        let v = MatchView::new(8, &my, &opp, 24, 24, Some(10));
        assert_eq!(s.decide(&v, &mut rng()), D);
        // Mid-match it mirrors
        let v = MatchView::new(5, &my[..5], &opp[..5], 15, 15, Some(10));
        assert_eq!(s.decide(&v, &mut rng()), C);
    }

    #[test]
    fn test_vengeful_mirror_double_repayment() {
        let mut s = VengefulMirror::default();
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[C, D], &[D, C]), &mut rng()), D);
        // Debt settled
        assert_eq!(s.decide(&view(&[C, D, D], &[D, C, C]), &mut rng()), C);
    }

    #[test]
    fn test_hard_majority_defects_on_tie() {
        let mut s = HardMajority;
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[D, D], &[C, C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[D, D], &[C, D]), &mut rng()), D);
    }

    #[test]
    fn test_escalating_retaliator_bursts_grow() {
        let mut s = EscalatingRetaliator::default();
        // First defection: one-round burst
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[C, D], &[D, C]), &mut rng()), C);
        // Second defection: two-round burst
        assert_eq!(s.decide(&view(&[C, D, C], &[D, C, D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[C, D, C, D], &[D, C, D, C]), &mut rng()), D);
        assert_eq!(
            s.decide(&view(&[C, D, C, D, D], &[D, C, D, C, C]), &mut rng()),
            C
        );
    }

    #[test]
    fn test_interrogator_sorts_opponents() {
        let mut meek = Interrogator::default();
        assert_eq!(meek.decide(&view(&[], &[]), &mut rng()), D);
        assert_eq!(meek.decide(&view(&[D], &[C]), &mut rng()), C);
        assert_eq!(meek.decide(&view(&[D, C], &[C, C]), &mut rng()), D);
        assert_eq!(meek.decide(&view(&[D, C, D], &[C, C, C]), &mut rng()), C);
        // Never hit back: exploit
        assert_eq!(
            meek.decide(&view(&[D, C, D, C], &[C, C, C, C]), &mut rng()),
            D
        );

        let mut wary = Interrogator::default();
        // Retaliation at round 2: mirror from round 4 on
        assert_eq!(
            wary.decide(&view(&[D, C, D, C], &[C, C, D, C]), &mut rng()),
            C
        );
    }

    #[test]
    fn test_forgiveness_hunter() {
        let mut s = ForgivenessHunter;
        // I defected two rounds ago, opponent still cooperated last round
        assert_eq!(s.decide(&view(&[D, C], &[C, C]), &mut rng()), D);
        // Opponent retaliated instead: mirror
        assert_eq!(s.decide(&view(&[D, C], &[C, D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[C, C], &[C, C]), &mut rng()), C);
    }

    #[test]
    fn test_opening_bandit_mask() {
        let mut s = OpeningBandit::default();
        let opp = [C; 8];
        let my = [C; 8];
        let expected = [D, C, D, D, C, C, C, C];
        for (round, want) in expected.iter().enumerate() {
            let v = MatchView::new(round as u32, &my[..round], &opp[..round], 0, 0, None);
            assert_eq!(s.decide(&v, &mut rng()), *want, "round {}", round);
        }
    }

    #[test]
    fn test_two_faced_turns() {
        let mut s = TwoFaced;
        assert_eq!(s.decide(&view(&[C; 4], &[C; 4]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C; 5], &[C; 5]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[C; 20], &[C; 20]), &mut rng()), D);
    }

    #[test]
    fn test_rage_quit_is_permanent() {
        let mut s = RageQuit::default();
        let my = [C, C];
        let opp = [C, C];
        let v = MatchView::new(2, &my, &opp, 0, 12, None);
        assert_eq!(s.decide(&v, &mut rng()), D);
        // Even after the gap closes, the rage holds
        let v = MatchView::new(2, &my, &opp, 12, 12, None);
        assert_eq!(s.decide(&v, &mut rng()), D);
    }

    #[test]
    fn test_tollbooth_schedule() {
        let mut s = Tollbooth;
        let acts: Vec<Action> = (0..8u32)
            .map(|round| {
                let v = MatchView::new(round, &[], &[], 0, 0, None);
                s.decide(&v, &mut rng())
            })
            .collect();
        assert_eq!(acts, vec![D, D, D, C, D, D, D, C]);
    }
}
