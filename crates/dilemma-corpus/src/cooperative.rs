//! Cooperative strategies: trust, forgiveness and reciprocity.
//!
//! Everything here opens with cooperation (or close to it) and defects
//! only in response to opponent behavior.

use dilemma_engine::{Action, Attitude, MatchView, SeededRng, Strategy};

use crate::registry::Entry;

/// Never defects.
#[derive(Default)]
pub struct AlwaysCooperate;

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

/// Copies the opponent's last move. Starts by cooperating.
#[derive(Default)]
pub struct TitForTat;

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

/// Retaliates only after two consecutive opponent defections.
#[derive(Default)]
pub struct TitForTwoTats;

impl Strategy for TitForTwoTats {
    fn name(&self) -> &'static str {
        "Tit for Two Tats"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defection_streak() >= 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Tit for Tat that forgives a defection 30% of the time.
#[derive(Default)]
pub struct GenerousTitForTat;

impl Strategy for GenerousTitForTat {
    fn name(&self) -> &'static str {
        "Generous Tit for Tat"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        match view.opponent_last() {
            Some(Action::Defect) => {
                if rng.chance(30) {
                    Action::Cooperate
                } else {
                    Action::Defect
                }
            }
            _ => Action::Cooperate,
        }
    }
}

/// Tit for Tat that apologizes after an unprovoked defection of its own:
/// two cooperations before resuming the mirror.
#[derive(Default)]
pub struct ContriteTitForTat {
    apology_left: u8,
}

impl Strategy for ContriteTitForTat {
    fn name(&self) -> &'static str {
        "Contrite Tit for Tat"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if self.apology_left > 0 {
            self.apology_left -= 1;
            return Action::Cooperate;
        }
        if view.my_last() == Some(Action::Defect) && view.opponent_last() == Some(Action::Cooperate)
        {
            self.apology_left = 1;
            return Action::Cooperate;
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Grim trigger with slack: tolerates two unforgiven defections, and a
/// run of three opponent cooperations wipes the slate.
#[derive(Default)]
pub struct ForgivingGrim {
    unforgiven: u32,
}

impl Strategy for ForgivingGrim {
    fn name(&self) -> &'static str {
        "Forgiving Grim"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) {
            self.unforgiven += 1;
        }
        if self.unforgiven > 0 && view.opponent_cooperation_streak() >= 3 {
            self.unforgiven = 0;
        }
        if self.unforgiven > 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Cooperates unconditionally for the first five rounds, then mirrors.
#[derive(Default)]
pub struct PatientGrudger;

impl Strategy for PatientGrudger {
    fn name(&self) -> &'static str {
        "Patient Grudger"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() < 5 {
            Action::Cooperate
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Defects only after being suckered (cooperated into a defection).
#[derive(Default)]
pub struct FirmButFair;

impl Strategy for FirmButFair {
    fn name(&self) -> &'static str {
        "Firm but Fair"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        match (view.my_last(), view.opponent_last()) {
            (Some(Action::Cooperate), Some(Action::Defect)) => Action::Defect,
            _ => Action::Cooperate,
        }
    }
}

/// Turns the other cheek twice; from the third opponent defection
/// onwards it mirrors.
#[derive(Default)]
pub struct SlowToAnger;

impl Strategy for SlowToAnger {
    fn name(&self) -> &'static str {
        "Slow to Anger"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections() >= 3 {
            view.opponent_last().unwrap_or(Action::Cooperate)
        } else {
            Action::Cooperate
        }
    }
}

/// Treats isolated defections as noise: retaliates only when two of the
/// opponent's last three moves were defections.
#[derive(Default)]
pub struct NoisePardoner;

impl Strategy for NoisePardoner {
    fn name(&self) -> &'static str {
        "Noise Pardoner"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections_in_last(3) >= 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Mirrors, but after three rounds of mutual defection extends an olive
/// branch of two cooperations.
#[derive(Default)]
pub struct PeaceOffer {
    olive_left: u8,
}

impl Strategy for PeaceOffer {
    fn name(&self) -> &'static str {
        "Peace Offer"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if self.olive_left > 0 {
            self.olive_left -= 1;
            return Action::Cooperate;
        }
        if view.my_defection_streak() >= 3 && view.opponent_defection_streak() >= 3 {
            self.olive_left = 1;
            return Action::Cooperate;
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Three rounds of unconditional goodwill, then Tit for Two Tats.
#[derive(Default)]
pub struct TrustBuilder;

impl Strategy for TrustBuilder {
    fn name(&self) -> &'static str {
        "Trust Builder"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() < 3 || view.opponent_defection_streak() < 2 {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Cooperates while the opponent's cooperations outnumber (or tie) their
/// defections.
#[derive(Default)]
pub struct SoftMajority;

impl Strategy for SoftMajority {
    fn name(&self) -> &'static str {
        "Soft Majority"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_cooperations() >= view.opponent_defections() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Win-stay lose-shift, except a lost round is forgiven 20% of the time.
#[derive(Default)]
pub struct GenerousPavlov;

impl Strategy for GenerousPavlov {
    fn name(&self) -> &'static str {
        "Generous Pavlov"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        match view.my_last_payoff() {
            None => Action::Cooperate,
            Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Cooperate),
            Some(_) => {
                if rng.chance(20) {
                    Action::Cooperate
                } else {
                    view.my_last().map(Action::flip).unwrap_or(Action::Cooperate)
                }
            }
        }
    }
}

/// Grim trigger with one pardon: the first trigger clears as soon as the
/// opponent cooperates again, the second is permanent.
#[derive(Default)]
pub struct SecondChance {
    strikes: u8,
    triggered: bool,
}

impl Strategy for SecondChance {
    fn name(&self) -> &'static str {
        "Second Chance"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) && !self.triggered {
            self.strikes += 1;
            self.triggered = true;
        }
        if self.triggered && self.strikes == 1 && view.opponent_last() == Some(Action::Cooperate) {
            self.triggered = false;
        }
        if self.triggered {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Tit for Tat with a standing appointment: every eighth round is an
/// unconditional cooperation.
#[derive(Default)]
pub struct OliveBranchCycle;

impl Strategy for OliveBranchCycle {
    fn name(&self) -> &'static str {
        "Olive Branch"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() % 8 == 7 {
            Action::Cooperate
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// After a defection, pardons with probability equal to the opponent's
/// overall cooperation rate.
#[derive(Default)]
pub struct ProportionalPardon;

impl Strategy for ProportionalPardon {
    fn name(&self) -> &'static str {
        "Proportional Pardon"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) {
            if rng.next_f64() < view.opponent_cooperation_rate() {
                Action::Cooperate
            } else {
                Action::Defect
            }
        } else {
            Action::Cooperate
        }
    }
}

/// Cooperation chance grows with the opponent's current run of
/// cooperations: 50% baseline plus 10 points per streak round.
#[derive(Default)]
pub struct GratefulReciprocator;

impl Strategy for GratefulReciprocator {
    fn name(&self) -> &'static str {
        "Grateful Reciprocator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, rng: &mut SeededRng) -> Action {
        let percent = (50 + 10 * view.opponent_cooperation_streak()).min(100) as u8;
        if rng.chance(percent) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Content while within five points of the opponent; mirrors once the
/// gap opens wider.
#[derive(Default)]
pub struct LenientScorer;

impl Strategy for LenientScorer {
    fn name(&self) -> &'static str {
        "Lenient Scorer"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_score() + 5 >= view.opponent_score() {
            Action::Cooperate
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Judges only the recent past: defects when three of the opponent's
/// last five moves were defections.
#[derive(Default)]
pub struct WindowForgiver;

impl Strategy for WindowForgiver {
    fn name(&self) -> &'static str {
        "Window Forgiver"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections_in_last(5) >= 3 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Mirrors, but breaks a mutual defection immediately with cooperation.
#[derive(Default)]
pub struct EagerPeacemaker;

impl Strategy for EagerPeacemaker {
    fn name(&self) -> &'static str {
        "Eager Peacemaker"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_last() == Some(Action::Defect) && view.opponent_last() == Some(Action::Defect) {
            Action::Cooperate
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Mirrors the opponent but refuses to defect twice in a row.
#[derive(Default)]
pub struct ApologeticMimic;

impl Strategy for ApologeticMimic {
    fn name(&self) -> &'static str {
        "Apologetic Mimic"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_last() == Some(Action::Defect) {
            Action::Cooperate
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// Cooperates no matter what, unless the opponent has defected more than
/// three quarters of the time past round ten.
#[derive(Default)]
pub struct SaintWithLimits;

impl Strategy for SaintWithLimits {
    fn name(&self) -> &'static str {
        "Saint with Limits"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() > 10 && view.opponent_cooperation_rate() < 0.25 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Unconditional cooperation for the opening stretch (a quarter of an
/// announced match, five rounds otherwise), then Soft Majority.
#[derive(Default)]
pub struct InitialGoodwill;

impl Strategy for InitialGoodwill {
    fn name(&self) -> &'static str {
        "Initial Goodwill"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let grace = view.expected_length().map(|len| len / 4).unwrap_or(5).max(1);
        if view.round() < grace || view.opponent_cooperations() >= view.opponent_defections() {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Repays each opponent defection with exactly one defection, then
/// returns to cooperation.
#[derive(Default)]
pub struct MeasuredAvenger {
    debt: u32,
}

impl Strategy for MeasuredAvenger {
    fn name(&self) -> &'static str {
        "Measured Avenger"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Defect) {
            self.debt += 1;
        }
        if self.debt > 0 {
            self.debt -= 1;
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Cooperates while averaging at least two points per round; mirrors
/// when income dips below that.
#[derive(Default)]
pub struct ContentCooperator;

impl Strategy for ContentCooperator {
    fn name(&self) -> &'static str {
        "Content Cooperator"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.my_score() >= 2 * view.round() {
            Action::Cooperate
        } else {
            view.opponent_last().unwrap_or(Action::Cooperate)
        }
    }
}

/// A pacifist with a single prod: after five straight opponent
/// defections it defects once, then goes back to cooperating.
#[derive(Default)]
pub struct PacifistProdder {
    prodded: bool,
}

impl Strategy for PacifistProdder {
    fn name(&self) -> &'static str {
        "Pacifist Prodder"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_last() == Some(Action::Cooperate) {
            self.prodded = false;
        }
        if view.opponent_defection_streak() >= 5 && !self.prodded {
            self.prodded = true;
            return Action::Defect;
        }
        Action::Cooperate
    }
}

/// Copies the opponent's move from two rounds back.
#[derive(Default)]
pub struct DelayedMirror;

impl Strategy for DelayedMirror {
    fn name(&self) -> &'static str {
        "Delayed Mirror"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        view.opponent_nth_back(1).unwrap_or(Action::Cooperate)
    }
}

/// Defects only once the opponent's defection rate climbs past 60%,
/// judged from round four on.
#[derive(Default)]
pub struct ForgivingMajority;

impl Strategy for ForgivingMajority {
    fn name(&self) -> &'static str {
        "Forgiving Majority"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        let defect_rate = 1.0 - view.opponent_cooperation_rate();
        if view.round() >= 4 && defect_rate > 0.6 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Mirrors, but every ten rounds checks the opponent's record; at 80%
/// cooperation it locks into permanent cooperation.
#[derive(Default)]
pub struct KindnessRatchet {
    locked: bool,
}

impl Strategy for KindnessRatchet {
    fn name(&self) -> &'static str {
        "Kindness Ratchet"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if self.locked {
            return Action::Cooperate;
        }
        let round = view.round();
        if round > 0 && round % 10 == 0 && view.opponent_cooperation_rate() >= 0.8 {
            self.locked = true;
            return Action::Cooperate;
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Needs both a fresh two-round defection run and at least three total
/// defections before it retaliates.
#[derive(Default)]
pub struct BenefitOfDoubt;

impl Strategy for BenefitOfDoubt {
    fn name(&self) -> &'static str {
        "Benefit of the Doubt"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defection_streak() >= 2 && view.opponent_defections() >= 3 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

/// Pavlov with a warm start: two opening cooperations before win-stay
/// lose-shift takes over.
#[derive(Default)]
pub struct WarmStartPavlov;

impl Strategy for WarmStartPavlov {
    fn name(&self) -> &'static str {
        "Warm-Start Pavlov"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.round() < 2 {
            return Action::Cooperate;
        }
        match view.my_last_payoff() {
            Some(p) if p >= 3 => view.my_last().unwrap_or(Action::Cooperate),
            Some(_) => view.my_last().map(Action::flip).unwrap_or(Action::Cooperate),
            None => Action::Cooperate,
        }
    }
}

/// Mirrors, but keeps cooperating through the final two rounds of an
/// announced match rather than joining the endgame scramble.
#[derive(Default)]
pub struct EndgameLoyalist;

impl Strategy for EndgameLoyalist {
    fn name(&self) -> &'static str {
        "Endgame Loyalist"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if let Some(remaining) = view.rounds_remaining() {
            if remaining <= 2 {
                return Action::Cooperate;
            }
        }
        view.opponent_last().unwrap_or(Action::Cooperate)
    }
}

/// Pure cooperation until the first betrayal; Tit for Two Tats after.
#[derive(Default)]
pub struct CautiousOptimist;

impl Strategy for CautiousOptimist {
    fn name(&self) -> &'static str {
        "Cautious Optimist"
    }

    fn attitude(&self) -> Attitude {
        Attitude::Cooperative
    }

    fn decide(&mut self, view: &MatchView<'_>, _rng: &mut SeededRng) -> Action {
        if view.opponent_defections() == 0 {
            Action::Cooperate
        } else if view.opponent_defection_streak() >= 2 {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
}

pub(crate) const ENTRIES: &[Entry] = &[
    Entry::new::<AlwaysCooperate>("Always Cooperate", "Never defects."),
    Entry::new::<TitForTat>("Tit for Tat", "Copies the opponent's last move, starting kindly."),
    Entry::new::<TitForTwoTats>(
        "Tit for Two Tats",
        "Retaliates only after two consecutive defections.",
    ),
    Entry::new::<GenerousTitForTat>(
        "Generous Tit for Tat",
        "Mirrors, but forgives a defection 30% of the time.",
    ),
    Entry::new::<ContriteTitForTat>(
        "Contrite Tit for Tat",
        "Mirrors, and apologizes for unprovoked defections of its own.",
    ),
    Entry::new::<ForgivingGrim>(
        "Forgiving Grim",
        "Grim trigger with tolerance; sustained goodwill wipes the slate.",
    ),
    Entry::new::<PatientGrudger>(
        "Patient Grudger",
        "Five rounds of unconditional goodwill, then mirrors.",
    ),
    Entry::new::<FirmButFair>("Firm but Fair", "Defects only after being suckered."),
    Entry::new::<SlowToAnger>(
        "Slow to Anger",
        "Absorbs two defections before it starts mirroring.",
    ),
    Entry::new::<NoisePardoner>(
        "Noise Pardoner",
        "Ignores isolated defections; reacts to two in the last three.",
    ),
    Entry::new::<PeaceOffer>(
        "Peace Offer",
        "Mirrors, but breaks long mutual defection with two cooperations.",
    ),
    Entry::new::<TrustBuilder>(
        "Trust Builder",
        "Opens with three cooperations, then plays Tit for Two Tats.",
    ),
    Entry::new::<SoftMajority>(
        "Soft Majority",
        "Cooperates while opponent cooperations at least tie defections.",
    ),
    Entry::new::<GenerousPavlov>(
        "Generous Pavlov",
        "Win-stay lose-shift with a 20% chance to forgive a loss.",
    ),
    Entry::new::<SecondChance>(
        "Second Chance",
        "Grim trigger that pardons the first offense.",
    ),
    Entry::new::<OliveBranchCycle>(
        "Olive Branch",
        "Mirrors, with an unconditional cooperation every eighth round.",
    ),
    Entry::new::<ProportionalPardon>(
        "Proportional Pardon",
        "Pardons defections in proportion to the opponent's record.",
    ),
    Entry::new::<GratefulReciprocator>(
        "Grateful Reciprocator",
        "Cooperation odds grow with the opponent's cooperation streak.",
    ),
    Entry::new::<LenientScorer>(
        "Lenient Scorer",
        "Cooperates until trailing by more than five points.",
    ),
    Entry::new::<WindowForgiver>(
        "Window Forgiver",
        "Judges only the last five rounds; majority defection earns one back.",
    ),
    Entry::new::<EagerPeacemaker>(
        "Eager Peacemaker",
        "Mirrors, but exits mutual defection immediately.",
    ),
    Entry::new::<ApologeticMimic>(
        "Apologetic Mimic",
        "Mirrors, but never defects twice in a row.",
    ),
    Entry::new::<SaintWithLimits>(
        "Saint with Limits",
        "Nearly unconditional cooperation with one hard limit.",
    ),
    Entry::new::<InitialGoodwill>(
        "Initial Goodwill",
        "A cooperative opening stretch, then Soft Majority.",
    ),
    Entry::new::<MeasuredAvenger>(
        "Measured Avenger",
        "Repays each defection exactly once.",
    ),
    Entry::new::<ContentCooperator>(
        "Content Cooperator",
        "Cooperates while earning two points per round on average.",
    ),
    Entry::new::<PacifistProdder>(
        "Pacifist Prodder",
        "Cooperates always, with one prod against relentless defectors.",
    ),
    Entry::new::<DelayedMirror>(
        "Delayed Mirror",
        "Copies the opponent's move from two rounds back.",
    ),
    Entry::new::<ForgivingMajority>(
        "Forgiving Majority",
        "Defects only past a 60% opponent defection rate.",
    ),
    Entry::new::<KindnessRatchet>(
        "Kindness Ratchet",
        "Locks into permanent cooperation once trust is established.",
    ),
    Entry::new::<BenefitOfDoubt>(
        "Benefit of the Doubt",
        "Needs both a defection run and a track record before retaliating.",
    ),
    Entry::new::<WarmStartPavlov>(
        "Warm-Start Pavlov",
        "Two opening cooperations, then win-stay lose-shift.",
    ),
    Entry::new::<EndgameLoyalist>(
        "Endgame Loyalist",
        "Mirrors, but stays loyal through an announced endgame.",
    ),
    Entry::new::<CautiousOptimist>(
        "Cautious Optimist",
        "Fully trusting until betrayed, then Tit for Two Tats.",
    ),
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
    fn test_tit_for_tat_mirrors() {
        let mut s = TitForTat;
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C], &[C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), D);
    }

    #[test]
    fn test_tit_for_two_tats_needs_two() {
        let mut s = TitForTwoTats;
        assert_eq!(s.decide(&view(&[C, C], &[C, D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C], &[D, D]), &mut rng()), D);
        // A broken run resets the count
        assert_eq!(s.decide(&view(&[C, C, C], &[D, D, C]), &mut rng()), C);
    }

    #[test]
    fn test_generous_tft_deterministic_branches() {
        // The 30% pardon draw is exercised by the integration suite;
        // here only the branches that never consult the rng.
        let mut s = GenerousTitForTat;
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C], &[C]), &mut rng()), C);
    }

    #[test]
    fn test_contrite_apologizes_for_unprovoked_defection() {
        let mut s = ContriteTitForTat::default();
        // I defected, opponent had cooperated: apologize now and next round
        assert_eq!(s.decide(&view(&[D], &[C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[D, C], &[C, D]), &mut rng()), C);
        // Apology spent: back to mirroring
        assert_eq!(s.decide(&view(&[D, C, C], &[C, D, D]), &mut rng()), D);
    }

    #[test]
    fn test_forgiving_grim_tolerates_two() {
        let mut s = ForgivingGrim::default();
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C], &[D, D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C, C], &[D, D, D]), &mut rng()), D);
    }

    #[test]
    fn test_forgiving_grim_resets_after_streak() {
        let mut s = ForgivingGrim::default();
        let opp = [D, D, D, C, C, C];
        let my = [C, C, C, D, D, D];
        for round in 0..opp.len() {
            s.decide(&view(&my[..round], &opp[..round]), &mut rng());
        }
        // Three cooperations in a row cleared the ledger
        assert_eq!(s.decide(&view(&my, &opp), &mut rng()), C);
    }

    #[test]
    fn test_firm_but_fair_punishes_sucker_payoff() {
        let mut s = FirmButFair;
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[D], &[D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C], &[C]), &mut rng()), C);
    }

    #[test]
    fn test_soft_majority_ties_cooperate() {
        let mut s = SoftMajority;
        assert_eq!(s.decide(&view(&[C, C], &[C, D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C, C], &[C, D, D]), &mut rng()), D);
    }

    #[test]
    fn test_second_chance_pardons_once() {
        let mut s = SecondChance::default();
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), D);
        // Opponent cooperates: pardon
        assert_eq!(s.decide(&view(&[C, D], &[D, C]), &mut rng()), C);
        // Second offense is permanent
        assert_eq!(s.decide(&view(&[C, D, C], &[D, C, D]), &mut rng()), D);
        assert_eq!(s.decide(&view(&[C, D, C, D], &[D, C, D, C]), &mut rng()), D);
    }

    #[test]
    fn test_measured_avenger_repays_exactly_once() {
        let mut s = MeasuredAvenger::default();
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), D);
        // Debt settled; opponent cooperated
        assert_eq!(s.decide(&view(&[C, D], &[D, C]), &mut rng()), C);
    }

    #[test]
    fn test_endgame_loyalist_holds_the_line() {
        let mut s = EndgameLoyalist;
        let my = [C; 9];
        let opp = [D; 9];
        let v = MatchView::new(9, &my, &opp, 0, 0, Some(10));
        assert_eq!(s.decide(&v, &mut rng()), C);

        // Without an announced horizon it mirrors
        let v = MatchView::new(9, &my, &opp, 0, 0, None);
        assert_eq!(s.decide(&v, &mut rng()), D);
    }

    #[test]
    fn test_cautious_optimist_switches_modes() {
        let mut s = CautiousOptimist;
        assert_eq!(s.decide(&view(&[C, C], &[C, C]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C], &[C, D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C], &[D, D]), &mut rng()), D);
    }

    #[test]
    fn test_lenient_scorer_uses_scores() {
        let mut s = LenientScorer;
        let my = [C, C];
        let opp = [D, D];
        // Trailing 0 to 10: past the five-point slack, mirror the defector
        let v = MatchView::new(2, &my, &opp, 0, 10, None);
        assert_eq!(s.decide(&v, &mut rng()), D);
        // Within slack: keep cooperating
        let v = MatchView::new(2, &my, &opp, 6, 10, None);
        assert_eq!(s.decide(&v, &mut rng()), C);
    }

    #[test]
    fn test_delayed_mirror_lags_two() {
        let mut s = DelayedMirror;
        assert_eq!(s.decide(&view(&[], &[]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C], &[D]), &mut rng()), C);
        assert_eq!(s.decide(&view(&[C, C], &[D, C]), &mut rng()), D);
    }

    #[test]
    fn test_kindness_ratchet_locks() {
        let mut s = KindnessRatchet::default();
        let my = [C; 10];
        let opp = [C; 10];
        let v = MatchView::new(10, &my, &opp, 30, 30, None);
        assert_eq!(s.decide(&v, &mut rng()), C);
        // Locked: even a betrayal cannot unlock it
        let my2 = [C; 11];
        let opp2 = [C, C, C, C, C, C, C, C, C, C, D];
        let v = MatchView::new(11, &my2, &opp2, 33, 38, None);
        assert_eq!(s.decide(&v, &mut rng()), C);
    }
}
