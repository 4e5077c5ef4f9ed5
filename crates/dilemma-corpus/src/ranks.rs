//! Precomputed strategy orderings.
//!
//! These lists come from offline round-robin evaluation and are kept as
//! plain data; nothing in this crate recomputes them. Tests only check
//! referential integrity against the registry.

/// Aggressive strategies, strongest first.
pub const AGGRESSIVE_RANKS: &[&str] = &[
    "Escalating Retaliator",
    "Grim Predator",
    "Suspicious Tit for Tat",
    "Vengeful Mirror",
    "Cold Opener",
    "Opening Bandit",
    "Hard Majority",
    "Prober",
    "Backstabber",
    "Interrogator",
    "Probe Punisher",
    "Short Fuse",
    "Endgame Opportunist",
    "Handshake Exploiter",
    "Bully",
    "Score Bully",
    "Rage Quit",
    "Pavlov Bully",
    "Forgiveness Hunter",
    "Streak Puncher",
    "Always Defect",
    "Greedy Gambler",
    "Late Betrayer",
    "Two-Faced",
    "Extortionist",
    "Pressure Cooker",
    "Random Aggressor",
    "Sucker Puncher",
    "Cautious Shark",
    "Periodic Predator",
    "Hit and Run",
    "Sly Alternator",
    "Feint and Retreat",
    "Tollbooth",
];

/// Cooperative strategies, strongest first.
pub const COOPERATIVE_RANKS: &[&str] = &[
    "Tit for Tat",
    "Contrite Tit for Tat",
    "Generous Tit for Tat",
    "Forgiving Grim",
    "Tit for Two Tats",
    "Second Chance",
    "Measured Avenger",
    "Firm but Fair",
    "Warm-Start Pavlov",
    "Generous Pavlov",
    "Soft Majority",
    "Cautious Optimist",
    "Noise Pardoner",
    "Window Forgiver",
    "Benefit of the Doubt",
    "Trust Builder",
    "Eager Peacemaker",
    "Peace Offer",
    "Slow to Anger",
    "Forgiving Majority",
    "Initial Goodwill",
    "Endgame Loyalist",
    "Patient Grudger",
    "Content Cooperator",
    "Kindness Ratchet",
    "Olive Branch",
    "Proportional Pardon",
    "Lenient Scorer",
    "Apologetic Mimic",
    "Grateful Reciprocator",
    "Delayed Mirror",
    "Saint with Limits",
    "Pacifist Prodder",
    "Always Cooperate",
];

/// Neutral strategies, strongest first.
pub const NEUTRAL_RANKS: &[&str] = &[
    "Gradual",
    "Pavlov",
    "Grim Trigger",
    "First Impressions",
    "Rate Bander",
    "Budget Defector",
    "Weighted Historian",
    "Recent Majority",
    "Window Majority",
    "Thermostat",
    "Deadlock Breaker",
    "Midpoint Switcher",
    "Noisy Grim",
    "Detective",
    "Hedger",
    "Sliding Pavlov",
    "Noisy Tit for Tat",
    "Calibrated Memory-One",
    "Bigram Predictor",
    "Payoff Seeker",
    "Streak Breaker",
    "Final Round Defector",
    "Fickle Follower",
    "Coin Pavlov",
    "Mirror Rate",
    "Equalizer",
    "Three Phases",
    "Cycler CCD",
    "Parity Player",
    "Lengthening Cycle",
    "Self Balancer",
    "Alternator",
    "Random",
    "Contrarian",
];

/// The full corpus, strongest first.
pub const OVERALL_RANKS: &[&str] = &[
    "Tit for Tat",
    "Gradual",
    "Contrite Tit for Tat",
    "Generous Tit for Tat",
    "Forgiving Grim",
    "Pavlov",
    "Tit for Two Tats",
    "Second Chance",
    "Grim Trigger",
    "Measured Avenger",
    "Firm but Fair",
    "First Impressions",
    "Warm-Start Pavlov",
    "Rate Bander",
    "Generous Pavlov",
    "Soft Majority",
    "Budget Defector",
    "Cautious Optimist",
    "Weighted Historian",
    "Noise Pardoner",
    "Escalating Retaliator",
    "Recent Majority",
    "Window Forgiver",
    "Window Majority",
    "Benefit of the Doubt",
    "Thermostat",
    "Trust Builder",
    "Deadlock Breaker",
    "Grim Predator",
    "Eager Peacemaker",
    "Midpoint Switcher",
    "Peace Offer",
    "Suspicious Tit for Tat",
    "Slow to Anger",
    "Noisy Grim",
    "Forgiving Majority",
    "Vengeful Mirror",
    "Detective",
    "Initial Goodwill",
    "Hedger",
    "Endgame Loyalist",
    "Sliding Pavlov",
    "Cold Opener",
    "Patient Grudger",
    "Noisy Tit for Tat",
    "Opening Bandit",
    "Content Cooperator",
    "Hard Majority",
    "Calibrated Memory-One",
    "Kindness Ratchet",
    "Prober",
    "Bigram Predictor",
    "Backstabber",
    "Olive Branch",
    "Interrogator",
    "Payoff Seeker",
    "Probe Punisher",
    "Proportional Pardon",
    "Streak Breaker",
    "Short Fuse",
    "Lenient Scorer",
    "Final Round Defector",
    "Endgame Opportunist",
    "Apologetic Mimic",
    "Handshake Exploiter",
    "Fickle Follower",
    "Bully",
    "Grateful Reciprocator",
    "Coin Pavlov",
    "Score Bully",
    "Rage Quit",
    "Mirror Rate",
    "Delayed Mirror",
    "Pavlov Bully",
    "Equalizer",
    "Forgiveness Hunter",
    "Streak Puncher",
    "Three Phases",
    "Saint with Limits",
    "Always Defect",
    "Greedy Gambler",
    "Cycler CCD",
    "Late Betrayer",
    "Pacifist Prodder",
    "Two-Faced",
    "Extortionist",
    "Parity Player",
    "Pressure Cooker",
    "Random Aggressor",
    "Lengthening Cycle",
    "Sucker Puncher",
    "Cautious Shark",
    "Self Balancer",
    "Periodic Predator",
    "Alternator",
    "Hit and Run",
    "Random",
    "Always Cooperate",
    "Sly Alternator",
    "Feint and Retreat",
    "Contrarian",
    "Tollbooth",
];
