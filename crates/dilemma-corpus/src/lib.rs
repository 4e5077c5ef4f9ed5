//! A corpus of decision rules for the iterated Prisoner's Dilemma.
//!
//! Each strategy is a small, self-contained rule: given the visible match
//! state it returns Cooperate or Defect, keeping whatever local counters
//! it needs between rounds. Strategies are grouped by the attitude label
//! their authors assigned:
//!
//! - [`aggressive`] leans on defection, probing and exploitation
//! - [`cooperative`] leans on trust, forgiveness and reciprocity
//! - [`neutral`] mixes, mirrors or reacts without a fixed lean
//!
//! The [`registry`] maps stable names to constructors and exports catalog
//! metadata; [`ranks`] holds precomputed orderings as static data.

pub mod aggressive;
pub mod cooperative;
pub mod neutral;
pub mod ranks;
mod registry;

pub use registry::{all, build, catalog, catalog_json, names, CorpusError, StrategyInfo};
