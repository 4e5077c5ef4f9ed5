//! Name-to-constructor registry and catalog metadata for the corpus.

use serde::Serialize;
use thiserror::Error;

use dilemma_engine::{Attitude, Strategy};

use crate::{aggressive, cooperative, neutral};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),
}

/// One registry row: a stable name, a one-line summary, and a constructor
/// producing a fresh instance for a single match.
pub(crate) struct Entry {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) ctor: fn() -> Box<dyn Strategy>,
}

impl Entry {
    pub(crate) const fn new<S: Strategy + Default + 'static>(
        name: &'static str,
        summary: &'static str,
    ) -> Self {
        Self {
            name,
            summary,
            ctor: boxed::<S>,
        }
    }
}

fn boxed<S: Strategy + Default + 'static>() -> Box<dyn Strategy> {
    Box::new(S::default())
}

const SECTIONS: &[(Attitude, &[Entry])] = &[
    (Attitude::Aggressive, aggressive::ENTRIES),
    (Attitude::Cooperative, cooperative::ENTRIES),
    (Attitude::Neutral, neutral::ENTRIES),
];

/// Catalog metadata for one strategy.
#[derive(Clone, Debug, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub attitude: Attitude,
    pub summary: &'static str,
}

/// Metadata for every strategy in the corpus, grouped by attitude.
pub fn catalog() -> Vec<StrategyInfo> {
    SECTIONS
        .iter()
        .flat_map(|(attitude, entries)| {
            entries.iter().map(|e| StrategyInfo {
                name: e.name,
                attitude: *attitude,
                summary: e.summary,
            })
        })
        .collect()
}

/// The catalog as a JSON document.
pub fn catalog_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&catalog())
}

/// All strategy names, in catalog order.
pub fn names() -> Vec<&'static str> {
    SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter().map(|e| e.name))
        .collect()
}

/// Build a fresh instance of the named strategy.
pub fn build(name: &str) -> Result<Box<dyn Strategy>, CorpusError> {
    SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .find(|e| e.name == name)
        .map(|e| (e.ctor)())
        .ok_or_else(|| CorpusError::UnknownStrategy(name.to_string()))
}

/// Fresh instances of the entire corpus, in catalog order.
pub fn all() -> Vec<Box<dyn Strategy>> {
    SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter().map(|e| (e.ctor)()))
        .collect()
}
