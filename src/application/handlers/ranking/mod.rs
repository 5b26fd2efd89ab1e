//! Ranking handlers - scoring uploaded datasets.

mod list_presets;
mod rank_alternatives;

pub use list_presets::{ListPresetsHandler, PresetView, PresetWeight};
pub use rank_alternatives::{
    CriteriaSource, RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
