//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    // Commands and Results
    CriteriaSource,
    RankAlternativesCommand,
    RankAlternativesHandler,
    RankAlternativesResult,
    // Queries
    ListPresetsHandler,
    PresetView,
    PresetWeight,
};
