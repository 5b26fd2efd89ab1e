//! Analysis Module - Pure domain services for MOORA ranking.
//!
//! This module contains stateless functions that turn a dataset and a
//! criteria configuration into scored, ranked alternatives.
//!
//! # Components
//!
//! - `Dataset` - Labelled alternatives x criteria table
//! - `CriteriaConfig` - Polarity and weight per criterion, aligned to columns
//! - `InputValidator` - Dataset checks plus weight and polarity predicates
//! - `MooraAnalyzer` - Normalization, weighting, and score aggregation
//! - `Ranker` - Competition ranking and best-first result assembly
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod criteria;
mod dataset;
mod error;
mod matrix;
mod moora;
mod ranking;
mod validation;

// Re-export all public types
pub use criteria::{AlignedCriteria, CriteriaConfig, CriterionSpec, WeightPreset, WeightScale};
pub use dataset::{Alternative, Dataset, DatasetBuilder, DatasetSummary, DEFAULT_IDENTITY_COLUMN};
pub use error::MooraError;
pub use matrix::Matrix;
pub use moora::{MooraAnalyzer, MooraOutcome};
pub use ranking::{RankedResult, RankedRow, Ranker, TieBreak};
pub use validation::{
    polarities_are_valid, weights_sum_to, weights_sum_to_hundred, weights_sum_to_one,
    InputValidator, PERCENT_SUM_TOLERANCE, WEIGHT_SUM_TOLERANCE,
};
