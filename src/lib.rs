//! MOORA Ranker - Multi-criteria ranking of alternatives
//!
//! This crate ranks discrete alternatives (e.g. student housing) across
//! benefit and cost criteria using MOORA ratio analysis, and serves the
//! engine over a small REST API with CSV import and export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
