//! Analyzer module - code review engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{ReviewAssembler, ReviewSummary};
pub use rules::RuleEngine;
pub use scoring::ScoreCalculator;
