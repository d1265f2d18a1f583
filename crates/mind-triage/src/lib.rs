//! Scoring and risk triage for a ten-question mental-health screening questionnaire.
//!
//! The [`triage`] module holds the engine (catalog, scorer, classifier, recommendation
//! generator, report assembler) along with the validation, storage and HTTP seams the
//! service binary wires together.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod triage;
