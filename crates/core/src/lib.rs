//! Pure pipeline logic for review analysis: tabular ingestion and
//! normalization, the fixed demo dataset, row annotation through an
//! injected classifier backend, and aggregation.
//!
//! This crate holds no global state and performs no I/O beyond parsing
//! caller-supplied bytes.

pub mod aggregate;
pub mod annotate;
pub mod classifier;
pub mod dataset;
pub mod demo;
pub mod error;
pub mod normalize;
pub mod reply;
pub mod table;
pub mod wordcloud;
