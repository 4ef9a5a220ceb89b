//! HTTP client for the NLP model sidecar.
//!
//! The sidecar hosts the actual sentiment, emotion, and aspect models; this
//! crate wraps its JSON API behind the core classifier trait so the pipeline
//! never knows which models run where.

pub mod client;
