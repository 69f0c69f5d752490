//! Core crate for the talent-track applicant pipeline.
//!
//! Positions are hired against an ordered interview flow; applications move
//! through that flow one validated stage transition at a time. This crate owns
//! the data model, the store contract, the board read path, the transition
//! write path, and the HTTP router the API service mounts.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
