//! Core types for the influencer stats extractor.
//!
//! Holds the output data model, the error type, CLI settings, the
//! folder → influencer mapping table and the follower-count extractor.

pub mod error;
pub mod extract;
pub mod formatting;
pub mod mapping;
pub mod models;
pub mod settings;

pub use error::{Result, StatsError};
