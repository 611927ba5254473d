//! Scanning and reporting layer for the influencer stats extractor.
//!
//! Lists screenshot folders, runs OCR on the representative image of each,
//! aggregates follower counts per influencer and writes the JSON report.

pub mod aggregator;
pub mod extraction;
pub mod ocr;
pub mod reader;
pub mod report;
pub mod scanner;

pub use stats_core as core;
