//! `songmood` - estimate the dominant emotion of a song from its lyrics.
//!
//! Lyrics are split into sentence-like units on capitalization, each unit is
//! scored by an emotion classifier, and the scores are averaged into a
//! song-level summary.


// Re-export public modules for use in integration tests and the binaries
pub mod config;
pub mod constants;
pub mod emotion;
pub mod error;
pub mod huggingface;
pub mod input;
pub mod lyrics;
pub mod report;
