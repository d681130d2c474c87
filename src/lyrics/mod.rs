//! Lyrics processing.
//!
//! Turns a continuous lyric string into sentence-like units that can be
//! classified one at a time.

/// Capitalization-based sentence segmentation
pub mod segment;

pub use segment::{chunk_lyrics_to_sentences, strip_annotations};
