//! Emotion classification and song-level aggregation.
//!
//! A classifier scores each segmented sentence; the aggregator averages those
//! scores into a [`SongSummary`].

/// Averaging of per-sentence distributions
pub mod aggregate;
/// The classifier trait and closure adapter
pub mod classifier;
/// Distribution and summary types
pub mod types;

pub use aggregate::{analyze_song, summarize, EmotionAccumulator};
pub use classifier::{EmotionClassifier, FnClassifier};
pub use types::{EmotionDistribution, SentenceEmotion, SongAnalysis, SongSummary};
