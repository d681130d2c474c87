//! Emotion data types.
//!
//! Labels are never fixed here: a distribution holds whatever labels the
//! classifier returned, in the order it returned them.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::constants::emotion::FALLBACK_EMOTION;

/// Probability per emotion label, in insertion order.
///
/// Scores are independent per label and need not sum to 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionDistribution {
    entries: Vec<(String, f64)>,
}

impl EmotionDistribution {
    /// Create an empty distribution.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Set the probability for a label, keeping its original position if present.
    pub fn insert(&mut self, label: impl Into<String>, probability: f64) {
        let label = label.into();
        match self.position(&label) {
            Some(idx) => self.entries[idx].1 = probability,
            None => self.entries.push((label, probability)),
        }
    }

    /// Add to a label's probability, appending the label if unseen.
    pub fn add(&mut self, label: &str, probability: f64) {
        match self.position(label) {
            Some(idx) => self.entries[idx].1 += probability,
            None => self.entries.push((label.to_string(), probability)),
        }
    }

    /// Probability for a label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.position(label).map(|idx| self.entries[idx].1)
    }

    /// Iterate `(label, probability)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(label, p)| (label.as_str(), *p))
    }

    /// Labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label with the highest probability.
    ///
    /// On ties the earliest label wins; `None` when empty.
    pub fn dominant(&self) -> Option<&str> {
        let mut iter = self.entries.iter();
        let (mut best_label, mut best) = iter.next().map(|(l, p)| (l.as_str(), *p))?;
        for (label, p) in iter {
            if *p > best {
                best = *p;
                best_label = label.as_str();
            }
        }
        Some(best_label)
    }

    /// Dominant label, or `"neutral"` when empty.
    pub fn dominant_or_neutral(&self) -> &str {
        self.dominant().unwrap_or(FALLBACK_EMOTION)
    }

    /// Divide every probability by `divisor`.
    pub fn scaled_down(&self, divisor: f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(label, p)| (label.clone(), p / divisor))
                .collect(),
        }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(l, _)| l == label)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for EmotionDistribution {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut dist = Self::new();
        for (label, p) in iter {
            dist.insert(label, p);
        }
        dist
    }
}

impl Serialize for EmotionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, p) in &self.entries {
            map.serialize_entry(label, p)?;
        }
        map.end()
    }
}

/// Song-level result of averaging per-sentence distributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongSummary {
    /// Label with the highest average, or `"neutral"`.
    pub dominant_emotion: String,
    /// Per-label sums divided by `sentence_count`.
    pub average_probabilities: EmotionDistribution,
    /// Number of segmented sentences, including any skipped as blank.
    pub sentence_count: usize,
}

impl SongSummary {
    /// Summary for lyrics that produced no sentences.
    pub fn neutral() -> Self {
        Self {
            dominant_emotion: FALLBACK_EMOTION.to_string(),
            average_probabilities: EmotionDistribution::new(),
            sentence_count: 0,
        }
    }
}

/// Classifier output for one sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceEmotion {
    /// The sentence text as segmented.
    pub sentence: String,
    /// Dominant label for this sentence, or `"neutral"`.
    pub dominant_emotion: String,
    /// Raw classifier scores.
    pub probabilities: EmotionDistribution,
}

/// Summary plus the per-sentence breakdown it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongAnalysis {
    /// Song-level result.
    pub summary: SongSummary,
    /// Classified sentences in lyric order.
    pub sentences: Vec<SentenceEmotion>,
}
