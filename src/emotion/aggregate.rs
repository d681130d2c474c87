//! Song-level aggregation.
//!
//! Sums each label's probability over the classified sentences and divides by
//! the total number of segmented sentences. Blank sentences are skipped but
//! still counted in the divisor.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::emotion::classifier::EmotionClassifier;
use crate::emotion::types::{EmotionDistribution, SentenceEmotion, SongAnalysis, SongSummary};
use crate::error::Result;
use crate::lyrics::chunk_lyrics_to_sentences;

/// Running per-label probability sums.
#[derive(Debug, Clone, Default)]
pub struct EmotionAccumulator {
    totals: EmotionDistribution,
}

impl EmotionAccumulator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self { totals: EmotionDistribution::new() }
    }

    /// Fold one sentence's distribution into the sums.
    pub fn add(&mut self, distribution: &EmotionDistribution) {
        for (label, p) in distribution.iter() {
            self.totals.add(label, p);
        }
    }

    /// Average the sums over `sentence_count` sentences.
    #[allow(clippy::cast_precision_loss)]
    pub fn finish(self, sentence_count: usize) -> SongSummary {
        if sentence_count == 0 {
            return SongSummary::neutral();
        }

        let average_probabilities = self.totals.scaled_down(sentence_count as f64);
        SongSummary {
            dominant_emotion: average_probabilities.dominant_or_neutral().to_string(),
            average_probabilities,
            sentence_count,
        }
    }
}

/// Segment `lyrics`, classify each sentence in order and summarize the song.
pub async fn summarize<C>(lyrics: &str, classifier: &C) -> Result<SongSummary>
where
    C: EmotionClassifier + ?Sized,
{
    Ok(analyze_song(lyrics, classifier, 1).await?.summary)
}

/// Like [`summarize`], keeping the per-sentence results.
///
/// Up to `concurrency` sentences are classified at once; results are still
/// folded in lyric order, so the outcome does not depend on it. The first
/// classifier error aborts the whole analysis.
pub async fn analyze_song<C>(lyrics: &str, classifier: &C, concurrency: usize) -> Result<SongAnalysis>
where
    C: EmotionClassifier + ?Sized,
{
    let sentences = chunk_lyrics_to_sentences(lyrics);
    let sentence_count = sentences.len();

    tracing::info!(
        "Classifying {} sentences with {} (concurrency {})",
        sentence_count,
        classifier.name(),
        concurrency.max(1)
    );

    let classified: Vec<SentenceEmotion> = stream::iter(sentences.iter().filter(|s| !s.trim().is_empty()))
        .map(|sentence| classify_sentence(classifier, sentence))
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    let mut accumulator = EmotionAccumulator::new();
    for result in &classified {
        accumulator.add(&result.probabilities);
    }
    let summary = accumulator.finish(sentence_count);

    tracing::info!(
        "Dominant emotion {} over {} sentences",
        summary.dominant_emotion,
        summary.sentence_count
    );

    Ok(SongAnalysis { summary, sentences: classified })
}

async fn classify_sentence<C>(classifier: &C, sentence: &str) -> Result<SentenceEmotion>
where
    C: EmotionClassifier + ?Sized,
{
    let probabilities = classifier.classify(sentence).await?;
    let dominant_emotion = probabilities.dominant_or_neutral().to_string();
    tracing::debug!("Sentence {:?} -> {}", sentence, dominant_emotion);

    Ok(SentenceEmotion {
        sentence: sentence.to_string(),
        dominant_emotion,
        probabilities,
    })
}
