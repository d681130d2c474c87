//! Classifier seam.
//!
//! The aggregator only knows that some backend turns a sentence into an
//! [`EmotionDistribution`]. Backends decide the label set.

use async_trait::async_trait;

use crate::emotion::types::EmotionDistribution;
use crate::error::Result;

/// Trait for per-sentence emotion classifiers.
///
/// Different backends (hosted inference, local servers, fixed tables in
/// tests) can be plugged into the aggregator.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Score one sentence.
    ///
    /// An empty distribution is allowed and contributes nothing.
    async fn classify(&self, sentence: &str) -> Result<EmotionDistribution>;

    /// Get the name of this classifier (for debugging/logging).
    fn name(&self) -> &'static str;
}

/// Adapts a synchronous closure into an [`EmotionClassifier`].
pub struct FnClassifier<F> {
    func: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(&str) -> Result<EmotionDistribution> + Send + Sync,
{
    /// Wrap a closure.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> EmotionClassifier for FnClassifier<F>
where
    F: Fn(&str) -> Result<EmotionDistribution> + Send + Sync,
{
    async fn classify(&self, sentence: &str) -> Result<EmotionDistribution> {
        (self.func)(sentence)
    }

    fn name(&self) -> &'static str {
        "FnClassifier"
    }
}
