//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Emotion analysis constants.
pub mod emotion {
    /// Label reported when no sentence produced a distribution.
    pub const FALLBACK_EMOTION: &str = "neutral";

    /// Decimal places used when printing probabilities.
    pub const REPORT_PRECISION: usize = 3;
}

/// Classifier backend constants.
pub mod classifier {
    /// Default emotion model (28 `GoEmotions` labels).
    pub const DEFAULT_MODEL: &str = "cirimus/modernbert-large-go-emotions";

    /// Base URL for hosted inference; the model id is appended.
    pub const INFERENCE_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

    /// Request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Number of sentences classified at once.
    pub const DEFAULT_CONCURRENCY: usize = 1;
}
