//! Hugging Face inference integration.
//!
//! Provides the production emotion classifier: sentences are posted to a
//! text-classification endpoint and the returned label scores become an
//! [`EmotionDistribution`](crate::emotion::EmotionDistribution).

/// API client for inference requests
pub mod api;
/// Request and response bodies
pub mod types;

// Re-export key components
pub use api::HuggingFaceClient;
