//! Hugging Face inference wire types.
//!
//! These types represent the request and response bodies of a
//! text-classification inference endpoint.

use serde::{Deserialize, Serialize};

/// Body posted for one sentence
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    /// Text to classify
    pub inputs: &'a str,
    /// Pipeline parameters, omitted when all defaults apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<InferenceParameters>,
    /// Hosted API options
    pub options: InferenceOptions,
}

/// Text-classification pipeline parameters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InferenceParameters {
    /// Number of top labels to return
    pub top_k: usize,
}

/// Hosted API options
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InferenceOptions {
    /// Block until a cold model has loaded instead of returning 503
    pub wait_for_model: bool,
}

/// One scored label
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    /// Emotion label, e.g. `joy`
    pub label: String,
    /// Model score for the label
    pub score: f64,
}

/// Accepted response shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    /// `[[{label, score}, ...]]`, one inner list per input
    Nested(Vec<Vec<LabelScore>>),
    /// `[{label, score}, ...]`, as returned by self-hosted servers
    Flat(Vec<LabelScore>),
    /// `{"error": "..."}` reported with a success status
    Failure {
        /// Message from the server
        error: String,
    },
}
