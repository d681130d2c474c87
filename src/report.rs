//! Report rendering.
//!
//! Text output is a two-part layout: the dominant emotion,
//! then one line per label with three decimal places.

use std::fmt::Write as _;

use crate::constants::emotion::REPORT_PRECISION;
use crate::emotion::{SongAnalysis, SongSummary};
use crate::error::{Error, Result};

/// Render the song summary as text.
pub fn render_summary(summary: &SongSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dominant Emotion: {}", summary.dominant_emotion);
    let _ = writeln!(out, "Average Probabilities:");
    for (label, p) in summary.average_probabilities.iter() {
        let _ = writeln!(out, "{}: {:.*}", label, REPORT_PRECISION, p);
    }
    out
}

/// Render the per-sentence breakdown followed by the summary.
pub fn render_analysis(analysis: &SongAnalysis) -> String {
    let mut out = String::new();
    for (idx, sentence) in analysis.sentences.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", idx + 1, sentence.sentence);
        let _ = writeln!(out, "     Sentence Dominant Emotion: {}", sentence.dominant_emotion);
    }
    if !analysis.sentences.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_summary(&analysis.summary));
    out
}

/// Render an analysis as pretty JSON; `with_sentences` keeps the breakdown.
pub fn render_json(analysis: &SongAnalysis, with_sentences: bool) -> Result<String> {
    let rendered = if with_sentences {
        serde_json::to_string_pretty(analysis)
    } else {
        serde_json::to_string_pretty(&analysis.summary)
    };
    rendered.map_err(|e| Error::Msg(format!("Failed to serialize report: {e}")))
}
