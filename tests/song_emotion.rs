//! End-to-end analysis of a full song with a deterministic keyword classifier.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use songmood::emotion::{analyze_song, summarize, EmotionDistribution, FnClassifier};
use songmood::lyrics::chunk_lyrics_to_sentences;
use songmood::report;

const WRECKING_BALL: &str = include_str!("fixtures/wrecking_ball.txt");

const LEXICON: &[(&str, &[&str])] = &[
    ("love", &["love", "kiss"]),
    ("anger", &["wreck", "war"]),
    ("sadness", &["ashes", "burn", "crashing"]),
];

fn keyword_scores(sentence: &str) -> EmotionDistribution {
    let lower = sentence.to_lowercase();
    LEXICON
        .iter()
        .map(|(label, words)| {
            let hit = words.iter().any(|w| lower.contains(w));
            (*label, if hit { 1.0 } else { 0.0 })
        })
        .collect()
}

fn close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("label present");
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn song_is_split_into_expected_sentences() {
    let sentences = chunk_lyrics_to_sentences(WRECKING_BALL);
    assert_eq!(sentences.len(), 27);
    assert_eq!(sentences[0], "We clawed, we chained, our hearts in vain");
    assert_eq!(sentences[8], "And now, you're not coming down");
    assert_eq!(sentences[26], "Yeah, you, you wreck me");
    assert!(sentences.iter().all(|s| !s.contains('[') && !s.contains("Produced")));
}

#[tokio::test]
async fn song_summary_matches_keyword_counts() {
    let classifier = FnClassifier::new(|s: &str| Ok(keyword_scores(s)));
    let summary = summarize(WRECKING_BALL, &classifier).await.unwrap();

    assert_eq!(summary.sentence_count, 27);
    assert_eq!(summary.dominant_emotion, "anger");
    close(summary.average_probabilities.get("love"), 5.0 / 27.0);
    close(summary.average_probabilities.get("anger"), 13.0 / 27.0);
    close(summary.average_probabilities.get("sadness"), 4.0 / 27.0);
}

#[tokio::test]
async fn text_report_has_three_decimal_lines() {
    let classifier = FnClassifier::new(|s: &str| Ok(keyword_scores(s)));
    let analysis = analyze_song(WRECKING_BALL, &classifier, 4).await.unwrap();

    let text = report::render_summary(&analysis.summary);
    assert_eq!(
        text,
        "Dominant Emotion: anger\nAverage Probabilities:\nlove: 0.185\nanger: 0.481\nsadness: 0.148\n"
    );
    assert_eq!(analysis.sentences.len(), 27);
}
