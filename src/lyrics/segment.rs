//! Sentence segmentation for unpunctuated lyrics.
//!
//! Lyrics usually arrive as one long string with section markers such as
//! `[Chorus]` and no reliable punctuation. A capitalized word is taken as the
//! start of a new sentence, except the pronoun `I`, which never breaks one.
//! Words before the first capitalized word are dropped.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching bracketed annotations like `[Verse 1]` (non-greedy).
#[allow(clippy::expect_used)]
static RE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]").expect("valid regex: RE_ANNOTATION")
});

/// Remove every `[...]` span from the text.
///
/// Unbalanced brackets are left alone: a `[` with no closing `]` survives.
pub fn strip_annotations(lyrics: &str) -> String {
    RE_ANNOTATION.replace_all(lyrics, "").into_owned()
}

/// Split a lyric string into sentences, in order.
///
/// Every returned sentence is non-empty and made of the input's words,
/// space-joined, in their original order.
pub fn chunk_lyrics_to_sentences(lyrics: &str) -> Vec<String> {
    let cleaned = strip_annotations(lyrics);

    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut expecting_start = true;

    for word in cleaned.split_whitespace() {
        let capitalized = starts_uppercase(word);

        if expecting_start {
            if capitalized {
                flush(&mut sentences, &mut current);
                current.push(word);
                expecting_start = false;
            }
        } else if capitalized && !is_pronoun_i(word) {
            flush(&mut sentences, &mut current);
            current.push(word);
        } else {
            current.push(word);
        }
    }

    flush(&mut sentences, &mut current);

    tracing::debug!("Segmented lyrics into {} sentences", sentences.len());
    sentences
}

fn flush(sentences: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let sentence = current.join(" ");
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Whole-word match on `I`, case-insensitive. `I'm` or `It` do not count.
fn is_pronoun_i(word: &str) -> bool {
    word.to_uppercase() == "I"
}
