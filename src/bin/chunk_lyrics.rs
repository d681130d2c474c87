//! Print how lyrics are split into sentences, without classifying them.
//!
//! Usage: cargo run --bin chunk_lyrics [-- --file song.txt | <lyrics...>]

use anyhow::{Context, Result};

use songmood::input::LyricSource;
use songmood::lyrics::chunk_lyrics_to_sentences;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let file = args
        .iter()
        .position(|a| a == "--file")
        .and_then(|i| args.get(i + 1))
        .cloned();
    let words: Vec<String> = if file.is_some() { Vec::new() } else { args };

    let lyrics = LyricSource::from_args(&words, file.as_deref())
        .read()
        .context("Failed to read lyrics")?;

    let sentences = chunk_lyrics_to_sentences(&lyrics);
    for (idx, sentence) in sentences.iter().enumerate() {
        println!("{:>3}. {}", idx + 1, sentence);
    }
    println!("\n=== {} sentences ===", sentences.len());

    Ok(())
}
