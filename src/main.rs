//! `songmood` - report the dominant emotion of a song's lyrics.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use songmood::config::Config;
use songmood::emotion::analyze_song;
use songmood::huggingface::HuggingFaceClient;
use songmood::input::LyricSource;
use songmood::report;

/// Estimate the dominant emotion of a song from its lyrics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lyric text; reads standard input when omitted or `-`
    lyrics: Vec<String>,

    /// Read lyrics from a file instead
    #[arg(short, long)]
    file: Option<String>,

    /// Model id on the inference API
    #[arg(short, long)]
    model: Option<String>,

    /// Full inference URL (overrides --model)
    #[arg(long)]
    endpoint: Option<String>,

    /// Sentences classified at once
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Labels requested per sentence (all when unset)
    #[arg(long)]
    top_k: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print each sentence with its dominant emotion
    #[arg(short, long)]
    sentences: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config
    fn apply(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(n) = self.concurrency {
            config.concurrency = n;
        }
        if let Some(k) = self.top_k {
            config.top_k = Some(k);
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load().context("Failed to load config")?;
    args.apply(&mut config);
    config.validate().context("Invalid settings")?;

    let source = LyricSource::from_args(&args.lyrics, args.file.as_deref());
    debug!("Reading lyrics from {:?}", source);
    let lyrics = source.read().context("Failed to read lyrics")?;

    let client = HuggingFaceClient::new(&config);
    info!("{} {} using {}", config.app_name(), config.app_version(), client.url());
    if !client.has_token() {
        debug!("No HF_TOKEN set; sending unauthenticated requests");
    }

    let analysis = analyze_song(&lyrics, &client, config.concurrency)
        .await
        .context("Emotion analysis failed")?;

    let output = if args.json {
        report::render_json(&analysis, args.sentences)?
    } else if args.sentences {
        report::render_analysis(&analysis)
    } else {
        report::render_summary(&analysis.summary)
    };
    print!("{output}");
    if args.json {
        println!();
    }

    Ok(())
}
