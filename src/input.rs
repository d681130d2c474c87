//! Lyric input handling.
//!
//! Lyrics can come from command-line words, a file, or standard input.

use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where to read lyric text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricSource {
    /// Text given directly
    Inline(String),
    /// Path to a text file (`~` is expanded)
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl LyricSource {
    /// Pick a source from CLI pieces.
    ///
    /// A file wins over words; no words, or a lone `-`, means stdin.
    pub fn from_args(words: &[String], file: Option<&str>) -> Self {
        if let Some(path) = file {
            return Self::File(PathBuf::from(shellexpand::tilde(path).to_string()));
        }
        match words {
            [] => Self::Stdin,
            [only] if only == "-" => Self::Stdin,
            _ => Self::Inline(words.join(" ")),
        }
    }

    /// Read the full lyric text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => fs_err::read_to_string(path)
                .map_err(|e| Error::io(e, path.clone())),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}
