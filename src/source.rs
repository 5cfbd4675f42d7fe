//! Upstream text sources
//!
//! A [`TextSource`] stands in for the search call that produces a response
//! text. Anything a source needs to reach its backend (paths, credentials,
//! endpoints) is handed to its constructor.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use crate::core::constants::sources;
use crate::core::error::{LinktagError, Result};

#[async_trait]
pub trait TextSource: Send + Sync {
    /// Produce the raw response text.
    async fn fetch(&self) -> Result<String>;

    /// Short human-readable name used in logs.
    fn name(&self) -> String;
}

/// Reads the response text from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TextSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            LinktagError::Source(format!("Could not read '{}': {e}", self.path.display()))
        })
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads the response text from standard input until EOF.
#[derive(Debug, Default, Clone)]
pub struct StdinSource {}

#[async_trait]
impl TextSource for StdinSource {
    async fn fetch(&self) -> Result<String> {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    }

    fn name(&self) -> String {
        "<stdin>".to_string()
    }
}

/// An in-memory response.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TextSource for StaticSource {
    async fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn name(&self) -> String {
        "<static>".to_string()
    }
}

/// Pick a source for a command-line argument; `-` means standard input.
pub fn source_for_arg(arg: &str) -> Box<dyn TextSource> {
    if arg == sources::STDIN_MARKER {
        Box::new(StdinSource::default())
    } else {
        Box::new(FileSource::new(arg))
    }
}

/// The text shown in place of a response when the source failed.
pub fn error_text(err: &LinktagError) -> String {
    format!("{} {err}", sources::ERROR_PREFIX)
}
