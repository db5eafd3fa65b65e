// conversation log and file export

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub speaker: Speaker,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Append-only record of one conversation.
#[derive(Debug, Clone)]
pub struct Transcript {
    started_at: DateTime<Local>,
    entries: Vec<Entry>,
}

// what the json export looks like on disk
#[derive(Serialize)]
struct JsonTranscript<'a> {
    bot: &'a str,
    started_at: String,
    messages: &'a [Entry],
}

impl Transcript {
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    pub fn starting_at(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(Entry {
            speaker,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Plain text rendering, one block per message separated by blank lines.
    pub fn render_text(&self, bot_name: &str) -> String {
        let mut out = format!(
            "Conversation with {bot_name} - {}\n\n",
            self.started_at.format("%Y-%m-%d %H:%M:%S")
        );

        for entry in &self.entries {
            let label = match entry.speaker {
                Speaker::User => "You",
                Speaker::Bot => bot_name,
            };
            out.push_str(&format!("{label}: {}\n\n", entry.message));
        }

        out
    }

    pub fn render_json(&self, bot_name: &str) -> Result<String, Error> {
        let doc = JsonTranscript {
            bot: bot_name,
            started_at: self.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            messages: &self.entries,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Write the transcript to `path`, or to a timestamped file in the current
    /// directory when no path is given. Returns the path written.
    pub fn export(
        &self,
        bot_name: &str,
        path: Option<&Path>,
        format: ExportFormat,
    ) -> Result<PathBuf, Error> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_filename(format),
        };

        let contents = match format {
            ExportFormat::Text => self.render_text(bot_name),
            ExportFormat::Json => self.render_json(bot_name)?,
        };

        std::fs::write(&path, contents).map_err(|source| Error::Export {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), messages = self.entries.len(), "transcript exported");
        Ok(path)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_filename(format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "support_conversation_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}
