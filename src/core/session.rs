// one conversation: name, crisis flag, transcript and the random source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::compose::{compose, pick};
use super::concern::Concern;
use super::resources;
use super::transcript::{ExportFormat, Speaker, Transcript};
use crate::Error;

pub const DEFAULT_BOT_NAME: &str = "SupportBot";

// chance of addressing the user by name on an ordinary reply
const PERSONALIZE_CHANCE: f64 = 0.3;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"my name is (\w+)").expect("name pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// exit keyword seen, the conversation is over
    Farewell,
    /// first "my name is ..." of the session
    NameAck,
    Support,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
    pub concerns: Vec<Concern>,
}

impl Reply {
    pub fn is_farewell(&self) -> bool {
        self.kind == ReplyKind::Farewell
    }
}

pub struct Session<R = StdRng> {
    bot_name: String,
    user_name: Option<String>,
    crisis: bool,
    transcript: Transcript,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self::with_rng(bot_name, StdRng::from_entropy())
    }

    pub fn seeded(bot_name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(bot_name, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(bot_name: impl Into<String>, rng: R) -> Self {
        Self {
            bot_name: bot_name.into(),
            user_name: None,
            crisis: false,
            transcript: Transcript::new(),
            rng,
        }
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn crisis_detected(&self) -> bool {
        self.crisis
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn greeting(&mut self) -> String {
        pick(resources::GREETINGS, &mut self.rng).replace("{name}", &self.bot_name)
    }

    pub fn farewell(&mut self) -> &'static str {
        pick(resources::FAREWELLS, &mut self.rng)
    }

    /// Lines the front end should show after each turn once crisis is flagged.
    pub fn crisis_reminder(&self) -> Option<[&'static str; 2]> {
        self.crisis.then_some(resources::CRISIS_REMINDER)
    }

    /// Detect concerns and latch the crisis flag if self harm was mentioned.
    pub fn classify(&mut self, text: &str) -> Vec<Concern> {
        let concerns = Concern::detect(text);
        if concerns.contains(&Concern::Crisis) {
            if !self.crisis {
                tracing::warn!("crisis keywords detected");
            }
            self.crisis = true;
        }
        tracing::debug!(?concerns, "classified input");
        concerns
    }

    pub fn compose(&mut self, concerns: &[Concern]) -> String {
        compose(concerns, &mut self.rng)
    }

    /// Handle one user turn and record both sides in the transcript.
    pub fn respond(&mut self, input: &str) -> Reply {
        self.transcript.push(Speaker::User, input);

        let reply = if wants_exit(input) {
            Reply {
                text: self.farewell().to_string(),
                kind: ReplyKind::Farewell,
                concerns: Vec::new(),
            }
        } else if let Some(name) = self.capture_name(input) {
            Reply {
                text: format!("Nice to meet you, {name}. How are you feeling today?"),
                kind: ReplyKind::NameAck,
                concerns: Vec::new(),
            }
        } else {
            let concerns = self.classify(input);
            let mut text = self.compose(&concerns);

            if let Some(name) = &self.user_name
                && self.rng.gen_bool(PERSONALIZE_CHANCE)
            {
                text = format!("{name}, {text}");
            }

            Reply {
                text,
                kind: ReplyKind::Support,
                concerns,
            }
        };

        self.transcript.push(Speaker::Bot, reply.text.clone());
        reply
    }

    pub fn export(&self, path: Option<&Path>, format: ExportFormat) -> Result<PathBuf, Error> {
        self.transcript.export(&self.bot_name, path, format)
    }

    // only ever fires once per session
    fn capture_name(&mut self, input: &str) -> Option<String> {
        if self.user_name.is_some() {
            return None;
        }

        let lower = input.to_lowercase();
        let caps = NAME_PATTERN.captures(&lower)?;
        let name = capitalize(caps.get(1)?.as_str());

        tracing::info!(%name, "captured user name");
        self.user_name = Some(name.clone());
        Some(name)
    }
}

/// True when the input contains any exit keyword. Substring match, so
/// "weekend" counts.
pub fn wants_exit(input: &str) -> bool {
    let lower = input.to_lowercase();
    resources::EXIT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
