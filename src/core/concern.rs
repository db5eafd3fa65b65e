// concern detection - plain substring matching against keyword lists
// no stemming, no tokenizing, "studied" will match "die"

use std::fmt;

use super::resources;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Crisis,
    Anxiety,
    Depression,
    Anger,
    Loneliness,
    Grief,
    Trauma,
    General,
}

// self harm phrases, always checked before anything else
pub const CRISIS_KEYWORDS: &[&str] = &[
    "hurt myself",
    "self harm",
    "cutting",
    "suicidal",
    "kill myself",
    "end it all",
    "die",
    "suicide",
];

// scan order matters, results come back in this order
pub const KEYWORDS: &[(Concern, &[&str])] = &[
    (
        Concern::Anxiety,
        &[
            "anxious",
            "nervous",
            "worry",
            "panic",
            "stress",
            "stressed",
            "overwhelming",
        ],
    ),
    (
        Concern::Depression,
        &[
            "depressed",
            "sad",
            "hopeless",
            "unmotivated",
            "tired",
            "exhausted",
            "worthless",
        ],
    ),
    (
        Concern::Anger,
        &["angry", "mad", "frustrated", "irritated", "furious", "rage"],
    ),
    (
        Concern::Loneliness,
        &[
            "lonely",
            "alone",
            "isolated",
            "no friends",
            "no one understands",
        ],
    ),
    (
        Concern::Grief,
        &["grief", "loss", "died", "death", "passed away", "mourning"],
    ),
    (
        Concern::Trauma,
        &["trauma", "ptsd", "flashback", "nightmare", "abuse", "assault"],
    ),
];

impl Concern {
    /// Detect concerns in `text` without touching any session state.
    ///
    /// Crisis comes first when present, then every other matching category in
    /// table order, each at most once. Falls back to `[General]`.
    pub fn detect(text: &str) -> Vec<Concern> {
        let lower = text.to_lowercase();
        let mut found = Vec::new();

        if CRISIS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            found.push(Concern::Crisis);
        }

        for (concern, keywords) in KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                found.push(*concern);
            }
        }

        if found.is_empty() {
            found.push(Concern::General);
        }

        found
    }

    /// Trigger phrases for this category. General has none.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Concern::Crisis => CRISIS_KEYWORDS,
            Concern::General => &[],
            other => KEYWORDS
                .iter()
                .find(|(c, _)| *c == other)
                .map(|(_, kws)| *kws)
                .unwrap_or(&[]),
        }
    }

    /// Advice pool used by the composer. Crisis has its own list and
    /// returns `None` here.
    pub fn resources(self) -> Option<&'static [&'static str]> {
        match self {
            Concern::Crisis => None,
            Concern::General => Some(resources::GENERAL),
            Concern::Anxiety => Some(resources::ANXIETY),
            Concern::Depression => Some(resources::DEPRESSION),
            Concern::Anger => Some(resources::ANGER),
            Concern::Loneliness => Some(resources::LONELINESS),
            Concern::Grief => Some(resources::GRIEF),
            Concern::Trauma => Some(resources::TRAUMA),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Concern::Crisis => "crisis",
            Concern::Anxiety => "anxiety",
            Concern::Depression => "depression",
            Concern::Anger => "anger",
            Concern::Loneliness => "loneliness",
            Concern::Grief => "grief",
            Concern::Trauma => "trauma",
            Concern::General => "general",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
