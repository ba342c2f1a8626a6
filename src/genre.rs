//! Genre identifiers and their fixed profiles.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The story genres offered to users.
///
/// Serialized as its [`key`](Genre::key). Deserializing goes through
/// [`Genre::resolve`], so unknown keys become [`Genre::BASELINE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Shonen,
    Isekai,
    Mecha,
    Romance,
    SliceOfLife,
    Action,
}

/// Per-genre metadata shared by prompt building and the template fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreProfile {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Prepended to the prompt for providers that take a single text field.
    pub prompt_prefix: &'static str,
}

const SHONEN: GenreProfile = GenreProfile {
    key: "shonen",
    display_name: "SHONEN HEROES",
    description: "Epic battles and heroic adventures",
    prompt_prefix: "[SHONEN] [SCENE]",
};

const ISEKAI: GenreProfile = GenreProfile {
    key: "isekai",
    display_name: "ISEKAI WORLDS",
    description: "Transported to magical realms",
    prompt_prefix: "[ISEKAI] [SCENE]",
};

const MECHA: GenreProfile = GenreProfile {
    key: "mecha",
    display_name: "MECHA PILOTS",
    description: "Giant robots defending humanity",
    prompt_prefix: "[MECHA] [SCENE]",
};

const ROMANCE: GenreProfile = GenreProfile {
    key: "romance",
    display_name: "SHOJO ROMANCE",
    description: "Heartwarming love stories",
    prompt_prefix: "[ROMANCE] [SCENE]",
};

const SLICE_OF_LIFE: GenreProfile = GenreProfile {
    key: "slice",
    display_name: "SLICE OF LIFE",
    description: "Everyday adventures and moments",
    prompt_prefix: "[SLICE_OF_LIFE] [SCENE]",
};

const ACTION: GenreProfile = GenreProfile {
    key: "action",
    display_name: "DEMON SLAYERS",
    description: "Intense supernatural combat",
    prompt_prefix: "[ACTION] [SCENE]",
};

impl Genre {
    /// Every genre, in the order a UI should list them.
    pub const ALL: [Genre; 6] = [
        Genre::Shonen,
        Genre::Isekai,
        Genre::Mecha,
        Genre::Romance,
        Genre::SliceOfLife,
        Genre::Action,
    ];

    /// The genre used whenever a key is not recognized.
    pub const BASELINE: Genre = Genre::Shonen;

    /// Resolve a user-supplied key, defaulting to the baseline genre.
    pub fn resolve(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            log::debug!("Unknown genre '{key}', using {}", Self::BASELINE);
            Self::BASELINE
        })
    }

    pub fn profile(&self) -> &'static GenreProfile {
        match self {
            Genre::Shonen => &SHONEN,
            Genre::Isekai => &ISEKAI,
            Genre::Mecha => &MECHA,
            Genre::Romance => &ROMANCE,
            Genre::SliceOfLife => &SLICE_OF_LIFE,
            Genre::Action => &ACTION,
        }
    }

    pub fn key(&self) -> &'static str {
        self.profile().key
    }

    /// Single-field prompt: `"{prefix} {prompt}"`.
    pub fn prefixed_prompt(&self, prompt: &str) -> String {
        format!("{} {}", self.profile().prompt_prefix, prompt)
    }

    /// System message for chat-style providers, naming the genre explicitly.
    pub fn system_message(&self) -> String {
        let profile = self.profile();
        format!(
            "You are a creative anime story writer. Write an engaging opening scene in the {} genre ({}: {}). Keep it vivid and end on a hook.",
            profile.key, profile.display_name, profile.description
        )
    }
}

impl FromStr for Genre {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shonen" => Ok(Genre::Shonen),
            "isekai" => Ok(Genre::Isekai),
            "mecha" => Ok(Genre::Mecha),
            "romance" => Ok(Genre::Romance),
            "slice" | "slice-of-life" | "slice_of_life" => Ok(Genre::SliceOfLife),
            "action" => Ok(Genre::Action),
            other => Err(Error::invalid_request(format!("unknown genre '{other}'"))),
        }
    }
}

impl Default for Genre {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Genre::resolve(&key))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
