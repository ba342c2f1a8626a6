use serde::{Deserialize, Serialize};

use crate::{Error, Genre};

/// Advisory output bound used when the caller does not pick one.
pub const DEFAULT_MAX_LENGTH: u32 = 200;

/// What the user asked for: a story opening in a given genre.
///
/// Deserialized input is validated exactly like [`GenerationRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RequestFields")]
pub struct GenerationRequest {
    prompt: String,
    genre: Genre,
    max_length: u32,
}

#[derive(Deserialize)]
struct RequestFields {
    prompt: String,
    #[serde(default)]
    genre: Genre,
    #[serde(default = "default_max_length")]
    max_length: u32,
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

impl TryFrom<RequestFields> for GenerationRequest {
    type Error = Error;

    fn try_from(fields: RequestFields) -> Result<Self, Error> {
        Self::with_genre(fields.prompt, fields.genre)?.with_max_length(fields.max_length)
    }
}

impl GenerationRequest {
    /// Build a request from raw UI input.
    ///
    /// The prompt must contain non-whitespace text. Unknown genre keys fall
    /// back to [`Genre::BASELINE`].
    pub fn new(prompt: impl Into<String>, genre_key: &str) -> Result<Self, Error> {
        Self::with_genre(prompt, Genre::resolve(genre_key))
    }

    pub fn with_genre(prompt: impl Into<String>, genre: Genre) -> Result<Self, Error> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(Error::invalid_request("prompt must not be empty"));
        }
        Ok(Self {
            prompt,
            genre,
            max_length: DEFAULT_MAX_LENGTH,
        })
    }

    /// Set the advisory output bound. Providers may interpret or ignore it.
    pub fn with_max_length(mut self, max_length: u32) -> Result<Self, Error> {
        if max_length == 0 {
            return Err(Error::invalid_request("max_length must be positive"));
        }
        self.max_length = max_length;
        Ok(self)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    /// Prompt for providers that accept a single text field.
    pub fn prefixed_prompt(&self) -> String {
        self.genre.prefixed_prompt(&self.prompt)
    }
}
