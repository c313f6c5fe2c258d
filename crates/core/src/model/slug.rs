use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validated question identifier, doubling as the question's storage
/// subdirectory name.
///
/// A slug must stay a single path component: ASCII alphanumerics plus
/// `-`, `_` and `.`, never starting with a dot. Anything else cannot name
/// a question folder and is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Slug(String);

impl Slug {
    /// Create a validated slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` if the value is empty after trimming,
    /// or `SlugError::InvalidName` if it contains characters outside the
    /// allowed set or starts with a dot.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        if trimmed.starts_with('.') || !trimmed.chars().all(is_slug_char) {
            return Err(SlugError::InvalidName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlugError {
    #[error("slug cannot be empty")]
    Empty,
    #[error("slug cannot name a question folder: {0:?}")]
    InvalidName(String),
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
