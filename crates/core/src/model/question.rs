use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::model::{Choice, Slug};

/// The four option texts of a question, keyed A–D.
///
/// Every key is always present; options missing from the source metadata
/// are carried as empty strings, and an empty option text is valid.
/// Serializes as the map `{"A": …, "B": …, "C": …, "D": …}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Options {
    #[serde(rename = "A")]
    a: String,
    #[serde(rename = "B")]
    b: String,
    #[serde(rename = "C")]
    c: String,
    #[serde(rename = "D")]
    d: String,
}

impl Options {
    #[must_use]
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// Option text for the given letter.
    #[must_use]
    pub fn get(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
            Choice::C => &self.c,
            Choice::D => &self.d,
        }
    }

    /// Letters paired with their texts, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Choice, &str)> {
        Choice::ALL.into_iter().map(move |choice| (choice, self.get(choice)))
    }
}

/// A quiz question as loaded from its question folder.
///
/// Immutable once loaded; repositories rebuild it from disk on every
/// lookup rather than caching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    slug: Slug,
    prompt: String,
    options: Options,
    correct: Choice,
    detail: String,
    image_path: PathBuf,
}

impl Question {
    #[must_use]
    pub fn new(
        slug: Slug,
        prompt: impl Into<String>,
        options: Options,
        correct: Choice,
        detail: impl Into<String>,
        image_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            slug,
            prompt: prompt.into(),
            options,
            correct,
            detail: detail.into(),
            image_path: image_path.into(),
        }
    }

    #[must_use]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> Choice {
        self.correct
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// True when `selected` matches the correct letter.
    #[must_use]
    pub fn is_correct(&self, selected: Choice) -> bool {
        self.correct == selected
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
