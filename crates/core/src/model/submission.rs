use crate::model::{Choice, Slug};

/// Outcome of submitting an answer for a question.
///
/// Ephemeral: produced per submit call for the caller to render, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub slug: Slug,
    pub selected: Choice,
    pub correct: Choice,
    pub is_correct: bool,
    pub detail: String,
    pub next_slug: Slug,
}

impl SubmitResult {
    /// True when the session moved on to a different question.
    #[must_use]
    pub fn advanced(&self) -> bool {
        self.next_slug != self.slug
    }
}
