//! Session progress through the question set.

use std::sync::Arc;

use tracing::debug;

use quiz_core::model::{Choice, Slug, SubmitResult};
use storage::repository::QuestionRepository;

use crate::error::ProgressError;
use crate::session::SessionStore;

/// Session key holding the current question slug.
pub const CURRENT_SLUG_KEY: &str = "quiz_current_slug";

/// Tracks which question a session is on and applies the
/// advance-on-correct / stay-on-incorrect rule.
///
/// The slug ordering is recomputed from storage on every call; the
/// question set may change between requests and is never cached here.
#[derive(Clone)]
pub struct ProgressService {
    questions: Arc<dyn QuestionRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Current slug for the session, initializing to the first question
    /// when nothing usable is recorded yet.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NoQuestions` when the question set is
    /// empty; the session stays untouched.
    pub async fn current_slug(
        &self,
        session: &mut dyn SessionStore,
    ) -> Result<Slug, ProgressError> {
        let slugs = self.questions.list_slugs().await;
        if slugs.is_empty() {
            return Err(ProgressError::NoQuestions);
        }

        if let Some(stored) = session.get(CURRENT_SLUG_KEY) {
            if let Ok(slug) = stored.parse::<Slug>() {
                if slugs.contains(&slug) {
                    return Ok(slug);
                }
            }
            debug!(stored, "recorded slug no longer valid; restarting at first question");
        }

        let first = slugs[0].clone();
        session.insert(CURRENT_SLUG_KEY, first.to_string());
        Ok(first)
    }

    /// Adopt `requested` as the session's current question, falling back
    /// to the first slug when it is not a member of the question set.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NoQuestions` when the question set is
    /// empty; the session stays untouched.
    pub async fn select(
        &self,
        session: &mut dyn SessionStore,
        requested: &Slug,
    ) -> Result<Slug, ProgressError> {
        let slugs = self.questions.list_slugs().await;
        if slugs.is_empty() {
            return Err(ProgressError::NoQuestions);
        }

        let slug = if slugs.contains(requested) {
            requested.clone()
        } else {
            debug!(requested = %requested, "requested slug not in question set; falling back to first");
            slugs[0].clone()
        };
        session.insert(CURRENT_SLUG_KEY, slug.to_string());
        Ok(slug)
    }

    /// Apply an answer submission for `slug`.
    ///
    /// A correct answer advances the session to the cyclic successor of
    /// the submitted slug within the sorted question set, wrapping from
    /// the last question back to the first; an incorrect answer leaves it
    /// in place. The session's current slug is overwritten with the
    /// computed next slug either way.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::QuestionNotFound` when `slug` does not
    /// name a loadable question; the session stays untouched.
    pub async fn submit(
        &self,
        session: &mut dyn SessionStore,
        slug: &Slug,
        selected: Choice,
    ) -> Result<SubmitResult, ProgressError> {
        let Some(question) = self.questions.get_question(slug).await else {
            return Err(ProgressError::QuestionNotFound(slug.clone()));
        };

        let is_correct = question.is_correct(selected);
        let next_slug = if is_correct {
            let slugs = self.questions.list_slugs().await;
            cyclic_successor(&slugs, slug).unwrap_or_else(|| slug.clone())
        } else {
            slug.clone()
        };

        session.insert(CURRENT_SLUG_KEY, next_slug.to_string());
        debug!(slug = %slug, selected = %selected, is_correct, next = %next_slug, "answer submitted");

        Ok(SubmitResult {
            slug: slug.clone(),
            selected,
            correct: question.correct(),
            is_correct,
            detail: question.detail().to_owned(),
            next_slug,
        })
    }
}

/// Next slug in sorted order, wrapping from the last back to the first.
///
/// `None` when `current` is not a member of `slugs`.
fn cyclic_successor(slugs: &[Slug], current: &Slug) -> Option<Slug> {
    let idx = slugs.iter().position(|slug| slug == current)?;
    Some(slugs[(idx + 1) % slugs.len()].clone())
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
