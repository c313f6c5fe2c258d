use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use quiz_core::model::{Question, Slug};

/// Repository contract for quiz questions.
///
/// Expected absences are values, not errors: a missing or malformed
/// question reads as `None`, and an unreadable questions root lists as
/// empty. Callers decide how absence is presented.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Slugs of all valid question folders, sorted ascending.
    async fn list_slugs(&self) -> Vec<Slug>;

    /// Fetch a question by slug.
    ///
    /// Returns `None` when the folder, its metadata file, or its image
    /// file is missing, or when the metadata's correct-answer field is
    /// not one of the four answer letters.
    async fn get_question(&self, slug: &Slug) -> Option<Question>;

    /// Raw bytes of a valid question's image.
    async fn image_bytes(&self, slug: &Slug) -> Option<Vec<u8>>;

    /// The image as a `data:` URL for inline embedding.
    async fn image_data_url(&self, slug: &Slug) -> Option<String> {
        let bytes = self.image_bytes(slug).await?;
        Some(image_data_url(&bytes))
    }
}

/// Encode PNG bytes as a base64 `data:` URL.
#[must_use]
pub fn image_data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}

#[derive(Clone)]
struct StoredQuestion {
    question: Question,
    image: Vec<u8>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<BTreeMap<Slug, StoredQuestion>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a question together with its image bytes.
    pub fn insert(&self, question: Question, image: Vec<u8>) {
        self.lock()
            .insert(question.slug().clone(), StoredQuestion { question, image });
    }

    /// Remove a question, returning true when it was present.
    pub fn remove(&self, slug: &Slug) -> bool {
        self.lock().remove(slug).is_some()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<Slug, StoredQuestion>> {
        self.questions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_slugs(&self) -> Vec<Slug> {
        self.lock().keys().cloned().collect()
    }

    async fn get_question(&self, slug: &Slug) -> Option<Question> {
        self.lock().get(slug).map(|stored| stored.question.clone())
    }

    async fn image_bytes(&self, slug: &Slug) -> Option<Vec<u8>> {
        self.lock().get(slug).map(|stored| stored.image.clone())
    }
}

/// Aggregates the question repository behind a trait object for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            questions: Arc::new(InMemoryRepository::new()),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
