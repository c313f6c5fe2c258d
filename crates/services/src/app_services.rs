use std::sync::Arc;

use tracing::info;

use storage::repository::{QuestionRepository, Storage};

use crate::config::QuizConfig;
use crate::progress::ProgressService;

/// Assembles the quiz services over a storage backend.
///
/// This is what the embedding web layer holds on to: one handle per
/// process, cheap to clone into request handlers.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services over any storage backend.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.questions)));
        Self { storage, progress }
    }

    /// Build services backed by the configured questions directory.
    #[must_use]
    pub fn filesystem(config: &QuizConfig) -> Self {
        info!(questions_dir = %config.questions_dir().display(), "opening question storage");
        Self::new(Storage::filesystem(config.questions_dir()))
    }

    #[must_use]
    pub fn questions(&self) -> Arc<dyn QuestionRepository> {
        Arc::clone(&self.storage.questions)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
