//! Flat-file question storage: one directory per slug under a questions
//! root, each holding an `answer.txt` metadata file and a `question.png`
//! image.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use quiz_core::model::{Choice, Options, Question, Slug};

use crate::metadata;
use crate::repository::{QuestionRepository, Storage};

/// Metadata file name inside a question folder.
pub const METADATA_FILE: &str = "answer.txt";
/// Image file name inside a question folder.
pub const IMAGE_FILE: &str = "question.png";

const PROMPT_KEY: &str = "prompt";
const CORRECT_KEY: &str = "correct";
const DETAIL_KEY: &str = "detail";

/// Filesystem-backed question repository.
///
/// Every call re-reads the directory tree; nothing is cached, so on-disk
/// changes show up on the next request.
#[derive(Debug, Clone)]
pub struct FsQuestionRepository {
    root: PathBuf,
}

impl FsQuestionRepository {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The questions root this repository reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the image file for a slug, whether or not it exists.
    #[must_use]
    pub fn image_path(&self, slug: &Slug) -> PathBuf {
        self.question_dir(slug).join(IMAGE_FILE)
    }

    fn question_dir(&self, slug: &Slug) -> PathBuf {
        self.root.join(slug.as_str())
    }
}

#[async_trait]
impl QuestionRepository for FsQuestionRepository {
    async fn list_slugs(&self) -> Vec<Slug> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) => {
                debug!(root = %self.root.display(), %err, "questions root not listable");
                return Vec::new();
            }
        };

        let mut slugs = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let is_dir = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_dir())
                .unwrap_or(false);
            if !is_dir {
                continue;
            }
            match Slug::new(entry.file_name().to_string_lossy()) {
                Ok(slug) => slugs.push(slug),
                Err(err) => {
                    debug!(name = ?entry.file_name(), %err, "skipping non-question directory");
                }
            }
        }
        slugs.sort();
        slugs
    }

    async fn get_question(&self, slug: &Slug) -> Option<Question> {
        let dir = self.question_dir(slug);
        let image_path = dir.join(IMAGE_FILE);

        let content = match fs::read_to_string(dir.join(METADATA_FILE)).await {
            Ok(content) => content,
            Err(err) => {
                debug!(slug = %slug, %err, "metadata file unreadable");
                return None;
            }
        };
        if !fs::try_exists(&image_path).await.unwrap_or(false) {
            debug!(slug = %slug, "image file missing");
            return None;
        }

        let meta = metadata::parse(&content);
        let correct = match meta
            .get(CORRECT_KEY)
            .map(String::as_str)
            .unwrap_or("")
            .parse::<Choice>()
        {
            Ok(correct) => correct,
            Err(err) => {
                warn!(slug = %slug, %err, "question has no usable correct answer; treating as absent");
                return None;
            }
        };

        let option = |choice: Choice| meta.get(choice.as_str()).cloned().unwrap_or_default();
        let options = Options::new(
            option(Choice::A),
            option(Choice::B),
            option(Choice::C),
            option(Choice::D),
        );

        Some(Question::new(
            slug.clone(),
            meta.get(PROMPT_KEY).cloned().unwrap_or_default(),
            options,
            correct,
            meta.get(DETAIL_KEY).cloned().unwrap_or_default(),
            image_path,
        ))
    }

    async fn image_bytes(&self, slug: &Slug) -> Option<Vec<u8>> {
        let question = self.get_question(slug).await?;
        match fs::read(question.image_path()).await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                debug!(slug = %slug, %err, "image file unreadable");
                None
            }
        }
    }
}

impl Storage {
    /// Build a `Storage` backed by a questions directory on disk.
    #[must_use]
    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self {
            questions: Arc::new(FsQuestionRepository::new(root)),
        }
    }
}
