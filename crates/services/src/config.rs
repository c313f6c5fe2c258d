use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the questions root directory.
pub const QUESTIONS_DIR_ENV: &str = "QUIZ_QUESTIONS_DIR";

const DEFAULT_QUESTIONS_DIR: &str = "data/questions";

/// Runtime configuration for the quiz core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    questions_dir: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_dir: PathBuf::from(DEFAULT_QUESTIONS_DIR),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn new(questions_dir: impl Into<PathBuf>) -> Self {
        Self {
            questions_dir: questions_dir.into(),
        }
    }

    /// Configuration from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(QUESTIONS_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    /// Directory holding one subfolder per question.
    #[must_use]
    pub fn questions_dir(&self) -> &Path {
        &self.questions_dir
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
