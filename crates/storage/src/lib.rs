//! Storage adapters for the flat-file question tree.

pub mod fs;
pub mod metadata;
pub mod repository;

pub use fs::FsQuestionRepository;
pub use repository::{InMemoryRepository, QuestionRepository, Storage};
