use std::path::Path;

use quiz_core::model::{Choice, Slug};
use storage::repository::{QuestionRepository, image_data_url};
use storage::{FsQuestionRepository, Storage};
use tempfile::TempDir;

const PNG_STUB: &[u8] = b"\x89PNG\r\n\x1a\nstub-image";

fn slug(name: &str) -> Slug {
    Slug::new(name).unwrap()
}

fn write_metadata(root: &Path, name: &str, metadata: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("answer.txt"), metadata).unwrap();
}

fn write_image(root: &Path, name: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("question.png"), PNG_STUB).unwrap();
}

fn write_question(root: &Path, name: &str, correct: &str) {
    write_metadata(
        root,
        name,
        &format!(
            "prompt=Prompt for {name}\nA=alpha\nB=beta\nC=gamma\nD=delta\ncorrect={correct}\ndetail=Because.\n"
        ),
    );
    write_image(root, name);
}

#[tokio::test]
async fn lists_question_folders_sorted() {
    let tmp = TempDir::new().unwrap();
    for name in ["q10", "q02", "q01"] {
        write_question(tmp.path(), name, "A");
    }
    // Stray files and hidden directories are not question folders.
    std::fs::write(tmp.path().join("notes.txt"), "ignore me").unwrap();
    std::fs::create_dir(tmp.path().join(".cache")).unwrap();

    let repo = FsQuestionRepository::new(tmp.path());
    let names: Vec<_> = repo
        .list_slugs()
        .await
        .iter()
        .map(|slug| slug.as_str().to_owned())
        .collect();
    assert_eq!(names, ["q01", "q02", "q10"]);
}

#[tokio::test]
async fn missing_root_lists_empty() {
    let tmp = TempDir::new().unwrap();
    let repo = FsQuestionRepository::new(tmp.path().join("does-not-exist"));

    assert!(repo.list_slugs().await.is_empty());
    assert_eq!(repo.get_question(&slug("q01")).await, None);
}

#[tokio::test]
async fn loads_question_with_all_fields() {
    let tmp = TempDir::new().unwrap();
    write_question(tmp.path(), "q01", "C");

    let repo = FsQuestionRepository::new(tmp.path());
    let question = repo.get_question(&slug("q01")).await.unwrap();

    assert_eq!(question.slug().as_str(), "q01");
    assert_eq!(question.prompt(), "Prompt for q01");
    assert_eq!(question.correct(), Choice::C);
    assert_eq!(question.detail(), "Because.");
    assert_eq!(question.options().get(Choice::B), "beta");
    assert_eq!(question.image_path(), repo.image_path(&slug("q01")));
}

#[tokio::test]
async fn missing_options_default_to_empty() {
    let tmp = TempDir::new().unwrap();
    write_metadata(tmp.path(), "q01", "correct=A\nA=only option\n");
    write_image(tmp.path(), "q01");

    let repo = FsQuestionRepository::new(tmp.path());
    let question = repo.get_question(&slug("q01")).await.unwrap();

    assert_eq!(question.prompt(), "");
    assert_eq!(question.options().get(Choice::A), "only option");
    for choice in [Choice::B, Choice::C, Choice::D] {
        assert_eq!(question.options().get(choice), "");
    }
}

#[tokio::test]
async fn malformed_correct_answer_reads_as_absent() {
    let tmp = TempDir::new().unwrap();
    write_metadata(tmp.path(), "bad-letter", "prompt=?\ncorrect=X\n");
    write_image(tmp.path(), "bad-letter");
    write_metadata(tmp.path(), "no-correct", "prompt=?\nA=alpha\n");
    write_image(tmp.path(), "no-correct");

    let repo = FsQuestionRepository::new(tmp.path());
    assert_eq!(repo.get_question(&slug("bad-letter")).await, None);
    assert_eq!(repo.get_question(&slug("no-correct")).await, None);
    // Malformed folders still show up in the listing; only lookups skip them.
    assert_eq!(repo.list_slugs().await.len(), 2);
}

#[tokio::test]
async fn missing_files_read_as_absent() {
    let tmp = TempDir::new().unwrap();
    write_metadata(tmp.path(), "no-image", "correct=A\n");
    write_image(tmp.path(), "no-metadata");

    let repo = FsQuestionRepository::new(tmp.path());
    assert_eq!(repo.get_question(&slug("no-image")).await, None);
    assert_eq!(repo.get_question(&slug("no-metadata")).await, None);
    assert_eq!(repo.image_bytes(&slug("no-image")).await, None);
}

#[tokio::test]
async fn comments_and_malformed_lines_are_skipped() {
    let tmp = TempDir::new().unwrap();
    write_metadata(
        tmp.path(),
        "q01",
        "# generated file\n\nprompt = 1 + 1 = ?\nnot a pair\ncorrect=B\n",
    );
    write_image(tmp.path(), "q01");

    let repo = FsQuestionRepository::new(tmp.path());
    let question = repo.get_question(&slug("q01")).await.unwrap();
    assert_eq!(question.prompt(), "1 + 1 = ?");
    assert_eq!(question.correct(), Choice::B);
}

#[tokio::test]
async fn image_bytes_and_data_url_round_trip() {
    let tmp = TempDir::new().unwrap();
    write_question(tmp.path(), "q01", "A");

    let repo = FsQuestionRepository::new(tmp.path());
    assert_eq!(repo.image_bytes(&slug("q01")).await.unwrap(), PNG_STUB);

    let url = repo.image_data_url(&slug("q01")).await.unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(url, image_data_url(PNG_STUB));
}

#[tokio::test]
async fn relisting_reflects_directory_changes() {
    let tmp = TempDir::new().unwrap();
    write_question(tmp.path(), "q01", "A");

    let repo = FsQuestionRepository::new(tmp.path());
    assert_eq!(repo.list_slugs().await.len(), 1);

    write_question(tmp.path(), "q02", "B");
    assert_eq!(repo.list_slugs().await.len(), 2);

    std::fs::remove_dir_all(tmp.path().join("q01")).unwrap();
    let names: Vec<_> = repo
        .list_slugs()
        .await
        .iter()
        .map(|slug| slug.as_str().to_owned())
        .collect();
    assert_eq!(names, ["q02"]);
}

#[tokio::test]
async fn storage_aggregate_serves_filesystem_backend() {
    let tmp = TempDir::new().unwrap();
    write_question(tmp.path(), "q01", "D");

    let storage = Storage::filesystem(tmp.path());
    let question = storage.questions.get_question(&slug("q01")).await.unwrap();
    assert_eq!(question.correct(), Choice::D);
}
