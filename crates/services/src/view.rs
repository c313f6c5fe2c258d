//! Presentation-agnostic payloads for the embedding web layer.
//!
//! These are wire shapes, not UI view-models: no pre-formatted strings,
//! no markup. The web layer decides routing, templating and status codes.

use serde::Serialize;

use quiz_core::model::{Options, Question, Slug};

/// Wire shape for the question index: `{ "questions": [slug, …] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListView {
    pub questions: Vec<Slug>,
}

impl QuestionListView {
    #[must_use]
    pub fn new(questions: Vec<Slug>) -> Self {
        Self { questions }
    }
}

/// Public payload for a single question.
///
/// The correct letter and the explanatory detail are withheld; they only
/// travel back through a submit result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub slug: Slug,
    pub prompt: String,
    pub options: Options,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
}

impl QuestionView {
    /// Build the payload for a question whose image is served from
    /// `image_url`.
    #[must_use]
    pub fn from_question(question: &Question, image_url: impl Into<String>) -> Self {
        Self {
            slug: question.slug().clone(),
            prompt: question.prompt().to_owned(),
            options: question.options().clone(),
            image_url: image_url.into(),
            image_data_url: None,
        }
    }

    /// Attach an inline `data:` URL variant of the image.
    #[must_use]
    pub fn with_image_data_url(mut self, data_url: impl Into<String>) -> Self {
        self.image_data_url = Some(data_url.into());
        self
    }
}

/// Canonical asset URL for a question's image under an asset base path.
#[must_use]
pub fn image_asset_url(base: &str, slug: &Slug) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        slug,
        storage::fs::IMAGE_FILE
    )
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Choice;

    fn build_question() -> Question {
        Question::new(
            Slug::new("q01").unwrap(),
            "Pick one.",
            Options::new("alpha", "beta", "gamma", ""),
            Choice::B,
            "Beta is the one.",
            "q01/question.png",
        )
    }

    #[test]
    fn question_view_withholds_correct_answer_and_detail() {
        let view = QuestionView::from_question(&build_question(), "/data/questions/q01/question.png");
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["slug"], "q01");
        assert_eq!(value["prompt"], "Pick one.");
        assert_eq!(value["options"]["B"], "beta");
        assert_eq!(value["options"]["D"], "");
        assert_eq!(value["options"].as_object().unwrap().len(), 4);
        assert!(value.get("correct").is_none());
        assert!(value.get("detail").is_none());
        assert!(value.get("image_data_url").is_none());
    }

    #[test]
    fn question_view_can_inline_the_image() {
        let view = QuestionView::from_question(&build_question(), "irrelevant")
            .with_image_data_url("data:image/png;base64,AAAA");
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["image_data_url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn question_list_serializes_as_slug_array() {
        let view = QuestionListView::new(vec![
            Slug::new("q01").unwrap(),
            Slug::new("q02").unwrap(),
        ]);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value, serde_json::json!({ "questions": ["q01", "q02"] }));
    }

    #[test]
    fn asset_url_joins_base_and_slug() {
        let slug = Slug::new("q01").unwrap();
        assert_eq!(
            image_asset_url("/data/questions", &slug),
            "/data/questions/q01/question.png"
        );
        assert_eq!(
            image_asset_url("/data/questions/", &slug),
            "/data/questions/q01/question.png"
        );
    }
}
