mod choice;
mod question;
mod slug;
mod submission;

pub use choice::{Choice, ChoiceError};
pub use question::{Options, Question};
pub use slug::{Slug, SlugError};
pub use submission::SubmitResult;
