use thiserror::Error;

use crate::model::{ChoiceError, SlugError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Choice(#[from] ChoiceError),
    #[error(transparent)]
    Slug(#[from] SlugError),
}
