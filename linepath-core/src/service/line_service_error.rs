use crate::{model::SectionError, repository::RepositoryError};

#[derive(thiserror::Error, Debug)]
pub enum LineServiceError {
    #[error(transparent)]
    SectionError(#[from] SectionError),
    #[error(transparent)]
    RepositoryError(#[from] RepositoryError),
}
