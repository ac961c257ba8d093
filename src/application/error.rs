use thiserror::Error;

use crate::{
    application::repos::RepoError, config::LoadError, infra::error::InfraError,
    presentation::views::TemplateRenderError,
};

/// Failures that end a `postboard` run. Mutation failures are not among
/// them; those are logged and reported through the mutation outcome.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
    #[error("invalid input: {0}")]
    Validation(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
