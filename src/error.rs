use thiserror::Error;

use crate::discord_helpers::multipage_embed::PaginationError;

pub type BotResult<T> = Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Environment variable {0} is not set")]
    MissingEnvVar(String),
    #[error("Environment variable {name} has an invalid value: {reason}")]
    InvalidEnvVar { name: String, reason: String },
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}
