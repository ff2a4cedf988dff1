use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("question field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("invalid difficulty: {0:?}. difficulty must be an integer")]
    InvalidDifficulty(String),
}
