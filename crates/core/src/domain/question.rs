use std::str::FromStr;

use super::{CategoryRef, DomainError};

/// Stored difficulty rating. The range is not constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(i32);

impl Difficulty {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidDifficulty(s.to_string()))
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidDifficulty(value.to_string()))
    }
}

/// A question that passed creation checks and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<CategoryRef>,
}

impl NewQuestion {
    /// Both `question` and `answer` must be present and non-empty.
    /// Difficulty and category are taken as given.
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<Difficulty>,
        category: Option<CategoryRef>,
    ) -> Result<Self, DomainError> {
        let question = question
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::EmptyField("question"))?;
        let answer = answer
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::EmptyField("answer"))?;

        Ok(Self {
            question,
            answer,
            difficulty,
            category,
        })
    }
}
