//! Shared request/response types used by API-facing crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category listing keyed by category id. JSON object keys come out as the
/// decimal id strings.
pub type CategoryMap = BTreeMap<i32, String>;

/// A field that clients send either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    /// `0` and `""` count as unset.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(value) => *value != 0,
            Self::Text(value) => !value.is_empty(),
        }
    }

    /// Text form as it would be stored in a string column.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: Option<i32>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<NumberOrString>,
    #[serde(default)]
    pub category: Option<NumberOrString>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<NumberOrString>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category the quiz is restricted to, if any. A falsy id means every
    /// category.
    #[must_use]
    pub fn category_filter(&self) -> Option<String> {
        self.quiz_category
            .as_ref()
            .and_then(|category| category.id.as_ref())
            .filter(|id| id.is_truthy())
            .map(NumberOrString::to_text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: CategoryMap,
}

/// Page of questions returned by search and category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Quiz step. A missing `question` key signals the quiz is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}
