use super::{CategoryRef, QuestionId};

/// Conjunction of the row predicates the question store understands.
/// An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<CategoryRef>,
    pub question_contains: Option<String>,
    pub exclude_ids: Vec<QuestionId>,
}

impl QuestionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// Case-insensitive substring match on the question text.
    pub fn question_contains(mut self, term: impl Into<String>) -> Self {
        self.question_contains = Some(term.into());
        self
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.exclude_ids.extend(ids);
        self
    }
}
