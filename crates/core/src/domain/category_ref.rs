use super::CategoryId;

/// Category reference as stored on a question row.
///
/// The `questions.category` column holds the category id in its string
/// form. Matching is done on that string, so `"1"` and `"01"` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRef(String);

impl CategoryRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<CategoryId> for CategoryRef {
    fn from(value: CategoryId) -> Self {
        Self(value.to_string())
    }
}
