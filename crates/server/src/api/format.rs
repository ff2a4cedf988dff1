//! 领域记录到响应结构的转换。

use trivia_api_types::{CategoryMap, QuestionDto};
use trivia_core::domain::{CategoryId, CategoryRef, Difficulty, Page, QuestionId};

use crate::repository::{CategoryRecord, QuestionRecord};

impl From<QuestionRecord> for QuestionDto {
    fn from(record: QuestionRecord) -> Self {
        QuestionDto {
            id: QuestionId::value(record.id),
            question: record.question,
            answer: record.answer,
            difficulty: record.difficulty.map(Difficulty::value),
            category: record.category.map(CategoryRef::into_inner),
        }
    }
}

/// 分类列表转换为 `id -> type` 映射。
pub fn category_map(categories: Vec<CategoryRecord>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (CategoryId::value(category.id), category.kind))
        .collect()
}

/// 按页截取题目并返回未截取前的总数。
pub fn paginate(page: Page, questions: Vec<QuestionRecord>) -> (Vec<QuestionDto>, usize) {
    let total = questions.len();
    let sliced = page
        .slice(questions)
        .into_iter()
        .map(QuestionDto::from)
        .collect();
    (sliced, total)
}
