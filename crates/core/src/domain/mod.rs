mod category_ref;
mod error;
mod ids;
mod pagination;
mod question;
mod question_filter;
mod quiz;

pub use category_ref::CategoryRef;
pub use error::DomainError;
pub use ids::{CategoryId, QuestionId};
pub use pagination::{Page, QUESTIONS_PER_PAGE};
pub use question::{Difficulty, NewQuestion};
pub use question_filter::QuestionFilter;
pub use quiz::pick_random;
