use crate::entity::question;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::{BinOper, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use tracing::{debug, info};
use trivia_core::domain::{CategoryRef, Difficulty, NewQuestion, QuestionFilter, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<CategoryRef>,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord>;
    /// Returns whether a row was removed.
    async fn delete(&self, question_id: QuestionId) -> Result<bool>;
    async fn find_by_id(&self, question_id: QuestionId) -> Result<Option<QuestionRecord>>;
    async fn find_all(&self) -> Result<Vec<QuestionRecord>>;
    async fn find_where(&self, filter: QuestionFilter) -> Result<Vec<QuestionRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmQuestionRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: question::Model) -> QuestionRecord {
        QuestionRecord {
            id: QuestionId::new(model.id),
            question: model.question,
            answer: model.answer,
            difficulty: model.difficulty.map(Difficulty::new),
            category: model.category.map(CategoryRef::new),
        }
    }

    fn condition(filter: QuestionFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(category) = filter.category {
            condition = condition.add(question::Column::Category.eq(category.into_inner()));
        }

        if let Some(term) = filter.question_contains {
            // Both sides go through the store's `lower()` so case folding
            // agrees. Wildcards inside the term are passed through unescaped.
            let pattern = format!("%{term}%");
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(question::Column::Question)))
                    .binary(BinOper::Like, Func::lower(Expr::val(pattern))),
            );
        }

        if !filter.exclude_ids.is_empty() {
            let ids = filter.exclude_ids.into_iter().map(QuestionId::value);
            condition = condition.add(question::Column::Id.is_not_in(ids));
        }

        condition
    }
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord> {
        let active_model = question::ActiveModel {
            question: Set(new_question.question),
            answer: Set(new_question.answer),
            difficulty: Set(new_question.difficulty.map(Difficulty::value)),
            category: Set(new_question.category.map(CategoryRef::into_inner)),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        info!(question_id = model.id, "question inserted");
        Ok(Self::map_model(model))
    }

    async fn delete(&self, question_id: QuestionId) -> Result<bool> {
        let result = question::Entity::delete_by_id(question_id.value())
            .exec(&self.db)
            .await?;

        info!(%question_id, rows = result.rows_affected, "question delete executed");
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, question_id: QuestionId) -> Result<Option<QuestionRecord>> {
        let model = question::Entity::find_by_id(question_id.value())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>> {
        self.find_where(QuestionFilter::new()).await
    }

    async fn find_where(&self, filter: QuestionFilter) -> Result<Vec<QuestionRecord>> {
        debug!(?filter, "querying questions");

        let models = question::Entity::find()
            .filter(Self::condition(filter))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }
}
