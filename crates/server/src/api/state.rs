//! 统一的应用状态。

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    CategoryRepository, QuestionRepository, SeaOrmCategoryRepository, SeaOrmQuestionRepository,
};

/// 统一的应用状态，由每个请求显式取用，不持有全局可变数据。
#[derive(Clone)]
pub struct AppState {
    /// 分类仓储。
    pub categories: Arc<dyn CategoryRepository>,
    /// 题目仓储。
    pub questions: Arc<dyn QuestionRepository>,
}

impl AppState {
    /// 基于数据库连接创建应用状态。
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repositories(
            Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            Arc::new(SeaOrmQuestionRepository::new(db)),
        )
    }

    /// 使用给定的仓储实现创建应用状态。
    pub fn with_repositories(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }
}
