use crate::entity::category;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;
use trivia_core::domain::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub kind: String,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<CategoryRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: category::Model) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::new(model.id),
            kind: model.kind,
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryRecord>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        debug!(count = models.len(), "loaded categories");
        Ok(models.into_iter().map(Self::map_model).collect())
    }
}
