use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::m20261019_090000_init_schema::Category;

const CATEGORY_NAMES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = db.get_database_backend();

        // Categories may already have been loaded from outside.
        let existing = Query::select()
            .column(Category::Id)
            .from(Category::Table)
            .limit(1)
            .to_owned();
        if db.query_one(backend.build(&existing)).await?.is_some() {
            return Ok(());
        }

        // One row per statement keeps the autoincrement ids in list order.
        for name in CATEGORY_NAMES {
            let insert = Query::insert()
                .into_table(Category::Table)
                .columns([Category::Type])
                .values([name.into()])
                .map_err(|e| DbErr::Custom(format!("failed to build category seed: {e}")))?
                .to_owned();

            db.execute(backend.build(&insert)).await?;
        }

        Ok(())
    }

    // Seeded rows are indistinguishable from externally loaded ones, so
    // rolling back leaves the table as is.
    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
