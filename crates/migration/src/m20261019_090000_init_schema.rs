use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Type))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(text(Question::Question))
                    .col(text(Question::Answer))
                    // Holds the category id in string form. Not a foreign key:
                    // existing clients match on the string value.
                    .col(string_null(Question::Category))
                    .col(integer_null(Question::Difficulty))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_questions_category")
                    .table(Question::Table)
                    .col(Question::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Category {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    Type,
}

#[derive(DeriveIden)]
enum Question {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
