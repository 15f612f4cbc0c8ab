use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::RecipeCatalog;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeCatalog::Table)
        .col(
            ColumnDef::new(RecipeCatalog::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(RecipeCatalog::UserId).string().string_len(26).null())
        .col(
            ColumnDef::new(RecipeCatalog::Title)
                .string()
                .not_null()
                .string_len(120),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Description)
                .string()
                .not_null()
                .string_len(2000)
                .default(""),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Cuisine)
                .string()
                .not_null()
                .string_len(50)
                .default(""),
        )
        .col(ColumnDef::new(RecipeCatalog::MealType).string().string_len(25).null())
        .col(
            ColumnDef::new(RecipeCatalog::CookTime)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Servings)
                .integer()
                .not_null()
                .default(1),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Calories)
                .double()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Protein)
                .double()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Carbs)
                .double()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Fat)
                .double()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Fiber)
                .double()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(RecipeCatalog::Sugar).double().null())
        .col(
            ColumnDef::new(RecipeCatalog::Ingredients)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Instructions)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Difficulty)
                .string()
                .string_len(10)
                .null(),
        )
        .col(ColumnDef::new(RecipeCatalog::QualityScore).double().null())
        .col(ColumnDef::new(RecipeCatalog::PopularityScore).double().null())
        .col(
            ColumnDef::new(RecipeCatalog::MealPrepSuitable)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(RecipeCatalog::Freezable)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(RecipeCatalog::BatchFriendly)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(RecipeCatalog::WeeklyPrepFriendly)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(RecipeCatalog::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RecipeCatalog::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_catalog_cuisine")
        .table(RecipeCatalog::Table)
        .col(RecipeCatalog::Cuisine)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_catalog_cuisine")
        .table(RecipeCatalog::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx2;

fn create_idx_2() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_catalog_created_at")
        .table(RecipeCatalog::Table)
        .col(RecipeCatalog::CreatedAt)
        .col(RecipeCatalog::Id)
        .to_owned()
}

fn drop_idx_2() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_catalog_created_at")
        .table(RecipeCatalog::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx2 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_2().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_2().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
