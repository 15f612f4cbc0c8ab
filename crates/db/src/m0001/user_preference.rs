use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserPreference;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserPreference::Table)
        .col(
            ColumnDef::new(UserPreference::UserId)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(UserPreference::LikedCuisines)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(UserPreference::BannedIngredients)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(UserPreference::DietaryRestrictions)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(UserPreference::CookTimePreference)
                .integer()
                .null(),
        )
        .col(
            ColumnDef::new(UserPreference::SpiceLevel)
                .string()
                .string_len(15)
                .null(),
        )
        .col(
            ColumnDef::new(UserPreference::SkillLevel)
                .string()
                .string_len(15)
                .null(),
        )
        .col(ColumnDef::new(UserPreference::DailyCalories).double().null())
        .col(ColumnDef::new(UserPreference::DailyProtein).double().null())
        .col(ColumnDef::new(UserPreference::DailyCarbs).double().null())
        .col(ColumnDef::new(UserPreference::DailyFat).double().null())
        .col(
            ColumnDef::new(UserPreference::FitnessGoal)
                .string()
                .string_len(15)
                .null(),
        )
        .col(
            ColumnDef::new(UserPreference::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserPreference::Table).to_owned()
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
