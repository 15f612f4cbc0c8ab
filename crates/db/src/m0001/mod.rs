mod meal_history;
mod recipe_catalog;
mod recipe_feedback;
mod user_preference;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "forkcast",
    "m0001",
    vec_box![],
    vec_box![
        recipe_catalog::CreateTable,
        recipe_catalog::CreateIdx1,
        recipe_catalog::CreateIdx2,
        user_preference::CreateTable,
        recipe_feedback::CreateTable,
        recipe_feedback::CreateIdx1,
        meal_history::CreateTable,
        meal_history::CreateIdx1
    ]
);
