use std::str::FromStr;

use forkcast_db::table::{MealHistory, RecipeCatalog, RecipeFeedback, UserPreference};
use forkcast_shared::{
    BehavioralSignal, ExternalMetrics, MacroGoals, NutritionFacts, Recipe, RecipeSummary,
    SuitabilityFlags, UserScoringPreferences,
};
use sea_query::{
    Condition, Expr, ExprTrait, Func, LikeExpr, OnConflict, Order, Query, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};
use time::OffsetDateTime;

use crate::{
    BehaviorSource, FEEDBACK_HISTORY_LIMIT, MEAL_HISTORY_LIMIT, PreferenceSource,
    RECENT_MEAL_WINDOW, RecipePredicate, RecipeStore,
};

const SUMMARY_COLUMNS: [RecipeCatalog; 22] = [
    RecipeCatalog::Id,
    RecipeCatalog::UserId,
    RecipeCatalog::Title,
    RecipeCatalog::Description,
    RecipeCatalog::Cuisine,
    RecipeCatalog::MealType,
    RecipeCatalog::CookTime,
    RecipeCatalog::Servings,
    RecipeCatalog::Calories,
    RecipeCatalog::Protein,
    RecipeCatalog::Carbs,
    RecipeCatalog::Fat,
    RecipeCatalog::Fiber,
    RecipeCatalog::Sugar,
    RecipeCatalog::Ingredients,
    RecipeCatalog::Difficulty,
    RecipeCatalog::QualityScore,
    RecipeCatalog::PopularityScore,
    RecipeCatalog::MealPrepSuitable,
    RecipeCatalog::Freezable,
    RecipeCatalog::BatchFriendly,
    RecipeCatalog::WeeklyPrepFriendly,
];

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: String,
    user_id: Option<String>,
    title: String,
    description: String,
    cuisine: String,
    meal_type: Option<String>,
    cook_time: i64,
    servings: i64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: Option<f64>,
    ingredients: Json<Vec<String>>,
    difficulty: Option<String>,
    quality_score: Option<f64>,
    popularity_score: Option<f64>,
    meal_prep_suitable: bool,
    freezable: bool,
    batch_friendly: bool,
    weekly_prep_friendly: bool,
}

impl From<SummaryRow> for RecipeSummary {
    fn from(row: SummaryRow) -> Self {
        let meal_type = parse_column(&row.id, "meal_type", row.meal_type);
        let difficulty = parse_column(&row.id, "difficulty", row.difficulty);

        Self {
            id: row.id,
            created_by: row.user_id,
            title: row.title,
            description: row.description,
            cuisine: row.cuisine,
            meal_type,
            cook_time: to_u32(row.cook_time),
            servings: to_u32(row.servings),
            nutrition: NutritionFacts {
                calories: row.calories,
                protein_g: row.protein,
                carbs_g: row.carbs,
                fat_g: row.fat,
                fiber_g: row.fiber,
                sugar_g: row.sugar,
            },
            ingredients: row.ingredients.0,
            difficulty,
            flags: SuitabilityFlags {
                meal_prep_suitable: row.meal_prep_suitable,
                freezable: row.freezable,
                batch_friendly: row.batch_friendly,
                weekly_prep_friendly: row.weekly_prep_friendly,
            },
            external: ExternalMetrics {
                quality_score: row.quality_score,
                popularity_score: row.popularity_score,
            },
        }
    }
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    #[sqlx(flatten)]
    summary: SummaryRow,
    instructions: Json<Vec<String>>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe::new(row.summary.into(), row.instructions.0)
    }
}

#[derive(Debug, FromRow)]
struct PreferenceRow {
    user_id: String,
    liked_cuisines: Json<Vec<String>>,
    banned_ingredients: Json<Vec<String>>,
    dietary_restrictions: Json<Vec<String>>,
    cook_time_preference: Option<i64>,
    spice_level: Option<String>,
    skill_level: Option<String>,
    daily_calories: Option<f64>,
    daily_protein: Option<f64>,
    daily_carbs: Option<f64>,
    daily_fat: Option<f64>,
    fitness_goal: Option<String>,
}

impl From<PreferenceRow> for UserScoringPreferences {
    fn from(row: PreferenceRow) -> Self {
        let dietary_restrictions = row
            .dietary_restrictions
            .0
            .into_iter()
            .filter_map(|value| parse_column(&row.user_id, "dietary_restrictions", Some(value)))
            .collect();

        let macro_goals = match (row.daily_calories, row.daily_protein) {
            (Some(daily_calories), Some(daily_protein_g)) => Some(MacroGoals {
                daily_calories,
                daily_protein_g,
                daily_carbs_g: row.daily_carbs,
                daily_fat_g: row.daily_fat,
            }),
            _ => None,
        };

        Self {
            liked_cuisines: row.liked_cuisines.0,
            banned_ingredients: row.banned_ingredients.0,
            dietary_restrictions,
            cook_time_preference: row.cook_time_preference.map(to_u32),
            spice_level: parse_column(&row.user_id, "spice_level", row.spice_level),
            skill_level: parse_column(&row.user_id, "skill_level", row.skill_level),
            macro_goals,
            fitness_goal: parse_column(&row.user_id, "fitness_goal", row.fitness_goal),
        }
    }
}

fn parse_column<T: FromStr>(owner: &str, column: &'static str, value: Option<String>) -> Option<T> {
    let value = value?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(owner, column, value = %value, "skipping unknown enum value");
            None
        }
    }
}

fn to_u32(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SQL form of [`RecipePredicate`].
pub fn recipe_condition(predicate: &RecipePredicate) -> Condition {
    let mut condition = Condition::all();

    if predicate.shared_pool_only {
        condition = condition.add(Expr::col(RecipeCatalog::UserId).is_null());
    }

    if let Some(cuisines) = &predicate.cuisines {
        condition = condition.add(
            // lower() and LIKE fold ASCII letters only
            Expr::expr(Func::lower(Expr::col(RecipeCatalog::Cuisine)))
                .is_in(cuisines.iter().map(|c| c.trim().to_ascii_lowercase())),
        );
    }

    if let Some(max) = predicate.max_cook_time {
        condition = condition.add(Expr::col(RecipeCatalog::CookTime).lte(max));
    }

    if let Some(meal_type) = predicate.meal_type {
        condition = condition.add(Expr::col(RecipeCatalog::MealType).eq(meal_type.to_string()));
    }

    if let Some(search) = &predicate.search {
        let pattern = format!("%{}%", escape_like(search));
        condition = condition.add(
            Condition::any()
                .add(
                    Expr::col(RecipeCatalog::Title)
                        .like(LikeExpr::new(pattern.to_owned()).escape('\\')),
                )
                .add(Expr::col(RecipeCatalog::Description).like(LikeExpr::new(pattern).escape('\\'))),
        );
    }

    condition
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts or replaces a catalog row.
    #[tracing::instrument(skip(self, recipe), fields(recipe_id = %recipe.id))]
    pub async fn insert_recipe(&self, recipe: &Recipe, created_at: i64) -> anyhow::Result<()> {
        let ingredients = serde_json::to_string(&recipe.ingredients)?;
        let instructions = serde_json::to_string(&recipe.instructions)?;

        let statement = Query::insert()
            .into_table(RecipeCatalog::Table)
            .columns([
                RecipeCatalog::Id,
                RecipeCatalog::UserId,
                RecipeCatalog::Title,
                RecipeCatalog::Description,
                RecipeCatalog::Cuisine,
                RecipeCatalog::MealType,
                RecipeCatalog::CookTime,
                RecipeCatalog::Servings,
                RecipeCatalog::Calories,
                RecipeCatalog::Protein,
                RecipeCatalog::Carbs,
                RecipeCatalog::Fat,
                RecipeCatalog::Fiber,
                RecipeCatalog::Sugar,
                RecipeCatalog::Ingredients,
                RecipeCatalog::Instructions,
                RecipeCatalog::Difficulty,
                RecipeCatalog::QualityScore,
                RecipeCatalog::PopularityScore,
                RecipeCatalog::MealPrepSuitable,
                RecipeCatalog::Freezable,
                RecipeCatalog::BatchFriendly,
                RecipeCatalog::WeeklyPrepFriendly,
                RecipeCatalog::CreatedAt,
            ])
            .values_panic([
                recipe.id.to_owned().into(),
                recipe.created_by.to_owned().into(),
                recipe.title.to_owned().into(),
                recipe.description.to_owned().into(),
                recipe.cuisine.trim().to_owned().into(),
                recipe.meal_type.map(|m| m.to_string()).into(),
                recipe.cook_time.into(),
                recipe.servings.into(),
                recipe.nutrition.calories.into(),
                recipe.nutrition.protein_g.into(),
                recipe.nutrition.carbs_g.into(),
                recipe.nutrition.fat_g.into(),
                recipe.nutrition.fiber_g.into(),
                recipe.nutrition.sugar_g.into(),
                ingredients.into(),
                instructions.into(),
                recipe.difficulty.map(|d| d.to_string()).into(),
                recipe.external.quality_score.into(),
                recipe.external.popularity_score.into(),
                recipe.flags.meal_prep_suitable.into(),
                recipe.flags.freezable.into(),
                recipe.flags.batch_friendly.into(),
                recipe.flags.weekly_prep_friendly.into(),
                created_at.into(),
            ])
            .on_conflict(
                OnConflict::column(RecipeCatalog::Id)
                    .update_columns([
                        RecipeCatalog::UserId,
                        RecipeCatalog::Title,
                        RecipeCatalog::Description,
                        RecipeCatalog::Cuisine,
                        RecipeCatalog::MealType,
                        RecipeCatalog::CookTime,
                        RecipeCatalog::Servings,
                        RecipeCatalog::Calories,
                        RecipeCatalog::Protein,
                        RecipeCatalog::Carbs,
                        RecipeCatalog::Fat,
                        RecipeCatalog::Fiber,
                        RecipeCatalog::Sugar,
                        RecipeCatalog::Ingredients,
                        RecipeCatalog::Instructions,
                        RecipeCatalog::Difficulty,
                        RecipeCatalog::QualityScore,
                        RecipeCatalog::PopularityScore,
                        RecipeCatalog::MealPrepSuitable,
                        RecipeCatalog::Freezable,
                        RecipeCatalog::BatchFriendly,
                        RecipeCatalog::WeeklyPrepFriendly,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, prefs))]
    pub async fn save_preferences(
        &self,
        user_id: &str,
        prefs: &UserScoringPreferences,
        updated_at: i64,
    ) -> anyhow::Result<()> {
        let liked_cuisines = serde_json::to_string(&prefs.liked_cuisines)?;
        let banned_ingredients = serde_json::to_string(&prefs.banned_ingredients)?;
        let dietary_restrictions = serde_json::to_string(
            &prefs
                .dietary_restrictions
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>(),
        )?;
        let goals = prefs.macro_goals;

        let statement = Query::insert()
            .into_table(UserPreference::Table)
            .columns([
                UserPreference::UserId,
                UserPreference::LikedCuisines,
                UserPreference::BannedIngredients,
                UserPreference::DietaryRestrictions,
                UserPreference::CookTimePreference,
                UserPreference::SpiceLevel,
                UserPreference::SkillLevel,
                UserPreference::DailyCalories,
                UserPreference::DailyProtein,
                UserPreference::DailyCarbs,
                UserPreference::DailyFat,
                UserPreference::FitnessGoal,
                UserPreference::UpdatedAt,
            ])
            .values_panic([
                user_id.to_owned().into(),
                liked_cuisines.into(),
                banned_ingredients.into(),
                dietary_restrictions.into(),
                prefs.cook_time_preference.into(),
                prefs.spice_level.map(|s| s.to_string()).into(),
                prefs.skill_level.map(|s| s.to_string()).into(),
                goals.map(|g| g.daily_calories).into(),
                goals.map(|g| g.daily_protein_g).into(),
                goals.and_then(|g| g.daily_carbs_g).into(),
                goals.and_then(|g| g.daily_fat_g).into(),
                prefs.fitness_goal.map(|f| f.to_string()).into(),
                updated_at.into(),
            ])
            .on_conflict(
                OnConflict::column(UserPreference::UserId)
                    .update_columns([
                        UserPreference::LikedCuisines,
                        UserPreference::BannedIngredients,
                        UserPreference::DietaryRestrictions,
                        UserPreference::CookTimePreference,
                        UserPreference::SpiceLevel,
                        UserPreference::SkillLevel,
                        UserPreference::DailyCalories,
                        UserPreference::DailyProtein,
                        UserPreference::DailyCarbs,
                        UserPreference::DailyFat,
                        UserPreference::FitnessGoal,
                        UserPreference::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    /// Latest like or dislike per user and recipe wins.
    #[tracing::instrument(skip(self))]
    pub async fn record_feedback(
        &self,
        user_id: &str,
        recipe_id: &str,
        liked: bool,
        at: i64,
    ) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(RecipeFeedback::Table)
            .columns([
                RecipeFeedback::UserId,
                RecipeFeedback::RecipeId,
                RecipeFeedback::Liked,
                RecipeFeedback::CreatedAt,
            ])
            .values_panic([
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                liked.into(),
                at.into(),
            ])
            .on_conflict(
                OnConflict::columns([RecipeFeedback::UserId, RecipeFeedback::RecipeId])
                    .update_columns([RecipeFeedback::Liked, RecipeFeedback::CreatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn record_meal(
        &self,
        user_id: &str,
        recipe_id: &str,
        cuisine: &str,
        eaten_at: i64,
    ) -> anyhow::Result<()> {
        let statement = Query::insert()
            .into_table(MealHistory::Table)
            .columns([
                MealHistory::Id,
                MealHistory::UserId,
                MealHistory::RecipeId,
                MealHistory::Cuisine,
                MealHistory::EatenAt,
            ])
            .values_panic([
                ulid::Ulid::new().to_string().into(),
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                cuisine.to_owned().into(),
                eaten_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn feedback_ids(&self, user_id: &str, liked: bool) -> anyhow::Result<Vec<String>> {
        let statement = Query::select()
            .column(RecipeFeedback::RecipeId)
            .from(RecipeFeedback::Table)
            .and_where(Expr::col(RecipeFeedback::UserId).eq(user_id))
            .and_where(Expr::col(RecipeFeedback::Liked).eq(liked))
            .order_by(RecipeFeedback::CreatedAt, Order::Desc)
            .limit(FEEDBACK_HISTORY_LIMIT.into())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn recent_cuisines(
        &self,
        user_id: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<Vec<String>> {
        let since = (now - RECENT_MEAL_WINDOW).unix_timestamp();
        let statement = Query::select()
            .column(MealHistory::Cuisine)
            .from(MealHistory::Table)
            .and_where(Expr::col(MealHistory::UserId).eq(user_id))
            .and_where(Expr::col(MealHistory::EatenAt).gte(since))
            .order_by(MealHistory::EatenAt, Order::Desc)
            .limit(MEAL_HISTORY_LIMIT.into())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(cuisine,)| cuisine).collect())
    }
}

#[async_trait::async_trait]
impl RecipeStore for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn count(&self, predicate: &RecipePredicate) -> anyhow::Result<u64> {
        let statement = Query::select()
            .expr(Func::count(Expr::col(RecipeCatalog::Id)))
            .from(RecipeCatalog::Table)
            .cond_where(recipe_condition(predicate))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    async fn find_candidates(
        &self,
        predicate: &RecipePredicate,
        limit: u32,
        offset: u64,
    ) -> anyhow::Result<Vec<RecipeSummary>> {
        let statement = Query::select()
            .columns(SUMMARY_COLUMNS)
            .from(RecipeCatalog::Table)
            .cond_where(recipe_condition(predicate))
            .order_by(RecipeCatalog::CreatedAt, Order::Desc)
            .order_by(RecipeCatalog::Id, Order::Desc)
            .limit(limit.into())
            .offset(offset)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, SummaryRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self, ids), fields(ids = ids.len()))]
    async fn find_many(&self, ids: &[String]) -> anyhow::Result<Vec<Recipe>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns(SUMMARY_COLUMNS)
            .column(RecipeCatalog::Instructions)
            .from(RecipeCatalog::Table)
            .and_where(Expr::col(RecipeCatalog::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait::async_trait]
impl PreferenceSource for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn load_preferences(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<UserScoringPreferences>> {
        let statement = Query::select()
            .columns([
                UserPreference::UserId,
                UserPreference::LikedCuisines,
                UserPreference::BannedIngredients,
                UserPreference::DietaryRestrictions,
                UserPreference::CookTimePreference,
                UserPreference::SpiceLevel,
                UserPreference::SkillLevel,
                UserPreference::DailyCalories,
                UserPreference::DailyProtein,
                UserPreference::DailyCarbs,
                UserPreference::DailyFat,
                UserPreference::FitnessGoal,
            ])
            .from(UserPreference::Table)
            .and_where(Expr::col(UserPreference::UserId).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, PreferenceRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }
}

#[async_trait::async_trait]
impl BehaviorSource for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn load_behavior(
        &self,
        user_id: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<BehavioralSignal> {
        let (liked_recipe_ids, disliked_recipe_ids, recent_cuisines) = futures::try_join!(
            self.feedback_ids(user_id, true),
            self.feedback_ids(user_id, false),
            self.recent_cuisines(user_id, now),
        )?;

        Ok(BehavioralSignal {
            liked_recipe_ids,
            disliked_recipe_ids,
            recent_cuisines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeedConfig, FeedFilters};

    fn to_sql(predicate: &RecipePredicate) -> String {
        Query::select()
            .column(RecipeCatalog::Id)
            .from(RecipeCatalog::Table)
            .cond_where(recipe_condition(predicate))
            .to_string(SqliteQueryBuilder)
    }

    #[test]
    fn test_condition_for_four_liked_cuisines() {
        let prefs = UserScoringPreferences {
            liked_cuisines: vec![
                "Italian".to_owned(),
                "Thai".to_owned(),
                "Mexican".to_owned(),
                "Indian".to_owned(),
            ],
            cook_time_preference: Some(20),
            ..Default::default()
        };
        let predicate =
            RecipePredicate::for_user(&prefs, &FeedFilters::default(), &FeedConfig::default());
        let sql = to_sql(&predicate);

        assert!(sql.contains(r#""user_id" IS NULL"#), "{sql}");
        assert!(sql.contains(r#""cook_time" <= 30"#), "{sql}");
        for cuisine in ["'italian'", "'thai'", "'mexican'", "'indian'"] {
            assert!(sql.contains(cuisine), "{sql}");
        }
    }

    #[test]
    fn test_search_is_escaped() {
        let predicate = RecipePredicate {
            search: Some("100%_oats".to_owned()),
            ..Default::default()
        };
        let sql = to_sql(&predicate);

        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
        assert_eq!(escape_like("100%_oats"), r"100\%\_oats");
    }
}
