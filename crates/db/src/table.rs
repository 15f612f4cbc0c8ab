use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum RecipeCatalog {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Cuisine,
    MealType,
    CookTime,
    Servings,
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    Ingredients,
    Instructions,
    Difficulty,
    QualityScore,
    PopularityScore,
    MealPrepSuitable,
    Freezable,
    BatchFriendly,
    WeeklyPrepFriendly,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum UserPreference {
    Table,
    UserId,
    LikedCuisines,
    BannedIngredients,
    DietaryRestrictions,
    CookTimePreference,
    SpiceLevel,
    SkillLevel,
    DailyCalories,
    DailyProtein,
    DailyCarbs,
    DailyFat,
    FitnessGoal,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeFeedback {
    Table,
    UserId,
    RecipeId,
    Liked,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealHistory {
    Table,
    Id,
    UserId,
    RecipeId,
    Cuisine,
    EatenAt,
}
