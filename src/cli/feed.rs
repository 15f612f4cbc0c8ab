use forkcast::Config;
use forkcast_feed::{
    Feed, FeedFilters, FeedRequest, PreferenceSource, RecipePredicate, RecipeStore,
};
use forkcast_scoring::{advanced_match, recommend_batch_cooking};
use forkcast_shared::MealType;
use time::OffsetDateTime;

use super::{open_store, print_json};

pub struct FeedArgs {
    pub user: String,
    pub page: u32,
    pub limit: Option<u32>,
    pub meal_type: Option<MealType>,
    pub max_cook_time: Option<u32>,
    pub search: Option<String>,
    pub full: bool,
}

#[tracing::instrument(skip_all, fields(user_id = %args.user))]
pub async fn feed(config: Config, args: FeedArgs) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let feed = Feed::new(store, config.feed);

    let request = FeedRequest {
        user_id: args.user,
        page: args.page,
        limit: args.limit,
        filters: FeedFilters {
            meal_type: args.meal_type,
            max_cook_time: args.max_cook_time,
            search: args.search,
        },
        full: args.full,
    };

    let page = feed.recommend(request, OffsetDateTime::now_utc()).await?;

    print_json(&page)
}

#[tracing::instrument(skip(config))]
pub async fn batch(config: Config, user: String, limit: Option<u32>) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    let Some(prefs) = store.load_preferences(&user).await? else {
        anyhow::bail!("no scoring preferences stored for user {user}");
    };

    let limit = config.feed.page_limit(limit);
    let predicate = RecipePredicate::for_user(&prefs, &FeedFilters::default(), &config.feed);
    let candidates = store
        .find_candidates(&predicate, config.feed.max_candidates, 0)
        .await?;

    tracing::debug!(candidates = candidates.len(), "ranking batch candidates");

    let ranked = recommend_batch_cooking(&candidates, &prefs, limit as usize);

    print_json(&ranked)
}

#[tracing::instrument(skip(config))]
pub async fn match_recipe(config: Config, recipe_id: String, user: String) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    let Some(prefs) = store.load_preferences(&user).await? else {
        anyhow::bail!("no scoring preferences stored for user {user}");
    };
    let Some(recipe) = store.find_by_id(&recipe_id).await? else {
        anyhow::bail!("recipe {recipe_id} not found");
    };

    print_json(&advanced_match(&recipe, &prefs))
}
