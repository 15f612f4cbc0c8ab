use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use forkcast_shared::MealType;

mod cli;

/// forkcast - tiered recipe scoring and recommendations
#[derive(Parser)]
#[command(name = "forkcast")]
#[command(about = "Recipe scoring and personalised recommendations", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Load recipes, preferences and history from a JSON fixture
    Import {
        #[arg(long)]
        file: PathBuf,
    },
    /// Recommend a page of recipes for a user
    Feed {
        #[arg(long)]
        user: String,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        meal_type: Option<MealType>,

        /// Minutes
        #[arg(long)]
        max_cook_time: Option<u32>,

        #[arg(long)]
        search: Option<String>,

        /// Also compute Full Score for the returned page
        #[arg(long)]
        full: bool,
    },
    /// Health grade, spice level and complexity of a recipe
    Grade {
        #[arg(long)]
        recipe: String,
    },
    /// Recipes most similar to the given one
    Similar {
        #[arg(long)]
        recipe: String,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Search the catalog and widen the results with related recipes
    Search {
        #[arg(long)]
        query: String,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Rank batch-cooking candidates for a user
    Batch {
        #[arg(long)]
        user: String,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Spice, skill and dietary fit of a recipe for a user
    Match {
        #[arg(long)]
        recipe: String,

        #[arg(long)]
        user: String,
    },
    /// Aggregate the ingredients of several recipes into a shopping list
    Shopping {
        #[arg(long = "recipe", required = true)]
        recipes: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = forkcast::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    forkcast::observability::init_observability(
        "forkcast",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => forkcast::db::migrate(&config.database.url).await,
        Commands::Reset => forkcast::db::reset(&config.database.url).await,
        Commands::Import { file } => cli::catalog::import(config, file).await,
        Commands::Feed {
            user,
            page,
            limit,
            meal_type,
            max_cook_time,
            search,
            full,
        } => {
            let args = cli::feed::FeedArgs {
                user,
                page,
                limit,
                meal_type,
                max_cook_time,
                search,
                full,
            };
            cli::feed::feed(config, args).await
        }
        Commands::Grade { recipe } => cli::catalog::grade(config, recipe).await,
        Commands::Similar {
            recipe,
            limit,
            min_score,
        } => cli::catalog::similar(config, recipe, limit, min_score).await,
        Commands::Search { query, limit } => cli::catalog::search(config, query, limit).await,
        Commands::Batch { user, limit } => cli::feed::batch(config, user, limit).await,
        Commands::Match { recipe, user } => cli::feed::match_recipe(config, recipe, user).await,
        Commands::Shopping { recipes } => cli::catalog::shopping(config, recipes).await,
    }
}
