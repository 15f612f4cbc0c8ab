use forkcast_shared::{NutritionFacts, RecipeSummary};
use forkcast_similarity::{SimilarityOptions, broaden_search, find_similar};

fn recipe(
    id: &str,
    cuisine: &str,
    title: &str,
    cook_time: u32,
    calories: f64,
    ingredients: &[&str],
) -> RecipeSummary {
    RecipeSummary {
        id: id.to_owned(),
        title: title.to_owned(),
        cuisine: cuisine.to_owned(),
        cook_time,
        nutrition: NutritionFacts {
            calories,
            protein_g: 20.0,
            carbs_g: 50.0,
            fat_g: 15.0,
            ..Default::default()
        },
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        ..Default::default()
    }
}

fn pool() -> Vec<RecipeSummary> {
    vec![
        recipe(
            "carbonara",
            "Italian",
            "Spaghetti Carbonara",
            25,
            650.0,
            &["200g spaghetti", "2 eggs", "100g pancetta", "50g parmesan"],
        ),
        recipe(
            "cacio",
            "Italian",
            "Cacio e Pepe Spaghetti",
            20,
            600.0,
            &["200g spaghetti", "50g parmesan", "1 tsp black pepper"],
        ),
        recipe(
            "ramen",
            "Japanese",
            "Shoyu Ramen",
            40,
            550.0,
            &["ramen noodles", "2 eggs", "soy sauce"],
        ),
        recipe(
            "tacos",
            "Mexican",
            "Fish Tacos",
            20,
            450.0,
            &["tortillas", "white fish", "lime"],
        ),
    ]
}

#[test]
fn test_target_never_matches_itself() {
    let pool = pool();
    let target = pool[0].clone();

    let options = SimilarityOptions {
        min_score: 0.0,
        ..Default::default()
    };
    let results = find_similar(&target, &pool, &options);

    assert!(results.iter().all(|r| r.recipe_id != "carbonara"));
    assert_eq!(results.len(), 3);
}

#[test]
fn test_more_like_this_ranking() {
    let pool = pool();
    let results = find_similar(&pool[0], &pool, &SimilarityOptions::default());

    // Setup: cacio shares cuisine, spaghetti and parmesan with carbonara
    assert_eq!(results[0].recipe_id, "cacio");
    assert_eq!(results[0].breakdown.cuisine, 1.0);
    assert!((results[0].breakdown.ingredients - 0.4).abs() < 1e-9);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(results.iter().all(|r| r.score >= 0.1));
}

#[test]
fn test_limit_is_respected() {
    let pool = pool();
    let options = SimilarityOptions {
        limit: 1,
        min_score: 0.0,
        ..Default::default()
    };

    assert_eq!(find_similar(&pool[0], &pool, &options).len(), 1);
}

#[test]
fn test_broaden_taco_search() {
    let exact = vec![recipe(
        "tacos",
        "Mexican",
        "Fish Tacos",
        20,
        450.0,
        &["tortillas"],
    )];
    let pool = vec![
        exact[0].clone(),
        recipe("burrito", "Tex-Mex", "Bean Burrito", 15, 500.0, &[]),
        recipe("pozole", "Mexican", "Pork Pozole", 90, 500.0, &[]),
        recipe("fish", "British", "Fish and Chips", 30, 800.0, &[]),
        recipe("sushi", "Japanese", "Salmon Nigiri", 30, 300.0, &[]),
    ];

    let results = broaden_search("fish tacos", &exact, &pool, 10);
    let ids = results.iter().map(|r| r.recipe_id.as_str()).collect::<Vec<_>>();

    // exact match excluded, unrelated sushi has no signal
    assert_eq!(ids, vec!["pozole", "burrito", "fish"]);
    assert_eq!(results[0].breakdown.cuisine, 0.5);
    assert_eq!(results[1].breakdown.related_dish, 0.4);
    assert!(results[2].breakdown.query_keywords > 0.0);
}
