use forkcast_shared::{Difficulty, Recipe, RecipeSummary, SkillLevel};
use forkcast_signals::{COMPLEX_TECHNIQUES, INTERMEDIATE_TECHNIQUES, RecipeText};
use serde::Serialize;

const FACTOR_CAP: u8 = 25;

/// Fields complexity assessment reads.
#[derive(Debug, Clone)]
pub struct ComplexityInput {
    /// Minutes.
    pub cook_time: u32,
    pub ingredient_count: usize,
    pub instruction_count: usize,
    /// Author-declared difficulty.
    pub declared: Option<Difficulty>,
    pub text: RecipeText,
}

impl From<&Recipe> for ComplexityInput {
    fn from(recipe: &Recipe) -> Self {
        Self {
            cook_time: recipe.cook_time,
            ingredient_count: recipe.ingredients.len(),
            instruction_count: recipe.instructions.len(),
            declared: recipe.difficulty,
            text: RecipeText::from_recipe(recipe),
        }
    }
}

/// A summary carries no instructions; the instruction factor sees zero steps.
impl From<&RecipeSummary> for ComplexityInput {
    fn from(recipe: &RecipeSummary) -> Self {
        Self {
            cook_time: recipe.cook_time,
            ingredient_count: recipe.ingredients.len(),
            instruction_count: 0,
            declared: recipe.difficulty,
            text: RecipeText::from_summary(recipe),
        }
    }
}

/// The four 0–25 factors behind a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityFactors {
    pub cook_time: u8,
    pub ingredients: u8,
    pub instructions: u8,
    pub technique: u8,
}

impl ComplexityFactors {
    pub fn total(&self) -> u8 {
        self.cook_time + self.ingredients + self.instructions + self.technique
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityAssessment {
    pub score: u8,
    pub factors: ComplexityFactors,
    /// Bucket derived from `score` alone.
    pub computed: Difficulty,
    /// The harder of `computed` and the author-declared difficulty.
    pub difficulty: Difficulty,
    pub complex_techniques: Vec<&'static str>,
    pub intermediate_techniques: Vec<&'static str>,
}

pub fn assess_recipe_complexity(input: &ComplexityInput) -> ComplexityAssessment {
    let complex_techniques = COMPLEX_TECHNIQUES.matches(&input.text);
    let intermediate_techniques = INTERMEDIATE_TECHNIQUES.matches(&input.text);

    let factors = ComplexityFactors {
        cook_time: cook_time_factor(input.cook_time),
        ingredients: count_factor(input.ingredient_count, [5, 10, 15], [5, 15, 20]),
        instructions: count_factor(input.instruction_count, [3, 6, 10], [5, 15, 20]),
        technique: technique_factor(complex_techniques.len(), intermediate_techniques.len()),
    };

    let score = factors.total();
    let computed = difficulty_for_score(score);
    let difficulty = match input.declared {
        Some(declared) if declared > computed => declared,
        _ => computed,
    };

    ComplexityAssessment {
        score,
        factors,
        computed,
        difficulty,
        complex_techniques,
        intermediate_techniques,
    }
}

pub fn difficulty_for_score(score: u8) -> Difficulty {
    match score {
        0..=30 => Difficulty::Easy,
        31..=60 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

fn cook_time_factor(minutes: u32) -> u8 {
    match minutes {
        0..=15 => 5,
        16..=30 => 10,
        31..=60 => 20,
        _ => FACTOR_CAP,
    }
}

fn count_factor(count: usize, limits: [usize; 3], points: [u8; 3]) -> u8 {
    limits
        .iter()
        .zip(points)
        .find(|(limit, _)| count <= **limit)
        .map(|(_, points)| points)
        .unwrap_or(FACTOR_CAP)
}

fn technique_factor(complex: usize, intermediate: usize) -> u8 {
    let points = if complex > 0 {
        (20 + 2 * complex).min(FACTOR_CAP as usize)
    } else if intermediate > 0 {
        (5 * intermediate).min(15)
    } else {
        0
    };

    points as u8
}

/// 0–100 fit between a cook's skill and the recipe's difficulty. Recipes at or
/// below the cook's level score high, harder ones drop sharply. Neutral 50
/// without a skill level.
pub fn skill_level_match(input: &ComplexityInput, skill: Option<SkillLevel>) -> u8 {
    let Some(skill) = skill else {
        return 50;
    };

    let difficulty = assess_recipe_complexity(input).difficulty;

    match skill.rank() - difficulty.rank() {
        0 => 90,
        1 => 80,
        2.. => 70,
        -1 => 60,
        _ => 30,
    }
}
