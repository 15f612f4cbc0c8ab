use std::sync::OnceLock;

use forkcast_shared::{Recipe, RecipeSummary};
use regex::Regex;

/// Lower-cased concatenation of a recipe's title, description, ingredient
/// lines and (when hydrated) instruction steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeText(String);

impl RecipeText {
    pub fn new<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self(joined.to_lowercase())
    }

    /// Title, description and ingredients. Instructions are not part of the
    /// lightweight projection.
    pub fn from_summary(recipe: &RecipeSummary) -> Self {
        Self::new(
            [recipe.title.as_str(), recipe.description.as_str()]
                .into_iter()
                .chain(recipe.ingredients.iter().map(String::as_str)),
        )
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self::new(
            [recipe.title.as_str(), recipe.description.as_str()]
                .into_iter()
                .chain(recipe.ingredients.iter().map(String::as_str))
                .chain(recipe.instructions.iter().map(String::as_str)),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

/// How a keyword is tested against text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    Substring,
    WholeWord,
}

/// A named, immutable list of lower-case keywords.
///
/// Whole-word families compile one `\b`-delimited regex per keyword the first
/// time they are used; the patterns are then shared for the life of the
/// process.
#[derive(Debug)]
pub struct KeywordFamily {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub matching: Matching,
    word_patterns: OnceLock<Vec<Regex>>,
}

impl KeywordFamily {
    pub const fn substring(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Self {
            name,
            keywords,
            matching: Matching::Substring,
            word_patterns: OnceLock::new(),
        }
    }

    pub const fn whole_word(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Self {
            name,
            keywords,
            matching: Matching::WholeWord,
            word_patterns: OnceLock::new(),
        }
    }

    /// Keywords of this family present in `text`, in table order. Each
    /// keyword is reported at most once.
    pub fn matches(&self, text: &RecipeText) -> Vec<&'static str> {
        self.present(text.as_str()).collect()
    }

    /// First keyword in table order present in `text`.
    pub fn first_match(&self, text: &RecipeText) -> Option<&'static str> {
        self.present(text.as_str()).next()
    }

    pub fn count(&self, text: &RecipeText) -> usize {
        self.present(text.as_str()).count()
    }

    pub fn any(&self, text: &RecipeText) -> bool {
        self.present(text.as_str()).next().is_some()
    }

    /// Matches a single free-standing value such as a cuisine name.
    pub fn matches_value(&self, value: &str) -> bool {
        self.present(&value.to_lowercase()).next().is_some()
    }

    fn present<'a>(&'a self, haystack: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        let patterns = match self.matching {
            Matching::Substring => None,
            Matching::WholeWord => Some(self.word_patterns()),
        };

        self.keywords
            .iter()
            .enumerate()
            .filter(move |(index, keyword)| match patterns {
                Some(patterns) => patterns[*index].is_match(haystack),
                None => haystack.contains(*keyword),
            })
            .map(|(_, keyword)| *keyword)
    }

    fn word_patterns(&self) -> &[Regex] {
        self.word_patterns
            .get_or_init(|| self.keywords.iter().map(|word| word_pattern(word)).collect())
    }
}

/// `word` delimited by word boundaries on both sides.
pub fn word_pattern(word: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).unwrap()
}
