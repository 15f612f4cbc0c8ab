//! Keyword-family extractors over recipe text.
//!
//! Every scorer that reads free text goes through [`RecipeText`] and one of
//! the static [`KeywordFamily`] tables defined here, so matching rules live
//! in a single place:
//! - most families use case-insensitive substring containment
//! - dietary violators and heat words use whole-word matching, so "butter"
//!   never matches inside "butterfly"

mod dietary;
mod keywords;
mod text;

pub use dietary::*;
pub use keywords::*;
pub use text::*;
