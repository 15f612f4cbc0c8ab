//! Ingredient quantity parsing, unit normalisation and shopping-list
//! aggregation.
//!
//! Parsing never fails: a line no pattern understands becomes `1 piece` of
//! the whole line.

mod aggregate;
mod density;
mod parse;
mod unit;

pub use aggregate::*;
pub use density::*;
pub use parse::*;
pub use unit::*;
