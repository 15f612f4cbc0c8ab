//! Tiered recommendation feed.
//!
//! A request flows through five stages: build the candidate predicate from the
//! user's preferences, over-fetch light rows, Quick Score and prune, truncate
//! to the page size, then hydrate only the survivors. Full Score is applied to
//! the hydrated page on request.

mod config;
mod error;
mod memory;
mod pipeline;
mod predicate;
mod store;

pub use config::*;
pub use error::*;
pub use memory::*;
pub use pipeline::*;
pub use predicate::*;
pub use store::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod sqlite;

        pub use sqlite::*;
    }
}
