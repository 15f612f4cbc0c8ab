//! "More like this" ranking and search broadening over a candidate pool.
//!
//! Both entry points are pure and rank with a stable sort, so equal scores
//! keep the pool's order.

mod broaden;
mod features;
mod similar;

pub use broaden::*;
pub use features::*;
pub use similar::*;
