//! Deterministic, rule-based recipe scorers.
//!
//! Every function in this crate is a pure function of its arguments: no clock,
//! no I/O, no shared state. Time-aware scorers take a
//! [`TemporalContext`](forkcast_shared::TemporalContext) parameter instead of
//! reading the wall clock.
//!
//! Scorers work on narrow input views ([`QuickInput`], [`FullInput`],
//! [`SpiceInput`], [`ComplexityInput`], [`HealthInput`]) built from a
//! [`RecipeSummary`](forkcast_shared::RecipeSummary) or
//! [`Recipe`](forkcast_shared::Recipe), so each contract names exactly the
//! fields it reads.

mod advanced;
mod batch;
mod complexity;
mod dietary;
mod full;
mod health;
mod quick;
mod spice;
mod verdict;

pub use advanced::*;
pub use batch::*;
pub use complexity::*;
pub use dietary::*;
pub use full::*;
pub use health::*;
pub use quick::*;
pub use spice::*;
pub use verdict::*;

pub(crate) fn clamp_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
