mod date;
pub mod recipe;
pub mod user;

pub use date::*;
pub use recipe::*;
pub use user::*;
