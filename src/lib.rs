pub mod config;
pub mod db;
pub mod fixture;
pub mod observability;

pub use config::Config;
