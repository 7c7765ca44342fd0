pub mod browser;
mod config;
mod parse_result;
pub mod platform;

pub use config::*;
pub use parse_result::*;
