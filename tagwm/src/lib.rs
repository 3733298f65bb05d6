//! Configuration front end of tagwm: reads `config.toml`, turns it into the
//! settings `tagwm-core` runs on and sets up logging.
mod command;
mod config;
pub mod utils;

pub use command::BaseCommand;
pub use config::*;
