pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::FileQuestionSource;
pub use config::ServerConfig;
pub use core::inventory::Inventory;
pub use utils::error::{InventoryError, Result};
