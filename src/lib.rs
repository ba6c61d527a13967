pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{etl::MockDataEngine, pipeline::ListingPipeline};
pub use domain::model::{BackfillWindow, Listing, Platform, Section};
pub use utils::error::{MockDataError, Result};
