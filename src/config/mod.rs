//! Configuration loading for the Stay Engine.
//!
//! This module loads the storefront configuration from YAML files: engine
//! metadata, reminder defaults, server settings, and the room catalogue.
//!
//! # Example
//!
//! ```no_run
//! use stay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/storefront").unwrap();
//! println!("Loaded storefront: {} ({} rooms)", config.engine().name, config.rooms().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineFile, EngineMetadata, ReminderSettings, RoomsFile, ServerSettings, StorefrontConfig,
};
