//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the storefront
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Room;

use super::types::{
    EngineFile, EngineMetadata, ReminderSettings, RoomsFile, ServerSettings, StorefrontConfig,
};

/// Loads and provides access to the storefront configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/storefront/
/// ├── engine.yaml   # Metadata, reminder defaults, server settings
/// └── rooms.yaml    # Room catalogue
/// ```
///
/// # Example
///
/// ```no_run
/// use stay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/storefront").unwrap();
///
/// let room = loader.get_room("villa-frangipani").unwrap();
/// println!("{}: ${} per night", room.name, room.nightly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StorefrontConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if engine.yaml or rooms.yaml is missing
    /// - [`EngineError::ConfigParseError`] if either file is invalid YAML, or
    ///   the catalogue has a duplicate room id, a non-positive nightly rate,
    ///   or a room that sleeps nobody
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/storefront")?;
    /// # Ok::<(), stay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;

        let rooms_path = path.join("rooms.yaml");
        let rooms_file = Self::load_yaml::<RoomsFile>(&rooms_path)?;
        Self::check_rooms(&rooms_path, &rooms_file.rooms)?;

        Ok(Self {
            config: StorefrontConfig::new(engine, rooms_file.rooms),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_rooms(path: &Path, rooms: &[Room]) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let mut seen = HashSet::new();
        for room in rooms {
            if !seen.insert(room.id.as_str()) {
                return Err(parse_error(format!("duplicate room id '{}'", room.id)));
            }
            if room.nightly_rate <= Decimal::ZERO {
                return Err(parse_error(format!(
                    "room '{}' has non-positive nightly rate {}",
                    room.id, room.nightly_rate
                )));
            }
            if room.max_guests == 0 {
                return Err(parse_error(format!(
                    "room '{}' must sleep at least one guest",
                    room.id
                )));
            }
        }
        Ok(())
    }

    /// Returns the underlying storefront configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Returns the storefront metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the reminder defaults.
    pub fn reminders(&self) -> &ReminderSettings {
        self.config.reminders()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerSettings {
        self.config.server()
    }

    /// Returns the room catalogue in display order.
    pub fn rooms(&self) -> &[Room] {
        self.config.rooms()
    }

    /// Gets a room by its id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] if no room has that id.
    pub fn get_room(&self, room_id: &str) -> EngineResult<&Room> {
        self.rooms()
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| EngineError::RoomNotFound {
                room_id: room_id.to_string(),
            })
    }
}
