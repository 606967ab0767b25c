//! Configuration types for the storefront.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{DEFAULT_REMINDER_WINDOW_DAYS, Room};

/// Metadata identifying the storefront deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Short code for the storefront (e.g., "villa-bali").
    pub code: String,
    /// Human-readable storefront name.
    pub name: String,
    /// Version of this configuration.
    pub version: String,
    /// Currency the catalogue prices are quoted in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Defaults applied when reminder records leave fields unset.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderSettings {
    /// Reminder window for documents that do not carry their own.
    #[serde(default = "default_reminder_window_days")]
    pub default_reminder_window_days: u32,
}

fn default_reminder_window_days() -> u32 {
    DEFAULT_REMINDER_WINDOW_DAYS
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            default_reminder_window_days: DEFAULT_REMINDER_WINDOW_DAYS,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address the API listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Structure of engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Storefront metadata.
    pub engine: EngineMetadata,
    /// Reminder defaults.
    #[serde(default)]
    pub reminders: ReminderSettings,
    /// Server settings.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Structure of rooms.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsFile {
    /// The room catalogue, in display order.
    pub rooms: Vec<Room>,
}

/// The complete storefront configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    metadata: EngineMetadata,
    reminders: ReminderSettings,
    server: ServerSettings,
    rooms: Vec<Room>,
}

impl StorefrontConfig {
    /// Creates a new StorefrontConfig from its component parts.
    pub fn new(engine: EngineFile, rooms: Vec<Room>) -> Self {
        Self {
            metadata: engine.engine,
            reminders: engine.reminders,
            server: engine.server,
            rooms,
        }
    }

    /// Returns the storefront metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the reminder defaults.
    pub fn reminders(&self) -> &ReminderSettings {
        &self.reminders
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.server
    }

    /// Returns the room catalogue.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
