//! Room catalogue model and search criteria.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable room or villa in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: String,
    /// Display name of the room.
    pub name: String,
    /// The room type (e.g., "villa", "suite", "deluxe").
    pub room_type: String,
    /// Where the room is located.
    pub location: String,
    /// Price charged per night of stay.
    pub nightly_rate: Decimal,
    /// Maximum number of guests the room sleeps.
    pub max_guests: u32,
    /// Number of bedrooms.
    #[serde(default)]
    pub bedrooms: u32,
    /// Number of bathrooms.
    #[serde(default)]
    pub bathrooms: u32,
    /// Amenities offered (e.g., "pool", "wifi").
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Whether the room is open for booking.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Room {
    /// Returns true if the room offers the amenity (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use stay_engine::models::Room;
    /// use rust_decimal::Decimal;
    ///
    /// let room = Room {
    ///     id: "villa-1".to_string(),
    ///     name: "Frangipani Villa".to_string(),
    ///     room_type: "villa".to_string(),
    ///     location: "Ubud".to_string(),
    ///     nightly_rate: Decimal::new(250, 0),
    ///     max_guests: 4,
    ///     bedrooms: 2,
    ///     bathrooms: 2,
    ///     amenities: vec!["Pool".to_string()],
    ///     available: true,
    /// };
    /// assert!(room.has_amenity("pool"));
    /// assert!(!room.has_amenity("gym"));
    /// ```
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(amenity))
    }

    /// Returns true if the room can sleep the given number of guests.
    pub fn fits_guests(&self, guests: u32) -> bool {
        guests <= self.max_guests
    }
}

/// Criteria for searching the room catalogue.
///
/// Every field is optional; an empty search matches every room that sleeps
/// at least one guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSearch {
    /// Substring to match against the room location (case-insensitive).
    #[serde(default)]
    pub location: Option<String>,
    /// Minimum number of guests the room must sleep.
    #[serde(default)]
    pub guests: Option<u32>,
    /// Lowest acceptable nightly rate (inclusive).
    #[serde(default)]
    pub min_price: Option<Decimal>,
    /// Highest acceptable nightly rate (inclusive).
    #[serde(default)]
    pub max_price: Option<Decimal>,
    /// Room type to match, or "any".
    #[serde(default)]
    pub room_type: Option<String>,
    /// Amenities the room must all offer.
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_room() -> Room {
        Room {
            id: "villa-1".to_string(),
            name: "Frangipani Villa".to_string(),
            room_type: "villa".to_string(),
            location: "Ubud, Bali".to_string(),
            nightly_rate: Decimal::new(250, 0),
            max_guests: 4,
            bedrooms: 2,
            bathrooms: 2,
            amenities: vec!["pool".to_string(), "wifi".to_string()],
            available: true,
        }
    }

    #[test]
    fn test_fits_guests_at_capacity() {
        let room = create_test_room();
        assert!(room.fits_guests(4));
        assert!(!room.fits_guests(5));
    }

    #[test]
    fn test_has_amenity_ignores_case() {
        let room = create_test_room();
        assert!(room.has_amenity("WiFi"));
        assert!(!room.has_amenity("sauna"));
    }

    #[test]
    fn test_deserialize_room_defaults() {
        let json = r#"{
            "id": "suite-3",
            "name": "Garden Suite",
            "room_type": "suite",
            "location": "Canggu",
            "nightly_rate": "120.00",
            "max_guests": 2
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.nightly_rate, Decimal::new(12000, 2));
        assert!(room.available);
        assert!(room.amenities.is_empty());
        assert_eq!(room.bedrooms, 0);
    }

    #[test]
    fn test_deserialize_empty_search() {
        let search: RoomSearch = serde_json::from_str("{}").unwrap();
        assert_eq!(search, RoomSearch::default());
    }
}
