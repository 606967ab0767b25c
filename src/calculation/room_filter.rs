//! Room catalogue search.

use crate::models::{Room, RoomSearch};

fn matches_location(room: &Room, location: Option<&str>) -> bool {
    match location.map(str::trim) {
        None | Some("") => true,
        Some(wanted) => room
            .location
            .to_lowercase()
            .contains(&wanted.to_lowercase()),
    }
}

fn matches_room_type(room: &Room, room_type: Option<&str>) -> bool {
    match room_type.map(str::trim) {
        None | Some("") => true,
        Some(wanted) if wanted.eq_ignore_ascii_case("any") => true,
        Some(wanted) => room.room_type.eq_ignore_ascii_case(wanted),
    }
}

/// Returns true if `room` satisfies every criterion in `search`.
pub fn room_matches(room: &Room, search: &RoomSearch) -> bool {
    let guests = search.guests.unwrap_or(1);

    matches_location(room, search.location.as_deref())
        && room.fits_guests(guests)
        && search.min_price.is_none_or(|min| room.nightly_rate >= min)
        && search.max_price.is_none_or(|max| room.nightly_rate <= max)
        && matches_room_type(room, search.room_type.as_deref())
        && search.amenities.iter().all(|a| room.has_amenity(a))
}

/// Filters the catalogue down to rooms matching `search`, keeping input order.
///
/// Availability is not a search criterion; closed rooms are still listed and
/// rejected at quote time.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::filter_rooms;
/// use stay_engine::models::{Room, RoomSearch};
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "villa-1".to_string(),
///     name: "Frangipani Villa".to_string(),
///     room_type: "villa".to_string(),
///     location: "Ubud, Bali".to_string(),
///     nightly_rate: Decimal::new(250, 0),
///     max_guests: 4,
///     bedrooms: 2,
///     bathrooms: 2,
///     amenities: vec!["pool".to_string()],
///     available: true,
/// };
///
/// let search = RoomSearch {
///     location: Some("ubud".to_string()),
///     guests: Some(2),
///     ..Default::default()
/// };
/// assert_eq!(filter_rooms(std::slice::from_ref(&room), &search).len(), 1);
///
/// let too_many = RoomSearch { guests: Some(6), ..Default::default() };
/// assert!(filter_rooms(&[room], &too_many).is_empty());
/// ```
pub fn filter_rooms<'a>(rooms: &'a [Room], search: &RoomSearch) -> Vec<&'a Room> {
    rooms.iter().filter(|room| room_matches(room, search)).collect()
}
