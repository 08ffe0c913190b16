use crate::core::filters::{matches_room_filter, validate_room_filter};
use crate::error::EngineError;
use crate::models::{RoomFilter, RoomListing, RoomSortKey};
use std::cmp::Ordering;

/// Filter and order room listings
///
/// Listings are not scored; the filter is a plain conjunction and ties in the
/// sort key fall back to ascending listing id.
pub fn search_rooms<I>(
    rooms: I,
    filter: &RoomFilter,
    sort: RoomSortKey,
) -> Result<Vec<RoomListing>, EngineError>
where
    I: IntoIterator<Item = RoomListing>,
{
    validate_room_filter(filter)?;

    let mut results: Vec<RoomListing> = rooms
        .into_iter()
        .filter(|room| matches_room_filter(room, filter))
        .collect();

    results.sort_by(|a, b| compare_rooms(a, b, sort));

    Ok(results)
}

fn compare_rooms(a: &RoomListing, b: &RoomListing, sort: RoomSortKey) -> Ordering {
    let primary = match sort {
        RoomSortKey::PriceAsc => a.price.cmp(&b.price),
        RoomSortKey::PriceDesc => b.price.cmp(&a.price),
        RoomSortKey::AvailableSoonest => a.available_from.cmp(&b.available_from),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}
