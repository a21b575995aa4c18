use crate::domain::{Restaurant, RestaurantTable};

use super::selection::FilterSelection;

/// Apply the full filter conjunction, producing a fresh filtered view.
/// An empty result is valid output, not an error.
pub fn apply(table: &RestaurantTable, selection: &FilterSelection) -> RestaurantTable {
    table.filtered(|restaurant| matches(restaurant, selection))
}

fn matches(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    matches_continent(restaurant, selection)
        && matches_city(restaurant, selection)
        && matches_award(restaurant, selection)
        && matches_price_level(restaurant, selection)
        && matches_cuisines(restaurant, selection)
        && matches_facilities(restaurant, selection)
}

fn matches_continent(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    match selection.continent {
        // Rows without a mapped continent never match a continent filter
        Some(continent) => restaurant.continent == Some(continent),
        None => true,
    }
}

fn matches_city(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    match &selection.city {
        Some(city) => restaurant.city == *city,
        None => true,
    }
}

fn matches_award(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    match selection.award {
        Some(award) => restaurant.award == Some(award),
        None => true,
    }
}

fn matches_price_level(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    match selection.price_level {
        Some(level) => restaurant.price_level == Some(level),
        None => true,
    }
}

/// OR across selected cuisines: any match qualifies
fn matches_cuisines(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    if selection.cuisines.is_empty() {
        return true;
    }

    selection
        .cuisines
        .iter()
        .any(|cuisine| restaurant.has_cuisine(cuisine))
}

/// AND across selected facilities: all must be present
fn matches_facilities(restaurant: &Restaurant, selection: &FilterSelection) -> bool {
    selection
        .facilities
        .iter()
        .all(|facility| restaurant.has_facility(facility))
}
