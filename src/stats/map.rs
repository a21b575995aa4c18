use std::collections::HashMap;

use crate::config::lookup_city;
use crate::domain::RestaurantTable;

use super::types::MapPoint;

/// Per-city restaurant counts joined with the static coordinate table.
/// Cities without coordinates are silently excluded from the map.
pub fn map_points(table: &RestaurantTable) -> Vec<MapPoint> {
    let counts = count_by_city(table);

    let mut points: Vec<MapPoint> = counts
        .into_iter()
        .filter_map(|(city, count)| {
            lookup_city(&city).map(|(latitude, longitude)| MapPoint {
                city,
                count,
                latitude,
                longitude,
            })
        })
        .collect();

    points.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
    points
}

fn count_by_city(table: &RestaurantTable) -> HashMap<String, usize> {
    let mut counts = HashMap::new();

    for restaurant in table.iter() {
        if restaurant.city.is_empty() {
            continue;
        }
        *counts.entry(restaurant.city.clone()).or_insert(0) += 1;
    }

    counts
}
