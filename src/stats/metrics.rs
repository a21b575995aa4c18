use crate::domain::RestaurantTable;
use crate::filter::FilterSelection;

use super::types::SummaryMetrics;

/// Scalar metrics bundle over the currently filtered table.
///
/// When no cuisines are explicitly selected the selected-cuisine metric
/// falls back to the size of the default top-N ranking, mirroring the
/// dashboard's default multiselect.
pub fn summary_metrics(
    filtered: &RestaurantTable,
    selection: &FilterSelection,
    default_cuisine_count: usize,
) -> SummaryMetrics {
    let selected_cuisines = if selection.cuisines.is_empty() {
        default_cuisine_count
    } else {
        selection.cuisines.len()
    };

    SummaryMetrics {
        total_restaurants: filtered.len(),
        unique_cities: filtered.cities(None).len(),
        selected_cuisines,
        starred_percentage: starred_percentage(filtered),
    }
}

/// Share of restaurants holding a star tier, in percent; 0 for an empty
/// table rather than a division error.
pub fn starred_percentage(table: &RestaurantTable) -> f64 {
    if table.is_empty() {
        return 0.0;
    }

    let starred = table.iter().filter(|r| r.is_starred()).count();
    starred as f64 / table.len() as f64 * 100.0
}
