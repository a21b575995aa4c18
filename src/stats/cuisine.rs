use std::collections::HashMap;

use crate::domain::{Award, Restaurant, RestaurantTable};

use super::types::{AwardBucket, CuisineCount, CuisineStats};

/// Rank cuisines by restaurant membership count, descending.
///
/// A restaurant listing two cuisines contributes one to each, not two in
/// total. Equal counts break lexicographically by cuisine name so the
/// ranking is reproducible run to run.
pub fn rank_cuisines(table: &RestaurantTable, top_n: usize) -> Vec<CuisineCount> {
    let counts = count_by_cuisine(table);

    let mut ranking: Vec<CuisineCount> = counts
        .into_iter()
        .map(|(cuisine, count)| CuisineCount { cuisine, count })
        .collect();

    sort_ranking(&mut ranking);
    ranking.truncate(top_n);

    ranking
}

fn count_by_cuisine(table: &RestaurantTable) -> HashMap<String, usize> {
    let mut counts = HashMap::new();

    for restaurant in table.iter() {
        for cuisine in &restaurant.cuisines {
            *counts.entry(cuisine.clone()).or_insert(0) += 1;
        }
    }

    counts
}

fn sort_ranking(ranking: &mut [CuisineCount]) {
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.cuisine.cmp(&b.cuisine)));
}

/// Grouped statistics for each listed cuisine, restricted to restaurants
/// containing it. Shared by every consumer so chart numbers agree.
pub fn cuisine_stats(table: &RestaurantTable, cuisines: &[String]) -> Vec<CuisineStats> {
    cuisines
        .iter()
        .map(|cuisine| stats_for_cuisine(table, cuisine))
        .collect()
}

fn stats_for_cuisine(table: &RestaurantTable, cuisine: &str) -> CuisineStats {
    let rows: Vec<&Restaurant> = table.iter().filter(|r| r.has_cuisine(cuisine)).collect();

    let restaurant_count = rows.len();
    let star_scores = collect_star_scores(&rows);
    let starred_count = star_scores.len();

    CuisineStats {
        cuisine: cuisine.to_string(),
        restaurant_count,
        avg_price_level: mean_price_level(&rows),
        starred_count,
        starred_percentage: percentage(starred_count, restaurant_count),
        avg_award_score: mean_or_zero(&star_scores),
    }
}

/// Star scores of the starred subset only; Bib Gourmand and missing
/// awards never enter the award-score mean.
fn collect_star_scores(rows: &[&Restaurant]) -> Vec<f64> {
    rows.iter()
        .filter_map(|r| r.award.and_then(|a| a.star_score()))
        .map(f64::from)
        .collect()
}

fn mean_price_level(rows: &[&Restaurant]) -> f64 {
    let levels: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.price_level)
        .map(f64::from)
        .collect();

    mean_or_zero(&levels)
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Restaurant counts per (cuisine, award tier), all four tiers included.
/// Empty buckets are omitted.
pub fn award_distribution(table: &RestaurantTable, cuisines: &[String]) -> Vec<AwardBucket> {
    let mut buckets = Vec::new();

    for cuisine in cuisines {
        for award in Award::ALL {
            let count = table
                .iter()
                .filter(|r| r.has_cuisine(cuisine) && r.award == Some(award))
                .count();

            if count > 0 {
                buckets.push(AwardBucket {
                    cuisine: cuisine.clone(),
                    award,
                    count,
                });
            }
        }
    }

    buckets
}
