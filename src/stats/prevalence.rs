use std::collections::HashMap;

use ndarray::Array2;

use crate::domain::{Award, Restaurant, RestaurantTable};

use super::types::{PrevalenceTable, Stratifier};

pub const DEFAULT_FACILITY_LIMIT: usize = 15;

const PRICE_LEVELS: usize = 4;

/// The most frequently listed facilities, descending; equal counts break
/// lexicographically.
pub fn top_facilities(table: &RestaurantTable, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for restaurant in table.iter() {
        for facility in &restaurant.facilities {
            *counts.entry(facility.clone()).or_insert(0) += 1;
        }
    }

    let mut facilities: Vec<(String, usize)> = counts.into_iter().collect();
    facilities.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    facilities.truncate(limit);

    facilities.into_iter().map(|(facility, _)| facility).collect()
}

/// Prevalence of the top facilities across award-tier or price-level
/// strata: the percentage of each stratum's restaurants listing the
/// facility. An empty stratum reports 0 for every facility.
pub fn facility_prevalence(
    table: &RestaurantTable,
    limit: usize,
    stratifier: Stratifier,
) -> PrevalenceTable {
    let facilities = top_facilities(table, limit);
    let strata = stratum_labels(stratifier);

    let mut rates = Array2::<f64>::zeros((facilities.len(), strata.len()));
    let mut stratum_sizes = vec![0usize; strata.len()];

    for restaurant in table.iter() {
        let Some(stratum) = stratum_index(restaurant, stratifier) else {
            continue;
        };

        stratum_sizes[stratum] += 1;

        for (row, facility) in facilities.iter().enumerate() {
            if restaurant.has_facility(facility) {
                rates[[row, stratum]] += 1.0;
            }
        }
    }

    for (stratum, &size) in stratum_sizes.iter().enumerate() {
        if size == 0 {
            continue;
        }
        for row in 0..facilities.len() {
            rates[[row, stratum]] = rates[[row, stratum]] / size as f64 * 100.0;
        }
    }

    PrevalenceTable::new(facilities, strata, rates)
}

fn stratum_labels(stratifier: Stratifier) -> Vec<String> {
    match stratifier {
        Stratifier::AwardTier => Award::STAR_TIERS
            .iter()
            .map(|award| award.as_str().to_string())
            .collect(),
        Stratifier::PriceLevel => (1..=PRICE_LEVELS)
            .map(|level| format!("Price level {}", level))
            .collect(),
    }
}

/// Column index of the stratum this restaurant belongs to, if any.
/// Bib Gourmand and unawarded rows are outside every award-tier stratum.
fn stratum_index(restaurant: &Restaurant, stratifier: Stratifier) -> Option<usize> {
    match stratifier {
        Stratifier::AwardTier => restaurant
            .award
            .and_then(|award| award.star_score())
            .map(|score| (score - 1) as usize),
        Stratifier::PriceLevel => restaurant
            .price_level
            .map(|level| (level - 1) as usize)
            .filter(|&idx| idx < PRICE_LEVELS),
    }
}
