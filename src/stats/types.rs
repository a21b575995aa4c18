use std::str::FromStr;

use ndarray::Array2;

use crate::domain::Award;

/// One row of the top-N cuisine ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: usize,
}

/// Grouped statistics for one cuisine over the filtered table
#[derive(Debug, Clone, PartialEq)]
pub struct CuisineStats {
    pub cuisine: String,
    pub restaurant_count: usize,
    pub avg_price_level: f64,
    pub starred_count: usize,
    pub starred_percentage: f64,
    pub avg_award_score: f64,
}

/// Restaurant count for one (cuisine, award tier) bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardBucket {
    pub cuisine: String,
    pub award: Award,
    pub count: usize,
}

/// Scalar metrics bundle for the dashboard header
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub total_restaurants: usize,
    pub unique_cities: usize,
    pub selected_cuisines: usize,
    pub starred_percentage: f64,
}

/// Map-ready city marker
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub city: String,
    pub count: usize,
    pub latitude: f64,
    pub longitude: f64,
}

/// Dimension used to partition the table for facility prevalence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stratifier {
    AwardTier,
    PriceLevel,
}

impl Stratifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stratifier::AwardTier => "award",
            Stratifier::PriceLevel => "price",
        }
    }
}

impl FromStr for Stratifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "award" => Ok(Stratifier::AwardTier),
            "price" => Ok(Stratifier::PriceLevel),
            _ => Err(format!("Unknown stratifier: {} (expected award or price)", s)),
        }
    }
}

/// Facility prevalence rates, facilities × strata, in percent
#[derive(Debug, Clone)]
pub struct PrevalenceTable {
    facilities: Vec<String>,
    strata: Vec<String>,
    rates: Array2<f64>,
}

impl PrevalenceTable {
    pub fn new(facilities: Vec<String>, strata: Vec<String>, rates: Array2<f64>) -> Self {
        debug_assert_eq!(rates.dim(), (facilities.len(), strata.len()));
        Self {
            facilities,
            strata,
            rates,
        }
    }

    pub fn facilities(&self) -> &[String] {
        &self.facilities
    }

    pub fn strata(&self) -> &[String] {
        &self.strata
    }

    /// Prevalence percentage for one (facility, stratum) cell
    pub fn rate(&self, facility_idx: usize, stratum_idx: usize) -> f64 {
        self.rates[[facility_idx, stratum_idx]]
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}
