use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::cache::{TableCache, source_hash};
use crate::dataset;
use crate::domain::{Normalizer, RestaurantTable};
use crate::filter::{self, FilterSelection};
use crate::stats::{
    self, AwardBucket, CuisineCount, CuisineStats, MapPoint, PrevalenceTable, Stratifier,
    SummaryMetrics,
};

pub const DEFAULT_TOP_N: usize = 10;

/// Knobs for one rendered view
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub top_n: usize,
    pub facility_limit: usize,
    pub stratifier: Stratifier,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            facility_limit: stats::DEFAULT_FACILITY_LIMIT,
            stratifier: Stratifier::AwardTier,
        }
    }
}

/// Session-scoped dashboard: the normalized table loaded once, views
/// recomputed per interaction.
pub struct Dashboard {
    table: RestaurantTable,
}

/// Everything one interaction cycle produces. All values derive from the
/// same filtered snapshot, so chart numbers agree by construction.
pub struct DashboardView {
    pub metrics: SummaryMetrics,
    pub ranking: Vec<CuisineCount>,
    pub cuisine_stats: Vec<CuisineStats>,
    pub award_distribution: Vec<AwardBucket>,
    pub prevalence: PrevalenceTable,
    pub map_points: Vec<MapPoint>,
    pub filtered: RestaurantTable,
}

impl Dashboard {
    /// Load and normalize the dataset once. The normalized table is
    /// memoized on disk keyed by source content, so repeated runs over an
    /// unchanged source skip normalization. A failed read logs once and
    /// yields an empty (but valid) dashboard.
    pub fn load(source: &Path, cache_dir: Option<&Path>) -> Result<Self> {
        let normalizer = Normalizer::new()?;

        let Some(dir) = cache_dir else {
            return Ok(Self::from_table(dataset::load_table(source, &normalizer)));
        };

        let bytes = match dataset::read_source(source) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("{:#}; continuing with an empty table", err);
                return Ok(Self::from_table(RestaurantTable::new()));
            }
        };

        let hash = source_hash(&bytes);
        let key = cache_key(source);

        match TableCache::new(dir).and_then(|cache| cache.load(&key, hash)) {
            Ok(Some(table)) => return Ok(Self::from_table(table)),
            Ok(None) => {}
            Err(err) => warn!("{:#}; renormalizing", err),
        }

        let records = dataset::parse_records(&bytes);
        let table = normalizer.normalize_all(&records);
        info!(
            "Loaded {} restaurants from {}",
            table.len(),
            source.display()
        );

        if let Err(err) = TableCache::new(dir).and_then(|cache| cache.save(&key, hash, &table)) {
            warn!("{:#}", err);
        }

        Ok(Self::from_table(table))
    }

    pub fn from_table(table: RestaurantTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RestaurantTable {
        &self.table
    }

    /// One interaction cycle: reconcile the selection, filter, aggregate.
    pub fn view(&self, selection: &FilterSelection, options: ViewOptions) -> DashboardView {
        let selection = selection.reconciled(&self.table);
        let filtered = filter::apply(&self.table, &selection);

        let ranking = stats::rank_cuisines(&filtered, options.top_n);
        let ranked_names: Vec<String> = ranking.iter().map(|c| c.cuisine.clone()).collect();

        DashboardView {
            metrics: stats::summary_metrics(&filtered, &selection, ranking.len()),
            cuisine_stats: stats::cuisine_stats(&filtered, &ranked_names),
            award_distribution: stats::award_distribution(&filtered, &ranked_names),
            prevalence: stats::facility_prevalence(
                &filtered,
                options.facility_limit,
                options.stratifier,
            ),
            map_points: stats::map_points(&filtered),
            ranking,
            filtered,
        }
    }
}

fn cache_key(source: &Path) -> String {
    source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Award, Continent, Restaurant};
    use std::fs;

    fn restaurant(
        name: &str,
        city: &str,
        continent: Option<Continent>,
        cuisines: &[&str],
        award: Option<Award>,
        price_level: Option<u8>,
    ) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            location: String::new(),
            city: city.to_string(),
            country: String::new(),
            continent,
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            facilities: Vec::new(),
            price_symbol: None,
            price_level,
            award,
            description: String::new(),
        }
    }

    fn sample_dashboard() -> Dashboard {
        Dashboard::from_table(RestaurantTable::from_vec(vec![
            restaurant(
                "Kanda",
                "Tokyo",
                Some(Continent::Asia),
                &["Japanese"],
                Some(Award::ThreeStars),
                Some(4),
            ),
            restaurant(
                "Bistro",
                "Paris",
                Some(Continent::Europe),
                &["French", "Japanese"],
                Some(Award::BibGourmand),
                Some(2),
            ),
        ]))
    }

    #[test]
    fn view_values_share_one_filtered_snapshot() {
        let dashboard = sample_dashboard();
        let selection = FilterSelection {
            cuisines: vec!["Japanese".to_string()],
            ..FilterSelection::none()
        };

        let view = dashboard.view(&selection, ViewOptions::default());

        assert_eq!(view.filtered.len(), 2);
        assert_eq!(view.metrics.total_restaurants, view.filtered.len());
        assert_eq!(view.metrics.selected_cuisines, 1);

        let japanese = view
            .cuisine_stats
            .iter()
            .find(|s| s.cuisine == "Japanese")
            .unwrap();
        assert_eq!(japanese.restaurant_count, 2);
        assert!((japanese.starred_percentage - 50.0).abs() < 1e-9);
        assert!((japanese.avg_award_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn stale_city_is_reconciled_inside_view() {
        let dashboard = sample_dashboard();
        let selection = FilterSelection {
            continent: Some(Continent::Asia),
            city: Some("Paris".to_string()),
            ..FilterSelection::none()
        };

        let view = dashboard.view(&selection, ViewOptions::default());

        // The stale city resets instead of producing an empty view
        assert_eq!(view.filtered.len(), 1);
        assert_eq!(view.filtered.iter().next().unwrap().name, "Kanda");
    }

    #[test]
    fn empty_dashboard_views_cleanly() {
        let dashboard = Dashboard::from_table(RestaurantTable::new());
        let view = dashboard.view(&FilterSelection::none(), ViewOptions::default());

        assert_eq!(view.metrics.total_restaurants, 0);
        assert_eq!(view.metrics.starred_percentage, 0.0);
        assert!(view.ranking.is_empty());
        assert!(view.cuisine_stats.is_empty());
        assert!(view.map_points.is_empty());
        assert!(view.prevalence.is_empty());
    }

    #[test]
    fn missing_source_loads_as_empty_dashboard() {
        let dashboard = Dashboard::load(Path::new("/nonexistent/data.csv"), None).unwrap();
        assert!(dashboard.table().is_empty());
    }

    #[test]
    fn second_load_hits_the_cache() {
        let temp_dir = std::env::temp_dir().join("michelin_explorer_test_session");
        fs::create_dir_all(&temp_dir).unwrap();

        let source = temp_dir.join("restaurants.csv");
        fs::write(
            &source,
            "Name,Cuisine,Location,Price,Award,FacilitiesAndServices,Description\n\
             Kanda,Japanese,\"Tokyo, Japan\",¥¥¥,3 Stars,,\n",
        )
        .unwrap();

        let cache_dir = temp_dir.join("cache");
        let first = Dashboard::load(&source, Some(&cache_dir)).unwrap();
        let second = Dashboard::load(&source, Some(&cache_dir)).unwrap();

        assert_eq!(first.table().len(), 1);
        assert_eq!(second.table().len(), 1);
        assert_eq!(
            second.table().iter().next().unwrap().name,
            first.table().iter().next().unwrap().name
        );

        fs::remove_dir_all(&temp_dir).unwrap();
    }
}
