pub mod cuisine;
pub mod map;
pub mod metrics;
pub mod prevalence;
pub mod types;

pub use cuisine::{award_distribution, cuisine_stats, rank_cuisines};
pub use map::map_points;
pub use metrics::{starred_percentage, summary_metrics};
pub use prevalence::{DEFAULT_FACILITY_LIMIT, facility_prevalence, top_facilities};
pub use types::{
    AwardBucket, CuisineCount, CuisineStats, MapPoint, PrevalenceTable, Stratifier,
    SummaryMetrics,
};
