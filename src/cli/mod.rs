use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{Award, Continent};
use crate::filter::FilterSelection;
use crate::session::DEFAULT_TOP_N;
use crate::stats::{DEFAULT_FACILITY_LIMIT, Stratifier};

#[derive(Parser, Debug)]
#[command(
    name = "michelin-explorer",
    about = "Explore the Michelin restaurant dataset from the command line",
    version
)]
pub struct Cli {
    /// Path to the restaurant dataset
    #[arg(long, global = true, default_value = "cleaned.csv")]
    pub data: PathBuf,

    /// Directory for the normalization cache; omit to normalize every run
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Headline metrics for the current filter selection
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// How many cuisines the default ranking covers
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Top-N cuisine ranking with per-cuisine statistics
    Cuisines {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Facility prevalence across award tiers or price levels
    Facilities {
        #[command(flatten)]
        filters: FilterArgs,

        /// How many of the most frequent facilities to include
        #[arg(long, default_value_t = DEFAULT_FACILITY_LIMIT)]
        limit: usize,

        /// Stratifying dimension: award or price
        #[arg(long, default_value = "award")]
        by: Stratifier,
    },

    /// Map-ready city distribution for the current selection
    Map {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Available values for every filter dimension
    Options {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write the filtered table to a CSV file
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Destination file
        #[arg(long)]
        output: PathBuf,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Filter flags shared by every data command
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Continent scope (e.g. asia, north-america)
    #[arg(long)]
    pub continent: Option<Continent>,

    /// City; must lie inside the continent scope when one is set
    #[arg(long)]
    pub city: Option<String>,

    /// Cuisine to include; repeatable, any match qualifies
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,

    /// Award tier (bib-gourmand, 1-star, 2-stars, 3-stars)
    #[arg(long)]
    pub award: Option<Award>,

    /// Required facility; repeatable, all must be present
    #[arg(long = "facility")]
    pub facilities: Vec<String>,

    /// Price level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub price_level: Option<u8>,
}

impl FilterArgs {
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection {
            continent: self.continent,
            city: self.city.clone(),
            cuisines: self.cuisines.clone(),
            award: self.award,
            facilities: self.facilities.clone(),
            price_level: self.price_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_filter_flags() {
        let cli = Cli::try_parse_from([
            "michelin-explorer",
            "cuisines",
            "--continent",
            "asia",
            "--cuisine",
            "Japanese",
            "--cuisine",
            "Sushi",
            "--price-level",
            "3",
        ])
        .unwrap();

        match cli.command {
            Command::Cuisines { filters, top_n } => {
                let selection = filters.to_selection();
                assert_eq!(selection.continent, Some(Continent::Asia));
                assert_eq!(selection.cuisines, vec!["Japanese", "Sushi"]);
                assert_eq!(selection.price_level, Some(3));
                assert_eq!(top_n, DEFAULT_TOP_N);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_price_level() {
        let result = Cli::try_parse_from([
            "michelin-explorer",
            "summary",
            "--price-level",
            "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn award_flag_accepts_cli_spelling() {
        let cli = Cli::try_parse_from([
            "michelin-explorer",
            "summary",
            "--award",
            "bib-gourmand",
        ])
        .unwrap();

        match cli.command {
            Command::Summary { filters, .. } => {
                assert_eq!(filters.award, Some(Award::BibGourmand));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
