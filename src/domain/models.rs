use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Continent bucket derived from a restaurant's country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "asia" => Ok(Continent::Asia),
            "europe" => Ok(Continent::Europe),
            "north america" => Ok(Continent::NorthAmerica),
            "south america" => Ok(Continent::SouthAmerica),
            "oceania" => Ok(Continent::Oceania),
            _ => Err(format!("Unknown continent: {}", s)),
        }
    }
}

/// Michelin distinction; Bib Gourmand is a non-star recognition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Award {
    BibGourmand,
    OneStar,
    TwoStars,
    ThreeStars,
}

impl Award {
    pub const ALL: [Award; 4] = [
        Award::BibGourmand,
        Award::OneStar,
        Award::TwoStars,
        Award::ThreeStars,
    ];

    pub const STAR_TIERS: [Award; 3] = [Award::OneStar, Award::TwoStars, Award::ThreeStars];

    pub fn as_str(&self) -> &'static str {
        match self {
            Award::BibGourmand => "Bib Gourmand",
            Award::OneStar => "1 Star",
            Award::TwoStars => "2 Stars",
            Award::ThreeStars => "3 Stars",
        }
    }

    /// Parse the exact label used in the source data
    pub fn parse(label: &str) -> Option<Award> {
        match label.trim() {
            "Bib Gourmand" => Some(Award::BibGourmand),
            "1 Star" => Some(Award::OneStar),
            "2 Stars" => Some(Award::TwoStars),
            "3 Stars" => Some(Award::ThreeStars),
            _ => None,
        }
    }

    /// Numeric score for star tiers; Bib Gourmand carries none
    pub fn star_score(&self) -> Option<u8> {
        match self {
            Award::BibGourmand => None,
            Award::OneStar => Some(1),
            Award::TwoStars => Some(2),
            Award::ThreeStars => Some(3),
        }
    }

    pub fn is_starred(&self) -> bool {
        self.star_score().is_some()
    }
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Award {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "bib gourmand" | "bib" => Ok(Award::BibGourmand),
            "1 star" => Ok(Award::OneStar),
            "2 stars" => Ok(Award::TwoStars),
            "3 stars" => Ok(Award::ThreeStars),
            _ => Err(format!("Unknown award: {}", s)),
        }
    }
}

/// One row of the source dataset, as read from CSV
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Cuisine", default)]
    pub cuisine: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Price", default)]
    pub price: String,
    #[serde(rename = "Award", default)]
    pub award: String,
    #[serde(rename = "FacilitiesAndServices", default)]
    pub facilities: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl RawRecord {
    /// Rows with no name, cuisine, or location carry nothing usable
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.cuisine.trim().is_empty()
            && self.location.trim().is_empty()
    }
}

/// Normalized restaurant record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub location: String,
    pub city: String,
    pub country: String,
    pub continent: Option<Continent>,
    pub cuisines: Vec<String>,
    pub facilities: Vec<String>,
    pub price_symbol: Option<String>,
    pub price_level: Option<u8>,
    pub award: Option<Award>,
    pub description: String,
}

impl Restaurant {
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c == cuisine)
    }

    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities.iter().any(|f| f == facility)
    }

    pub fn is_starred(&self) -> bool {
        self.award.map(|a| a.is_starred()).unwrap_or(false)
    }
}
