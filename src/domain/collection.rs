use serde::{Deserialize, Serialize};

use super::models::{Award, Continent, Restaurant};

/// Immutable-after-load collection of normalized restaurants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantTable {
    restaurants: Vec<Restaurant>,
}

impl RestaurantTable {
    pub fn new() -> Self {
        Self {
            restaurants: Vec::new(),
        }
    }

    pub fn from_vec(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn push(&mut self, restaurant: Restaurant) {
        self.restaurants.push(restaurant);
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    /// New table holding the rows that satisfy the predicate, in order
    pub fn filtered<F>(&self, predicate: F) -> RestaurantTable
    where
        F: Fn(&Restaurant) -> bool,
    {
        RestaurantTable {
            restaurants: self
                .restaurants
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        }
    }

    // --- Vocabulary derivation for selector population ---

    /// Continents present in the table, in display order
    pub fn continents(&self) -> Vec<Continent> {
        Continent::ALL
            .into_iter()
            .filter(|continent| {
                self.restaurants
                    .iter()
                    .any(|r| r.continent == Some(*continent))
            })
            .collect()
    }

    /// Unique cities, sorted; optionally restricted to one continent
    pub fn cities(&self, continent: Option<Continent>) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();

        for restaurant in &self.restaurants {
            if let Some(continent) = continent {
                if restaurant.continent != Some(continent) {
                    continue;
                }
            }
            if restaurant.city.is_empty() {
                continue;
            }
            if !cities.contains(&restaurant.city) {
                cities.push(restaurant.city.clone());
            }
        }

        cities.sort();
        cities
    }

    /// Unique cuisine vocabulary, sorted
    pub fn cuisines(&self) -> Vec<String> {
        collect_tokens(self.restaurants.iter().map(|r| &r.cuisines))
    }

    /// Unique facility vocabulary, sorted
    pub fn facilities(&self) -> Vec<String> {
        collect_tokens(self.restaurants.iter().map(|r| &r.facilities))
    }

    /// Award tiers present in the table, in display order
    pub fn awards(&self) -> Vec<Award> {
        Award::ALL
            .into_iter()
            .filter(|award| self.restaurants.iter().any(|r| r.award == Some(*award)))
            .collect()
    }
}

fn collect_tokens<'a, I>(fields: I) -> Vec<String>
where
    I: Iterator<Item = &'a Vec<String>>,
{
    let mut tokens: Vec<String> = Vec::new();

    for field in fields {
        for token in field {
            if !tokens.contains(token) {
                tokens.push(token.clone());
            }
        }
    }

    tokens.sort();
    tokens
}
