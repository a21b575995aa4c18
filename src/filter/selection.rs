use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{Award, Continent, RestaurantTable};

/// One interaction's complete filter state.
///
/// Every dimension is independently optional; `None` (or an empty list) is
/// the explicit no-filter sentinel. Constructed fresh per interaction and
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub continent: Option<Continent>,
    pub city: Option<String>,
    pub cuisines: Vec<String>,
    pub award: Option<Award>,
    pub facilities: Vec<String>,
    pub price_level: Option<u8>,
}

impl FilterSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.continent.is_none()
            && self.city.is_none()
            && self.cuisines.is_empty()
            && self.award.is_none()
            && self.facilities.is_empty()
            && self.price_level.is_none()
    }

    /// Valid city options depend on the continent selection. A city left
    /// over from a previous continent resets to no-filter.
    pub fn reconciled(&self, table: &RestaurantTable) -> FilterSelection {
        let mut next = self.clone();

        if let Some(city) = &next.city {
            let options = table.cities(next.continent);
            if !options.iter().any(|option| option == city) {
                info!("City '{}' is outside the selected continent, resetting", city);
                next.city = None;
            }
        }

        next
    }
}
