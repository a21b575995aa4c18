mod coordinates;
mod countries;

pub use coordinates::{CityCoordinate, coordinates_for, lookup_city};
pub use countries::{canonical_country, continent_of};
