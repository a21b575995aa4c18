mod collection;
pub mod models;
pub mod normalize;

pub use collection::RestaurantTable;
pub use models::*;
pub use normalize::{Normalizer, split_location, split_tokens};
