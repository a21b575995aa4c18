mod structs;

pub use structs::{TableCache, source_hash};
