mod reader;

pub use reader::{load_table, parse_records, read_source};
