use std::fs;
use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::domain::{Normalizer, RawRecord, RestaurantTable};
use crate::errors::with_read_context;

/// Read the raw dataset bytes from disk
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    with_read_context(fs::read(path), path)
}

/// Parse CSV bytes into raw records.
///
/// Decoding is lossy (unparseable bytes are dropped) and rows that fail to
/// deserialize are skipped with a warning rather than aborting the load.
pub fn parse_records(bytes: &[u8]) -> Vec<RawRecord> {
    let text = String::from_utf8_lossy(bytes).replace('\u{FFFD}', "");
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<RawRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            // +2: one for the header line, one for 1-based numbering
            Err(err) => warn!("Skipping unreadable row {}: {}", idx + 2, err),
        }
    }

    records
}

/// Load and normalize the dataset; a failed read surfaces an empty table.
pub fn load_table(path: &Path, normalizer: &Normalizer) -> RestaurantTable {
    let bytes = match read_source(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("{:#}; continuing with an empty table", err);
            return RestaurantTable::new();
        }
    };

    let records = parse_records(&bytes);
    let table = normalizer.normalize_all(&records);
    info!("Loaded {} restaurants from {}", table.len(), path.display());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Cuisine,Location,Price,Award,FacilitiesAndServices,Description
Benu,Contemporary,\"San Francisco, USA\",$$$$,3 Stars,\"Wheelchair access, Valet parking\",Tasting menu
Kanda,Japanese,\"Tokyo, Japan\",¥¥¥,3 Stars,Counter dining,Omakase
,,,,,,
";

    #[test]
    fn parses_quoted_composite_fields() {
        let records = parse_records(SAMPLE.as_bytes());
        // The all-empty row still parses; the normalizer drops it later
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Benu");
        assert_eq!(records[0].location, "San Francisco, USA");
        assert_eq!(records[1].price, "¥¥¥");
    }

    #[test]
    fn normalizes_parsed_rows_and_drops_blanks() {
        let normalizer = Normalizer::new().unwrap();
        let records = parse_records(SAMPLE.as_bytes());
        let table = normalizer.normalize_all(&records);

        assert_eq!(table.len(), 2);
        let benu = table.iter().next().unwrap();
        assert_eq!(benu.city, "San Francisco");
        assert_eq!(benu.country, "United States");
        assert_eq!(benu.price_level, Some(4));
        assert_eq!(
            benu.facilities,
            vec!["Wheelchair access".to_string(), "Valet parking".to_string()]
        );
    }

    #[test]
    fn invalid_utf8_is_dropped_not_fatal() {
        let mut bytes = b"Name,Cuisine,Location,Price,Award,FacilitiesAndServices,Description\n".to_vec();
        bytes.extend_from_slice(b"Caf\xff,French,\"Paris, France\",\xe2\x82\xac\xe2\x82\xac,,,\n");

        let records = parse_records(&bytes);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Caf");
        assert_eq!(records[0].price, "€€");
    }

    #[test]
    fn missing_source_yields_empty_table() {
        let normalizer = Normalizer::new().unwrap();
        let table = load_table(Path::new("/nonexistent/data.csv"), &normalizer);
        assert!(table.is_empty());
    }
}
