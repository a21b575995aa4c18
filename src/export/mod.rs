use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::domain::{Restaurant, RestaurantTable};
use crate::errors::export_context;

const DISPLAY_COLUMNS: [&str; 8] = [
    "Name",
    "City",
    "Country",
    "Continent",
    "Price",
    "Cuisine",
    "Award",
    "Price_level",
];

/// Write the filtered table as CSV. An empty table writes just the header.
pub fn write_filtered_csv<W: Write>(writer: W, table: &RestaurantTable) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(DISPLAY_COLUMNS)
        .context("Failed to write export header")?;

    for restaurant in table.iter() {
        csv_writer
            .write_record(display_row(restaurant))
            .context("Failed to write export row")?;
    }

    csv_writer.flush().context("Failed to flush export")?;
    Ok(())
}

pub fn export_to_path(path: &Path, table: &RestaurantTable) -> Result<()> {
    let file = File::create(path).with_context(|| export_context(path))?;
    write_filtered_csv(file, table)?;

    info!("Exported {} rows to {}", table.len(), path.display());
    Ok(())
}

fn display_row(restaurant: &Restaurant) -> Vec<String> {
    vec![
        restaurant.name.clone(),
        restaurant.city.clone(),
        restaurant.country.clone(),
        restaurant
            .continent
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        restaurant.price_symbol.clone().unwrap_or_default(),
        restaurant.cuisines.join(", "),
        restaurant
            .award
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
        restaurant
            .price_level
            .map(|level| format_numeric(f64::from(level)))
            .unwrap_or_default(),
    ]
}

/// Numeric cells render with at most two decimal places
pub fn format_numeric(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.2}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Award, Continent};

    fn sample_table() -> RestaurantTable {
        RestaurantTable::from_vec(vec![Restaurant {
            name: "Kanda".to_string(),
            location: "Tokyo, Japan".to_string(),
            city: "Tokyo".to_string(),
            country: "Japan".to_string(),
            continent: Some(Continent::Asia),
            cuisines: vec!["Japanese".to_string(), "Sushi".to_string()],
            facilities: vec!["Counter dining".to_string()],
            price_symbol: Some("¥¥¥".to_string()),
            price_level: Some(3),
            award: Some(Award::ThreeStars),
            description: String::new(),
        }])
    }

    #[test]
    fn exports_display_columns() {
        let mut buffer = Vec::new();
        write_filtered_csv(&mut buffer, &sample_table()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Name,City,Country,Continent,Price,Cuisine,Award,Price_level"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Kanda,Tokyo,Japan,Asia,¥¥¥,\"Japanese, Sushi\",3 Stars,3"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_table_writes_header_only() {
        let mut buffer = Vec::new();
        write_filtered_csv(&mut buffer, &RestaurantTable::new()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn numeric_formatting_rounds_to_two_decimals() {
        assert_eq!(format_numeric(3.0), "3");
        assert_eq!(format_numeric(2.456), "2.46");
        assert_eq!(format_numeric(2.5), "2.50");
    }
}
