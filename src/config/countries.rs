use crate::domain::Continent;

/// Map country name synonyms from the source data onto canonical names.
///
/// The Michelin guide labels some territories inconsistently ("USA", "UK",
/// "China Mainland"). Unrecognized names pass through unchanged.
pub fn canonical_country(raw: &str) -> &str {
    match raw {
        "USA" => "United States",
        "UK" => "United Kingdom",
        "China Mainland" => "China",
        other => other,
    }
}

/// Continent for a canonical country name; countries outside the table
/// yield None and are excluded from continent-scoped views.
pub fn continent_of(country: &str) -> Option<Continent> {
    match country {
        "Japan" | "China" | "Taiwan" | "Hong Kong" | "Macau" | "Singapore"
        | "South Korea" | "Thailand" | "Malaysia" | "Vietnam" => Some(Continent::Asia),
        "France" | "United Kingdom" | "Italy" | "Spain" | "Germany" | "Switzerland"
        | "Netherlands" | "Belgium" | "Austria" | "Portugal" | "Ireland"
        | "Denmark" | "Sweden" | "Norway" => Some(Continent::Europe),
        "United States" | "Canada" | "Mexico" => Some(Continent::NorthAmerica),
        "Brazil" | "Argentina" => Some(Continent::SouthAmerica),
        "Australia" | "New Zealand" => Some(Continent::Oceania),
        _ => None,
    }
}
