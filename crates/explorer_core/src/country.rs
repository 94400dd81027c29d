use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only view of one country record, normalized from the lookup API's
/// response shape.
///
/// Built with [`Country::from_value`]. Every field has a deterministic
/// fallback, so a partial or malformed record still renders. An empty string
/// in the source counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub official_name: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: u64,
    pub area: f64,
    pub languages: Vec<String>,
    pub timezones: Vec<String>,
    /// PNG flag preferred, SVG fallback, empty when neither exists.
    pub flag_url: String,
    /// Provider name to URL, e.g. `googleMaps`.
    pub maps_links: BTreeMap<String, String>,
}

impl Country {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            name: non_empty(raw.get("name").and_then(|name| name.get("common")))
                .unwrap_or("Unknown")
                .to_string(),
            official_name: non_empty(raw.get("name").and_then(|name| name.get("official")))
                .unwrap_or_default()
                .to_string(),
            capital: non_empty(raw.get("capital").and_then(|capital| capital.get(0)))
                .unwrap_or("—")
                .to_string(),
            region: non_empty(raw.get("region")).unwrap_or("—").to_string(),
            subregion: non_empty(raw.get("subregion")).unwrap_or("—").to_string(),
            population: raw.get("population").and_then(Value::as_u64).unwrap_or(0),
            area: raw.get("area").and_then(Value::as_f64).unwrap_or(0.0),
            languages: raw
                .get("languages")
                .and_then(Value::as_object)
                .map(|languages| {
                    languages
                        .values()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            timezones: raw
                .get("timezones")
                .and_then(Value::as_array)
                .map(|timezones| {
                    timezones
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            flag_url: non_empty(raw.get("flags").and_then(|flags| flags.get("png")))
                .or_else(|| non_empty(raw.get("flags").and_then(|flags| flags.get("svg"))))
                .unwrap_or_default()
                .to_string(),
            maps_links: raw
                .get("maps")
                .and_then(Value::as_object)
                .map(|maps| {
                    maps.iter()
                        .filter_map(|(provider, url)| {
                            url.as_str().map(|url| (provider.clone(), url.to_string()))
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// String content of `value`, treating `None`, non-strings, and `""` as
/// absent.
fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn maps_a_complete_record() {
        let raw = json!({
            "name": { "common": "France", "official": "French Republic" },
            "capital": ["Paris"],
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 67391582u64,
            "area": 551695.0,
            "languages": { "fra": "French" },
            "timezones": ["UTC-10:00", "UTC+01:00"],
            "flags": { "png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg" },
            "maps": { "googleMaps": "https://goo.gl/maps/g7QxxSFsWyTPKuzd7" }
        });

        let country = Country::from_value(&raw);

        assert_eq!(country.name, "France");
        assert_eq!(country.official_name, "French Republic");
        assert_eq!(country.capital, "Paris");
        assert_eq!(country.region, "Europe");
        assert_eq!(country.subregion, "Western Europe");
        assert_eq!(country.population, 67391582);
        assert_eq!(country.area, 551695.0);
        assert_eq!(country.languages, vec!["French"]);
        assert_eq!(country.timezones, vec!["UTC-10:00", "UTC+01:00"]);
        assert_eq!(country.flag_url, "https://flagcdn.com/w320/fr.png");
        assert_eq!(
            country.maps_links.get("googleMaps").map(String::as_str),
            Some("https://goo.gl/maps/g7QxxSFsWyTPKuzd7")
        );
    }

    #[test]
    fn empty_record_falls_back_on_every_field() {
        let country = Country::from_value(&json!({}));

        assert_eq!(country.name, "Unknown");
        assert_eq!(country.official_name, "");
        assert_eq!(country.capital, "—");
        assert_eq!(country.region, "—");
        assert_eq!(country.subregion, "—");
        assert_eq!(country.population, 0);
        assert_eq!(country.area, 0.0);
        assert!(country.languages.is_empty());
        assert!(country.timezones.is_empty());
        assert_eq!(country.flag_url, "");
        assert!(country.maps_links.is_empty());
    }

    #[test]
    fn wrongly_typed_fields_fall_back() {
        let raw = json!({
            "name": "France",
            "capital": "Paris",
            "region": 7,
            "population": "many",
            "area": null,
            "languages": ["French"],
            "timezones": "UTC",
            "flags": [],
            "maps": null
        });

        let country = Country::from_value(&raw);

        assert_eq!(country.name, "Unknown");
        assert_eq!(country.capital, "—");
        assert_eq!(country.region, "—");
        assert_eq!(country.population, 0);
        assert_eq!(country.area, 0.0);
        assert!(country.languages.is_empty());
        assert!(country.timezones.is_empty());
        assert_eq!(country.flag_url, "");
        assert!(country.maps_links.is_empty());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let raw = json!({
            "name": { "common": "", "official": "" },
            "capital": [""],
            "region": "",
            "subregion": ""
        });

        let country = Country::from_value(&raw);

        assert_eq!(country.name, "Unknown");
        assert_eq!(country.official_name, "");
        assert_eq!(country.capital, "—");
        assert_eq!(country.region, "—");
        assert_eq!(country.subregion, "—");
    }

    #[test]
    fn flag_prefers_png_and_falls_back_to_svg() {
        let both = json!({ "flags": { "png": "a.png", "svg": "a.svg" } });
        assert_eq!(Country::from_value(&both).flag_url, "a.png");

        let svg_only = json!({ "flags": { "svg": "a.svg" } });
        assert_eq!(Country::from_value(&svg_only).flag_url, "a.svg");

        let empty_png = json!({ "flags": { "png": "", "svg": "a.svg" } });
        assert_eq!(Country::from_value(&empty_png).flag_url, "a.svg");
    }

    #[test]
    fn capital_takes_the_first_entry() {
        let raw = json!({ "capital": ["Pretoria", "Bloemfontein", "Cape Town"] });
        assert_eq!(Country::from_value(&raw).capital, "Pretoria");

        let empty = json!({ "capital": [] });
        assert_eq!(Country::from_value(&empty).capital, "—");
    }

    #[test]
    fn non_string_collection_entries_are_skipped() {
        let raw = json!({
            "languages": { "deu": "German", "bad": 3 },
            "timezones": ["UTC+01:00", 2, null],
            "maps": { "googleMaps": "https://maps.example", "broken": 1 }
        });

        let country = Country::from_value(&raw);

        assert_eq!(country.languages, vec!["German"]);
        assert_eq!(country.timezones, vec!["UTC+01:00"]);
        assert_eq!(country.maps_links.len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let raw = json!({
            "name": { "common": "Japan", "official": "Japan" },
            "flags": { "png": "jp.png" },
            "maps": { "openStreetMaps": "https://osm.example" }
        });

        let serialized = serde_json::to_value(Country::from_value(&raw)).unwrap();

        assert_eq!(serialized["officialName"], "Japan");
        assert_eq!(serialized["flagUrl"], "jp.png");
        assert_eq!(serialized["mapsLinks"]["openStreetMaps"], "https://osm.example");
    }
}
