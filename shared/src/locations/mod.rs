//! Region → province → city → barangay lookup table.
//!
//! The table is an insertion-ordered nested map. Every lookup degrades to an
//! empty result when a key is missing; nothing in here fails at lookup time.
//! Only loading a table from JSON can fail, and only while validating it.

mod caraga;

use std::fmt;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

type RawCity = (&'static str, &'static [&'static str]);
type RawProvince = (&'static str, &'static [RawCity]);
type RawRegion = (&'static str, &'static [RawProvince]);

type Cities = IndexMap<String, Vec<String>>;
type Provinces = IndexMap<String, Cities>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationLevel {
    Region,
    Province,
    City,
    Barangay,
}

impl LocationLevel {
    pub const ALL: [Self; 4] = [Self::Region, Self::Province, Self::City, Self::Barangay];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Province => "province",
            Self::City => "city",
            Self::Barangay => "barangay",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Region => 0,
            Self::Province => 1,
            Self::City => 2,
            Self::Barangay => 3,
        }
    }

    /// Levels strictly below `self`, nearest first.
    #[must_use]
    pub fn descendants(self) -> &'static [Self] {
        &Self::ALL[self.index() + 1..]
    }
}

impl fmt::Display for LocationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("blank {level} name under '{parent}'")]
    BlankName { level: LocationLevel, parent: String },

    #[error("region '{region}' has no provinces")]
    EmptyRegion { region: String },

    #[error("province '{province}' in '{region}' has no cities")]
    EmptyProvince { region: String, province: String },

    #[error("city '{city}' in '{province}' has no barangays")]
    EmptyCity { province: String, city: String },

    #[error("barangay '{barangay}' appears twice in '{city}'")]
    DuplicateBarangay { city: String, barangay: String },
}

/// Immutable location hierarchy.
///
/// External tables come in through [`LocationTable::from_json`] or
/// [`LocationTable::from_regions`], both of which validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocationTable {
    regions: IndexMap<String, Provinces>,
}

impl LocationTable {
    /// The bundled Caraga (Region XIII) table, built once per process.
    pub fn caraga() -> &'static Arc<LocationTable> {
        static INSTANCE: OnceLock<Arc<LocationTable>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let table = Self::from_raw(caraga::CARAGA);
            debug!(regions = ?table.list_regions(), "location table loaded");
            Arc::new(table)
        })
    }

    fn from_raw(raw: &[RawRegion]) -> Self {
        let regions = raw
            .iter()
            .map(|(region, provinces)| {
                let provinces = provinces
                    .iter()
                    .map(|(province, cities)| {
                        let cities = cities
                            .iter()
                            .map(|(city, barangays)| {
                                let barangays =
                                    barangays.iter().map(|b| (*b).to_string()).collect();
                                ((*city).to_string(), barangays)
                            })
                            .collect();
                        ((*province).to_string(), cities)
                    })
                    .collect();
                ((*region).to_string(), provinces)
            })
            .collect();
        Self { regions }
    }

    /// Parses a table with the same nested shape as the bundled one and
    /// validates it.
    pub fn from_json(json: &str) -> Result<Self, LocationError> {
        let regions: IndexMap<String, Provinces> = serde_json::from_str(json)?;
        Self::from_regions(regions)
    }

    pub fn from_regions(regions: IndexMap<String, Provinces>) -> Result<Self, LocationError> {
        let table = Self { regions };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), LocationError> {
        for (region, provinces) in &self.regions {
            check_name(region, LocationLevel::Region, "")?;
            if provinces.is_empty() {
                return Err(LocationError::EmptyRegion {
                    region: region.clone(),
                });
            }
            for (province, cities) in provinces {
                check_name(province, LocationLevel::Province, region)?;
                if cities.is_empty() {
                    return Err(LocationError::EmptyProvince {
                        region: region.clone(),
                        province: province.clone(),
                    });
                }
                for (city, barangays) in cities {
                    check_name(city, LocationLevel::City, province)?;
                    if barangays.is_empty() {
                        return Err(LocationError::EmptyCity {
                            province: province.clone(),
                            city: city.clone(),
                        });
                    }
                    for (i, barangay) in barangays.iter().enumerate() {
                        check_name(barangay, LocationLevel::Barangay, city)?;
                        if barangays[..i].contains(barangay) {
                            return Err(LocationError::DuplicateBarangay {
                                city: city.clone(),
                                barangay: barangay.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    #[must_use]
    pub fn list_regions(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn list_provinces(&self, region: &str) -> Vec<&str> {
        self.provinces(region)
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn list_cities(&self, region: &str, province: &str) -> Vec<&str> {
        self.cities(region, province)
            .map(|c| c.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The stored barangay list itself; callers get a shared view, never a copy.
    #[must_use]
    pub fn list_barangays(&self, region: &str, province: &str, city: &str) -> &[String] {
        self.cities(region, province)
            .and_then(|c| c.get(city))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_region(&self, region: &str) -> bool {
        self.provinces(region).is_some()
    }

    #[must_use]
    pub fn has_province(&self, region: &str, province: &str) -> bool {
        self.cities(region, province).is_some()
    }

    #[must_use]
    pub fn has_city(&self, region: &str, province: &str, city: &str) -> bool {
        self.cities(region, province)
            .is_some_and(|c| c.contains_key(city))
    }

    #[must_use]
    pub fn has_barangay(&self, region: &str, province: &str, city: &str, barangay: &str) -> bool {
        self.list_barangays(region, province, city)
            .iter()
            .any(|b| b == barangay)
    }

    fn provinces(&self, region: &str) -> Option<&Provinces> {
        self.regions.get(region)
    }

    fn cities(&self, region: &str, province: &str) -> Option<&Cities> {
        self.provinces(region)?.get(province)
    }
}

fn check_name(name: &str, level: LocationLevel, parent: &str) -> Result<(), LocationError> {
    if name.trim().is_empty() {
        return Err(LocationError::BlankName {
            level,
            parent: parent.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const REGION: &str = "Caraga (Region XIII)";

    #[test]
    fn caraga_has_single_region_with_five_provinces() {
        let table = LocationTable::caraga();
        assert_eq!(table.list_regions(), vec![REGION]);
        assert_eq!(
            table.list_provinces(REGION),
            vec![
                "Agusan del Norte",
                "Agusan del Sur",
                "Surigao del Norte",
                "Surigao del Sur",
                "Dinagat Islands",
            ]
        );
    }

    #[test]
    fn cities_keep_insertion_order() {
        let cities = LocationTable::caraga().list_cities(REGION, "Agusan del Norte");
        assert_eq!(cities.len(), 12);
        assert_eq!(cities[0], "Butuan City");
        assert_eq!(cities[11], "Cabadbaran City");
    }

    #[test]
    fn barangays_are_shared_not_copied() {
        let table = LocationTable::caraga();
        let first = table.list_barangays(REGION, "Agusan del Norte", "Butuan City");
        let second = table.list_barangays(REGION, "Agusan del Norte", "Butuan City");
        assert_eq!(first.len(), 37);
        assert_eq!(first[25], "Masao");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn unset_levels_yield_empty_lists() {
        let table = LocationTable::caraga();
        assert!(table.list_provinces("").is_empty());
        assert!(table.list_cities(REGION, "").is_empty());
        assert!(table.list_barangays(REGION, "Agusan del Norte", "").is_empty());
    }

    #[test]
    fn city_names_are_scoped_to_their_province() {
        let table = LocationTable::caraga();
        // "Carmen" exists in two provinces with different barangays.
        let north = table.list_barangays(REGION, "Agusan del Norte", "Carmen");
        let south = table.list_barangays(REGION, "Surigao del Sur", "Carmen");
        assert!(north.iter().any(|b| b == "Gosoon"));
        assert!(!south.iter().any(|b| b == "Gosoon"));
    }

    #[test]
    fn every_province_has_cities_and_every_city_has_barangays() {
        let table = LocationTable::caraga();
        for region in table.list_regions() {
            for province in table.list_provinces(region) {
                let cities = table.list_cities(region, province);
                assert!(!cities.is_empty(), "{province} has no cities");
                for city in cities {
                    assert!(!table.list_barangays(region, province, city).is_empty());
                }
            }
        }
    }

    #[test]
    fn membership_helpers_follow_lookups() {
        let table = LocationTable::caraga();
        assert!(table.has_region(REGION));
        assert!(table.has_province(REGION, "Dinagat Islands"));
        assert!(table.has_city(REGION, "Dinagat Islands", "Libjo"));
        assert!(table.has_barangay(REGION, "Dinagat Islands", "Libjo", "Boa"));
        assert!(!table.has_city(REGION, "Dinagat Islands", "Butuan City"));
        assert!(!table.has_barangay(REGION, "Agusan del Norte", "Butuan City", "Boa"));
    }

    #[test]
    fn from_json_accepts_well_formed_table() {
        let table = LocationTable::from_json(
            r#"{"R": {"P": {"C1": ["B1", "B2"], "C2": ["B3"]}}}"#,
        )
        .unwrap();
        assert_eq!(table.list_cities("R", "P"), vec!["C1", "C2"]);
        assert_eq!(table.list_barangays("R", "P", "C2"), ["B3".to_string()]);
    }

    #[test]
    fn from_json_rejects_empty_leaf() {
        let err = LocationTable::from_json(r#"{"R": {"P": {"C": []}}}"#).unwrap_err();
        assert!(matches!(err, LocationError::EmptyCity { ref city, .. } if city == "C"));
    }

    #[test]
    fn from_json_rejects_empty_branches() {
        assert!(matches!(
            LocationTable::from_json(r#"{"R": {}}"#),
            Err(LocationError::EmptyRegion { .. })
        ));
        assert!(matches!(
            LocationTable::from_json(r#"{"R": {"P": {}}}"#),
            Err(LocationError::EmptyProvince { .. })
        ));
    }

    #[test]
    fn from_json_rejects_blank_and_duplicate_names() {
        assert!(matches!(
            LocationTable::from_json(r#"{"R": {" ": {"C": ["B"]}}}"#),
            Err(LocationError::BlankName {
                level: LocationLevel::Province,
                ..
            })
        ));
        assert!(matches!(
            LocationTable::from_json(r#"{"R": {"P": {"C": ["B", "B"]}}}"#),
            Err(LocationError::DuplicateBarangay { .. })
        ));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(matches!(
            LocationTable::from_json("not json"),
            Err(LocationError::Parse(_))
        ));
    }

    #[test]
    fn descendants_are_strictly_below() {
        assert_eq!(
            LocationLevel::Region.descendants(),
            &[LocationLevel::Province, LocationLevel::City, LocationLevel::Barangay]
        );
        assert!(LocationLevel::Barangay.descendants().is_empty());
    }

    proptest! {
        #[test]
        fn unknown_province_never_yields_cities_or_barangays(
            region in "\\PC{0,24}",
            province in "[a-z ]{1,24}",
            city in "\\PC{0,24}",
        ) {
            let table = LocationTable::caraga();
            // Real province names are capitalised, so the generated ones never match.
            prop_assert!(table.list_cities(&region, &province).is_empty());
            prop_assert!(table.list_barangays(&region, &province, &city).is_empty());
        }

        #[test]
        fn unknown_region_never_yields_provinces(region in "[a-z]{0,32}") {
            prop_assert!(LocationTable::caraga().list_provinces(&region).is_empty());
        }
    }
}
