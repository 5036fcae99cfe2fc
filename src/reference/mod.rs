// Reference data module - DMR region and country code tables
// Source: radioid.net numbering plan
//
// The tables are read-only. Selection and reporting receive them as a
// `CodeTables` value so tests can supply their own tables.

pub mod countries;
pub mod regions;

use std::collections::HashMap;
use std::sync::OnceLock;

use countries::{DmrCountry, DMR_COUNTRIES};
use regions::{DmrRegion, DMR_REGIONS};

/// Lazily-initialized lookup tables built from the static code lists
static STANDARD_TABLES: OnceLock<CodeTables> = OnceLock::new();

/// Region and country lookup maps with O(1) access by code
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
    regions: HashMap<i64, &'static str>,
    countries: HashMap<i64, &'static str>,
}

impl CodeTables {
    /// Build tables from explicit `(code, name)` entries
    pub fn from_entries(
        regions: &[(i64, &'static str)],
        countries: &[(i64, &'static str)],
    ) -> Self {
        Self {
            regions: regions.iter().copied().collect(),
            countries: countries.iter().copied().collect(),
        }
    }

    fn from_static(regions: &[DmrRegion], countries: &[DmrCountry]) -> Self {
        let mut tables = Self {
            regions: HashMap::with_capacity(regions.len()),
            countries: HashMap::with_capacity(countries.len()),
        };
        for region in regions {
            tables.regions.insert(i64::from(region.code), region.name);
        }
        for country in countries {
            tables.countries.insert(i64::from(country.code), country.name);
        }
        tables
    }

    /// Region name for a leading digit
    pub fn region_name(&self, code: i64) -> Option<&'static str> {
        self.regions.get(&code).copied()
    }

    /// Country name for a three-digit prefix (sign is ignored)
    pub fn country_name(&self, code: i64) -> Option<&'static str> {
        code.checked_abs().and_then(|c| self.countries.get(&c)).copied()
    }

    pub fn is_known_region(&self, code: i64) -> bool {
        self.regions.contains_key(&code)
    }

    pub fn is_known_country(&self, code: i64) -> bool {
        self.country_name(code).is_some()
    }

    /// Regions sorted by code, for listing
    pub fn sorted_regions(&self) -> Vec<(i64, &'static str)> {
        let mut list: Vec<_> = self.regions.iter().map(|(c, n)| (*c, *n)).collect();
        list.sort_unstable();
        list
    }

    /// Countries sorted by code, for listing
    pub fn sorted_countries(&self) -> Vec<(i64, &'static str)> {
        let mut list: Vec<_> = self.countries.iter().map(|(c, n)| (*c, *n)).collect();
        list.sort_unstable();
        list
    }
}

/// Get the tables built from the bundled radioid.net code lists
pub fn standard_tables() -> &'static CodeTables {
    STANDARD_TABLES.get_or_init(|| CodeTables::from_static(DMR_REGIONS, DMR_COUNTRIES))
}
