//! Country catalog
//!
//! The catalog is loaded once per run and passed explicitly to every
//! component that needs it. Its order is the order the API returned, and it
//! is never re-sorted.

use std::collections::HashSet;
use tracing::{info, warn};

use crate::client::HolidayApi;
use crate::error::{Error, Result};
use crate::types::Country;

/// Immutable, ordered list of countries known to the API
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Build a catalog from countries, rejecting duplicate ISO codes
    ///
    /// Codes are compared case-insensitively, like every lookup.
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(countries.len());

        for country in &countries {
            if !seen.insert(country.iso_code.to_ascii_uppercase()) {
                return Err(Error::CatalogUnavailable(format!(
                    "duplicate country code {}",
                    country.iso_code
                )));
            }
        }

        Ok(Self { countries })
    }

    /// Fetch the catalog from the `AvailableCountries` endpoint
    ///
    /// # Errors
    /// Any failure (status, transport, body, duplicate code) is reported as
    /// [`Error::CatalogUnavailable`]; no partial catalog is ever returned.
    pub async fn load(api: &HolidayApi) -> Result<Self> {
        let available = api
            .available_countries()
            .await
            .map_err(|e| Error::CatalogUnavailable(e.to_string()))?;

        let catalog = Self::new(
            available
                .into_iter()
                .map(|entry| Country::new(entry.name, entry.country_code))
                .collect(),
        )?;

        info!(countries = catalog.len(), "loaded country catalog");
        Ok(catalog)
    }

    /// Keep only the given ISO codes (case-insensitive), preserving catalog order
    ///
    /// Requested codes that the catalog does not know are logged and ignored.
    pub fn retain_regions<S: AsRef<str>>(&self, regions: &[S]) -> Self {
        let wanted: HashSet<String> = regions
            .iter()
            .map(|code| code.as_ref().trim().to_ascii_uppercase())
            .collect();

        for code in &wanted {
            if self.get(code).is_none() {
                warn!(country = %code, "requested region is not in the catalog");
            }
        }

        Self {
            countries: self
                .countries
                .iter()
                .filter(|country| wanted.contains(&country.iso_code.to_ascii_uppercase()))
                .cloned()
                .collect(),
        }
    }

    /// Look up a country by ISO code (case-insensitive)
    pub fn get(&self, iso_code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| country.iso_code.eq_ignore_ascii_case(iso_code))
    }

    /// Countries in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    /// Countries as a slice, in catalog order
    pub fn as_slice(&self) -> &[Country] {
        &self.countries
    }

    /// Number of countries
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the catalog has no countries
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CountryCatalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
