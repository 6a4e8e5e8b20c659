// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashSet, sync::Arc};

use log::{debug, trace};

use super::{
    alias_table::AliasTable,
    country::Country,
    errors::DirectoryError,
    helper_constants::SEARCH_CACHE_CAPACITY,
    helper_functions::filter_with_matcher,
};
use crate::{
    alias_based_matcher::AliasBasedMatcher,
    generated::{COMMON_NAMES, COUNTRIES},
    search_cache::{SearchCache, SearchResult},
    string_util::{eq_lowercase, is_blank},
};

pub struct CountryDirectory {
    /// Every country, in display order. This order also decides which
    /// country wins when several share a dial code.
    countries: &'static [Country],

    /// Common names used by search, keyed by iso2.
    alias_table: AliasTable,

    /// Whole directory as a search result, returned for blank queries.
    all_countries: SearchResult,

    /// Results of `search` for recently seen queries.
    search_cache: SearchCache,
}

impl CountryDirectory {
    pub(super) fn new() -> Self {
        match Self::new_for_data(COUNTRIES, COMMON_NAMES) {
            Ok(directory) => directory,
            Err(err) => {
                let err_message = format!("Compiled-in country data is invalid: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Builds a directory over a custom country table.
    ///
    /// The table must not be empty, ISO codes must be unique and upper-case,
    /// dial codes must be `+` followed by digits, and every key of
    /// `common_names` must be the ISO code of a listed country, given once.
    pub fn new_for_data(
        countries: &'static [Country],
        common_names: &'static [(&'static str, &'static [&'static str])],
    ) -> Result<Self, DirectoryError> {
        if countries.is_empty() {
            return Err(DirectoryError::EmptyDirectory);
        }

        let mut iso_codes = HashSet::with_capacity(countries.len());
        for country in countries {
            let iso2 = country.iso2();
            if iso2.len() != 2 || !iso2.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(DirectoryError::InvalidIsoCode(iso2.to_string()));
            }
            if !iso_codes.insert(iso2) {
                return Err(DirectoryError::DuplicateIsoCode(iso2.to_string()));
            }
            if !is_valid_dial_code(country.dial_code()) {
                return Err(DirectoryError::InvalidDialCode {
                    iso2: iso2.to_string(),
                    dial_code: country.dial_code().to_string(),
                });
            }
        }

        let mut alias_keys = HashSet::with_capacity(common_names.len());
        for &(iso2, _) in common_names {
            if !iso_codes.contains(iso2) {
                return Err(DirectoryError::DanglingAlias(iso2.to_string()));
            }
            if !alias_keys.insert(iso2) {
                return Err(DirectoryError::DuplicateAlias(iso2.to_string()));
            }
        }

        debug!(
            "Loaded country directory: {} countries, {} with common names",
            countries.len(),
            common_names.len()
        );
        Ok(Self {
            countries,
            alias_table: AliasTable::from_entries(common_names),
            all_countries: countries.iter().collect(),
            search_cache: SearchCache::with_capacity(SEARCH_CACHE_CAPACITY),
        })
    }

    pub fn get_all_countries(&self) -> &'static [Country] {
        self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always `false` for a constructed directory.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.alias_table
    }

    pub fn aliases_for(&self, iso2: &str) -> &'static [&'static str] {
        self.alias_table.aliases_for(iso2)
    }

    pub fn get_iso_code(&self, dial_code: &str) -> Option<&'static str> {
        self.countries
            .iter()
            .find(|country| country.dial_code() == dial_code)
            .map(Country::iso2)
            .or_else(|| {
                trace!("No country with dial code {:?}", dial_code);
                None
            })
    }

    /// Case-sensitive: `iso_code` must match the stored upper-case code.
    pub fn get_dial_code(&self, iso_code: &str) -> Option<&'static str> {
        self.countries
            .iter()
            .find(|country| country.iso2() == iso_code)
            .map(Country::dial_code)
            .or_else(|| {
                trace!("No country with ISO code {:?}", iso_code);
                None
            })
    }

    pub fn get_country_flag(&self, identifier: &str) -> Option<&'static str> {
        self.get_country_object(identifier).map(Country::flag)
    }

    pub fn get_country_name(&self, identifier: &str) -> Option<&'static str> {
        self.get_country_object(identifier).map(Country::name)
    }

    /// Finds the first country whose dial code equals `identifier` or whose
    /// ISO code equals it ignoring case.
    pub fn get_country_object(&self, identifier: &str) -> Option<&'static Country> {
        let countries: &'static [Country] = self.countries;
        countries
            .iter()
            .find(|country| {
                country.dial_code() == identifier || eq_lowercase(country.iso2(), identifier)
            })
            .or_else(|| {
                trace!("No country with dial code or ISO code {:?}", identifier);
                None
            })
    }

    /// Filters the directory without touching the search cache.
    pub fn filter_countries(&self, query: &str) -> Vec<&'static Country> {
        let countries: &'static [Country] = self.countries;
        filter_with_matcher(query, countries, &AliasBasedMatcher::new(&self.alias_table))
    }

    /// Same result as [`CountryDirectory::filter_countries`], shared and
    /// remembered per query.
    pub fn search(&self, query: &str) -> Arc<[&'static Country]> {
        if is_blank(query) {
            return self.all_countries.clone();
        }
        self.search_cache
            .get_or_insert_with(query, || self.filter_countries(query))
    }
}

fn is_valid_dial_code(dial_code: &str) -> bool {
    dial_code
        .strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl std::fmt::Debug for CountryDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryDirectory")
            .field("countries", &self.countries.len())
            .field("alias_table", &self.alias_table.len())
            .field("cached_queries", &self.search_cache.len())
            .finish()
    }
}
