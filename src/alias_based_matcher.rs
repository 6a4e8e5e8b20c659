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


use crate::{
    countrydirectory::{alias_table::AliasTable, country::Country, enums::MatchCriterion, helper_types::SearchQuery},
    interfaces,
    string_util::to_lowercase_cow,
};

/// Matches countries by name, ISO code, common name and dial code.
pub struct AliasBasedMatcher<'t> {
    alias_table: &'t AliasTable,
}

impl<'t> AliasBasedMatcher<'t> {
    pub fn new(alias_table: &'t AliasTable) -> Self {
        Self { alias_table }
    }
}

impl interfaces::CountryMatcherApi for AliasBasedMatcher<'_> {
    fn match_country(&self, country: &Country, query: &SearchQuery<'_>) -> Option<MatchCriterion> {
        let needle = query.lowered.as_ref();
        let name_lower = to_lowercase_cow(country.name());
        let iso2_lower = to_lowercase_cow(country.iso2());

        // Exact checks are subsumed by the substring ones below, they are
        // kept separate so callers can tell the two apart.
        if name_lower == needle {
            return Some(MatchCriterion::ExactName);
        }
        if iso2_lower == needle {
            return Some(MatchCriterion::ExactIsoCode);
        }
        if name_lower.contains(needle) {
            return Some(MatchCriterion::NameContains);
        }
        if iso2_lower.contains(needle) {
            return Some(MatchCriterion::IsoCodeContains);
        }
        if self
            .alias_table
            .lowered_aliases_for(country.iso2())
            .iter()
            .any(|alias| alias.contains(needle))
        {
            return Some(MatchCriterion::AliasContains);
        }
        if country.dial_code().contains(query.original) {
            return Some(MatchCriterion::DialCodeContains);
        }
        None
    }
}
