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

use std::collections::HashMap;

use log::warn;

struct AliasEntry {
    aliases: &'static [&'static str],
    /// Lower-cased copies of `aliases`, same order.
    lowered: Vec<String>,
}

/// Alternate names of countries (`US` -> `USA`, `America`, ...), keyed by
/// the ISO2 code exactly as it is stored in the directory.
#[derive(Default)]
pub struct AliasTable {
    entries: HashMap<&'static str, AliasEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let mut table = Self {
            entries: HashMap::with_capacity(entries.len()),
        };
        for &(iso2, aliases) in entries {
            let lowered = aliases.iter().map(|alias| alias.to_lowercase()).collect();
            if table.entries.insert(iso2, AliasEntry { aliases, lowered }).is_some() {
                warn!("Common names for {} are listed twice, keeping the last list", iso2);
            }
        }
        table
    }

    /// Returns the aliases of the given country, or an empty slice when it
    /// has none.
    pub fn aliases_for(&self, iso2: &str) -> &'static [&'static str] {
        self.entries.get(iso2).map(|entry| entry.aliases).unwrap_or_default()
    }

    pub(crate) fn lowered_aliases_for(&self, iso2: &str) -> &[String] {
        self.entries
            .get(iso2)
            .map(|entry| entry.lowered.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over the ISO2 codes that have aliases, in no particular order.
    pub fn iso_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for AliasTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(iso2, entry)| (iso2, entry.aliases)))
            .finish()
    }
}
