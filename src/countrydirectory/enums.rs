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

use strum::EnumIter;

/// The rule that made a country show up for a search query.
///
/// Variants are listed in the order they are tried; a country reports the
/// first one that accepts it. Name, ISO code and alias comparisons use the
/// lower-cased query, the dial code comparison uses the query as typed.
///
/// For the query `"us"`:
/// - **United States** matches with `ExactIsoCode`
/// - **Russia** matches with `NameContains`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchCriterion {
    /// **Exact name.**
    /// The lower-cased country name equals the query.
    /// Example: `"germany"` for Germany.
    ExactName,
    /// **Exact ISO code.**
    /// The lower-cased ISO2 code equals the query.
    /// Example: `"de"` for Germany.
    ExactIsoCode,
    /// **Name substring.**
    /// The lower-cased name contains the query.
    /// Example: `"erman"` for Germany.
    NameContains,
    /// **ISO code substring.**
    /// The lower-cased ISO2 code contains the query, i.e. a single letter of it.
    IsoCodeContains,
    /// **Common name.**
    /// One of the country's aliases, lower-cased, contains the query.
    /// Example: `"deutsch"` for Germany through `Deutschland`.
    AliasContains,
    /// **Dial code substring.**
    /// The dial code contains the query exactly as typed.
    /// Example: `"+4"` for Germany (`+49`).
    DialCodeContains,
}

impl MatchCriterion {
    /// Returns whether the criterion compares the whole name or code rather
    /// than a fragment of it.
    pub fn is_exact(self) -> bool {
        matches!(self, MatchCriterion::ExactName | MatchCriterion::ExactIsoCode)
    }
}
