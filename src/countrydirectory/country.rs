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

use std::fmt;

/// A single entry of the country directory.
///
/// `iso2` is stored upper-case. `dial_code` keeps its leading `+` and is not
/// unique: the United States and Canada share `+1`, Russia and Kazakhstan `+7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    name: &'static str,
    iso2: &'static str,
    dial_code: &'static str,
    flag: &'static str,
}

impl Country {
    pub const fn new(
        name: &'static str,
        iso2: &'static str,
        dial_code: &'static str,
        flag: &'static str,
    ) -> Self {
        Self { name, iso2, dial_code, flag }
    }

    /// Human readable name, e.g. `United States`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// ISO 3166-1 alpha-2 code, e.g. `US`.
    pub fn iso2(&self) -> &'static str {
        self.iso2
    }

    /// International calling prefix, e.g. `+1`.
    pub fn dial_code(&self) -> &'static str {
        self.dial_code
    }

    /// Flag emoji, e.g. `🇺🇸`.
    pub fn flag(&self) -> &'static str {
        self.flag
    }
}

/// Formats the country the way a picker row shows it: `🇺🇸 United States (+1)`.
impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.flag, self.name, self.dial_code)
    }
}
