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

use thiserror::Error;

/// Reasons a country table can't be turned into a `CountryDirectory`.
///
/// Lookups never fail with these: a code that matches nothing is reported
/// as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Country directory must contain at least one country")]
    EmptyDirectory,
    #[error("ISO code '{0}' must be two upper-case ASCII letters")]
    InvalidIsoCode(String),
    #[error("ISO code '{0}' is used by more than one country")]
    DuplicateIsoCode(String),
    #[error("Dial code '{dial_code}' of '{iso2}' must be '+' followed by digits")]
    InvalidDialCode { iso2: String, dial_code: String },
    #[error("Common names given for '{0}', which is not in the directory")]
    DanglingAlias(String),
    #[error("Common names for '{0}' are given more than once")]
    DuplicateAlias(String),
}
