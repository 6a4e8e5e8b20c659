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

use std::borrow::Cow;

/// Lower-cases the string with full Unicode rules.
///
/// Returns `Cow::Borrowed` when no character changes, so already lower-case
/// input (the common case for search queries) is not copied.
pub fn to_lowercase_cow(s: &str) -> Cow<'_, str> {
    let unchanged = s
        .chars()
        .all(|c| c.to_lowercase().eq(std::iter::once(c)));
    if unchanged {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Compares the lower-case forms of both strings without allocating.
pub fn eq_lowercase(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// True when the text is empty once whitespace and byte order marks
/// (U+FEFF) are stripped from both ends.
pub fn is_blank(s: &str) -> bool {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}
