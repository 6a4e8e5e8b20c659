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

use crate::string_util::{is_blank, to_lowercase_cow};

/// Search box input, lower-cased once up front.
#[derive(Debug)]
pub struct SearchQuery<'a> {
    /// Text as typed. Dial codes are compared against this one.
    pub original: &'a str,
    pub lowered: Cow<'a, str>,
}

impl<'a> SearchQuery<'a> {
    pub fn new(original: &'a str) -> Self {
        Self { original, lowered: to_lowercase_cow(original) }
    }

    /// Input made of whitespace and byte order marks only counts as no
    /// query at all.
    pub fn is_blank(&self) -> bool {
        is_blank(self.original)
    }
}
