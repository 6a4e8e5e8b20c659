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

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;

use crate::countrydirectory::country::Country;

pub type SearchResult = Arc<[&'static Country]>;

/// Remembers search results per query string. Once `capacity` distinct
/// queries are stored the whole cache is dropped and refilled.
pub struct SearchCache {
    cache: DashMap<String, SearchResult>,
    capacity: usize,
}

impl SearchCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn get_or_insert_with(
        &self,
        query: &str,
        compute: impl FnOnce() -> Vec<&'static Country>,
    ) -> SearchResult {
        if let Some(result) = self.cache.get(query) {
            trace!("Search cache hit for {:?}", query);
            return result.value().clone();
        }
        if self.cache.len() >= self.capacity {
            trace!("Search cache is full ({} queries), clearing", self.capacity);
            self.cache.clear();
        }
        let entry = self
            .cache
            .entry(query.to_string())
            .or_insert_with(|| Arc::from(compute()));
        entry.value().clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
