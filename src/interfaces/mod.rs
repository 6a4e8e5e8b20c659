use crate::countrydirectory::{country::Country, enums::MatchCriterion, helper_types::SearchQuery};

/// Internal country matching API used to isolate the search rules from the
/// directory and the filter loop, so that a different matcher can be
/// swapped in easily.
pub(crate) trait CountryMatcherApi {
    /// Returns the first criterion under which `country` matches the query,
    /// or `None` when it doesn't match at all. Blank queries are handled by
    /// the caller.
    fn match_country(&self, country: &Country, query: &SearchQuery<'_>) -> Option<MatchCriterion>;
}
