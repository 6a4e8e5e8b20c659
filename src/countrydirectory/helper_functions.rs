use log::trace;

use crate::{alias_based_matcher::AliasBasedMatcher, interfaces::CountryMatcherApi};

use super::{alias_table::AliasTable, country::Country, enums::MatchCriterion, helper_types::SearchQuery};

/// Runs the matcher over `countries`, keeping directory order. A blank query
/// keeps every country.
pub(super) fn filter_with_matcher<'a>(
    query: &str,
    countries: &'a [Country],
    matcher: &impl CountryMatcherApi,
) -> Vec<&'a Country> {
    let query = SearchQuery::new(query);
    if query.is_blank() {
        return countries.iter().collect();
    }
    let matched: Vec<&'a Country> = countries
        .iter()
        .filter(|country| matcher.match_country(country, &query).is_some())
        .collect();
    trace!("Query {:?} matched {} of {} countries", query.original, matched.len(), countries.len());
    matched
}

/// Returns the countries matching a search box query, in directory order.
///
/// A country matches when the lower-cased query equals or is contained in
/// its lower-cased name or ISO code, is contained in one of its lower-cased
/// common names, or when the query as typed is contained in its dial code.
/// Whitespace-only queries return the whole directory.
///
/// The result is recomputed on every call; see `CountryDirectory::search`
/// for the memoized version.
pub fn filter_countries<'a>(
    query: &str,
    countries: &'a [Country],
    alias_table: &AliasTable,
) -> Vec<&'a Country> {
    filter_with_matcher(query, countries, &AliasBasedMatcher::new(alias_table))
}

/// Reports which search rule accepts `country` for `query`, if any.
///
/// Unlike [`filter_countries`] this applies the rules even to blank queries.
pub fn match_country(
    country: &Country,
    query: &str,
    alias_table: &AliasTable,
) -> Option<MatchCriterion> {
    AliasBasedMatcher::new(alias_table).match_country(country, &SearchQuery::new(query))
}
