mod interfaces;
/// This module is generated at build time from /resources/*.txt
mod generated;
mod countrydirectory;
mod search_cache;
mod alias_based_matcher;
pub mod picker;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use countrydirectory::{
    alias_table::AliasTable,
    country::Country,
    countrydirectory::CountryDirectory,
    enums::MatchCriterion,
    errors::DirectoryError,
    filter_countries, get_all_countries, get_country_flag, get_country_name,
    get_country_object, get_dial_code, get_iso_code, match_country, COUNTRY_DIRECTORY,
};
