mod helper_constants;
mod helper_functions;
pub(crate) mod helper_types;
pub mod alias_table;
pub mod country;
pub mod countrydirectory;
pub mod enums;
pub mod errors;

use std::sync::LazyLock;

pub use helper_functions::{filter_countries, match_country};
use crate::countrydirectory::countrydirectory::CountryDirectory;
use crate::countrydirectory::country::Country;

/// Directory over the countries bundled with the crate. Built on first use.
pub static COUNTRY_DIRECTORY: LazyLock<CountryDirectory> = LazyLock::new(|| {
    CountryDirectory::new()
});

/// Returns every bundled country in directory order.
pub fn get_all_countries() -> &'static [Country] {
    COUNTRY_DIRECTORY.get_all_countries()
}

/// Returns the ISO2 code of the first country using exactly `dial_code`
/// (e.g. `"+44"` gives `"GB"`).
pub fn get_iso_code(dial_code: &str) -> Option<&'static str> {
    COUNTRY_DIRECTORY.get_iso_code(dial_code)
}

/// Returns the dial code of the country whose stored ISO2 code is exactly
/// `iso_code`. The comparison is case-sensitive, so `"us"` finds nothing.
pub fn get_dial_code(iso_code: &str) -> Option<&'static str> {
    COUNTRY_DIRECTORY.get_dial_code(iso_code)
}

/// Returns the flag of the first country matching `identifier` either as a
/// dial code or as a case-insensitive ISO2 code.
pub fn get_country_flag(identifier: &str) -> Option<&'static str> {
    COUNTRY_DIRECTORY.get_country_flag(identifier)
}

/// Same lookup as [`get_country_flag`], returning the country name.
pub fn get_country_name(identifier: &str) -> Option<&'static str> {
    COUNTRY_DIRECTORY.get_country_name(identifier)
}

/// Same lookup as [`get_country_flag`], returning the whole record.
pub fn get_country_object(identifier: &str) -> Option<&'static Country> {
    COUNTRY_DIRECTORY.get_country_object(identifier)
}
