/// Number of distinct queries remembered by `CountryDirectory::search`
/// before the memo is dropped and starts over.
pub const SEARCH_CACHE_CAPACITY: usize = 64;
