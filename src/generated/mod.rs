mod directory {
    use crate::countrydirectory::country::Country;

    include!(concat!(env!("OUT_DIR"), "/directory_gen.rs"));
}

// use only in test case
#[cfg(test)]
mod test_directory;

pub use directory::{COMMON_NAMES, COUNTRIES};
#[cfg(test)]
pub use test_directory::{TEST_COMMON_NAMES, TEST_COUNTRIES};
