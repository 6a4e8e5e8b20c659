use crate::countrydirectory::country::Country;

/// What the flag button currently shows.
///
/// Switching from one variant to the other replaces every field at once, so
/// a half updated selection can't be observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing picked yet: configured dial code and flag, no name or code.
    Default { dial_code: String, flag: String },
    Picked(Country),
}

impl Selection {
    pub fn dial_code(&self) -> &str {
        match self {
            Selection::Default { dial_code, .. } => dial_code.as_str(),
            Selection::Picked(country) => country.dial_code(),
        }
    }

    pub fn flag(&self) -> &str {
        match self {
            Selection::Default { flag, .. } => flag.as_str(),
            Selection::Picked(country) => country.flag(),
        }
    }

    /// Empty until a country is picked.
    pub fn name(&self) -> &str {
        match self {
            Selection::Default { .. } => "",
            Selection::Picked(country) => country.name(),
        }
    }

    /// Empty until a country is picked.
    pub fn iso2(&self) -> &str {
        match self {
            Selection::Default { .. } => "",
            Selection::Picked(country) => country.iso2(),
        }
    }

    pub fn country(&self) -> Option<&Country> {
        match self {
            Selection::Default { .. } => None,
            Selection::Picked(country) => Some(country),
        }
    }
}
