use crate::countrydirectory::country::Country;

/// Small directory for tests. The order is chosen so that shared dial codes
/// resolve to the first entry: `+1` to US, `+7` to RU, `+44` to GB.
pub static TEST_COUNTRIES: &[Country] = &[
    Country::new("United States", "US", "+1", "🇺🇸"),
    Country::new("Canada", "CA", "+1", "🇨🇦"),
    Country::new("Russia", "RU", "+7", "🇷🇺"),
    Country::new("Kazakhstan", "KZ", "+7", "🇰🇿"),
    Country::new("United Kingdom", "GB", "+44", "🇬🇧"),
    Country::new("Guernsey", "GG", "+44", "🇬🇬"),
    Country::new("Australia", "AU", "+61", "🇦🇺"),
    Country::new("Belarus", "BY", "+375", "🇧🇾"),
    Country::new("Germany", "DE", "+49", "🇩🇪"),
    Country::new("Bosnia and Herzegovina", "BA", "+387", "🇧🇦"),
    Country::new("Dominican Republic", "DO", "+1809", "🇩🇴"),
    Country::new("Côte d'Ivoire", "CI", "+225", "🇨🇮"),
];

pub static TEST_COMMON_NAMES: &[(&str, &[&str])] = &[
    ("US", &["USA", "United States", "America", "U.S.A.", "U.S."]),
    ("GB", &["UK", "Britain", "Great Britain", "England"]),
    ("DE", &["Deutschland"]),
    ("CI", &["Ivory Coast"]),
];
