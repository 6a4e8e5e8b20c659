/// Dial code shown before a country has been picked.
pub const DEFAULT_COUNTRY_CODE: &str = "+1";
/// Flag shown before a country has been picked.
pub const DEFAULT_FLAG: &str = "🇺🇸";
pub const DEFAULT_PLACEHOLDER: &str = "Enter phone number";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search countries";
pub const DEFAULT_SEARCH_ICON: &str = "🔍";
pub const DEFAULT_MODAL_TITLE: &str = "Select a country";

/// Settings of a single [`PhonePicker`](super::PhonePicker).
///
/// `default_country_code` and `default_flag` are shown as given; they are
/// not looked up in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonePickerConfig {
    pub default_country_code: String,
    pub default_flag: String,
    /// Initial content of the phone number field.
    pub phone_value: String,
    pub placeholder: String,
    /// Hides the phone number field and ignores text changes.
    pub disable_text_input: bool,
    /// Opens (`Some(true)`) or closes the country modal from the start.
    pub open_country_modal: Option<bool>,
    pub modal_title: String,
    pub search_placeholder: String,
    pub search_icon: String,
}

impl Default for PhonePickerConfig {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            default_flag: DEFAULT_FLAG.to_string(),
            phone_value: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            disable_text_input: false,
            open_country_modal: None,
            modal_title: DEFAULT_MODAL_TITLE.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            search_icon: DEFAULT_SEARCH_ICON.to_string(),
        }
    }
}
