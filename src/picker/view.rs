use std::sync::Arc;

use crate::countrydirectory::country::Country;

/// Snapshot of everything the host has to draw.
#[derive(Debug)]
pub struct PickerView<'a> {
    pub flag: &'a str,
    pub dial_code: &'a str,
    /// e.g. `Selected country: Canada. Tap to change country`
    pub accessibility_label: String,
    /// `None` when text input is disabled.
    pub phone_input: Option<PhoneInputView<'a>>,
    /// `None` while the modal is closed.
    pub country_modal: Option<CountryModalView<'a>>,
}

#[derive(Debug)]
pub struct PhoneInputView<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
}

#[derive(Debug)]
pub struct CountryModalView<'a> {
    pub title: &'a str,
    pub search_text: &'a str,
    pub search_placeholder: &'a str,
    pub search_icon: &'a str,
    /// Rows of the list, already filtered by `search_text`.
    pub countries: Arc<[&'static Country]>,
}

impl CountryModalView<'_> {
    pub fn countries(&self) -> &[&'static Country] {
        &self.countries
    }
}
