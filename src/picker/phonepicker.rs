// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use log::{debug, trace};

use super::{
    CountryModalView, FnRenderer, PhoneInputView, PhonePickerConfig, PickerEvent, PickerRenderer,
    PickerView, Selection,
};
use crate::countrydirectory::{COUNTRY_DIRECTORY, country::Country, countrydirectory::CountryDirectory};

const ACCESSIBILITY_LABEL_PREFIX: &str = "Selected country: ";
const ACCESSIBILITY_LABEL_SUFFIX: &str = ". Tap to change country";

pub struct PhonePicker<'d> {
    /// Source of the country list shown in the modal.
    directory: &'d CountryDirectory,

    config: PhonePickerConfig,

    /// Country shown on the flag button. Starts from the configured
    /// defaults and is only replaced when a list row is tapped.
    selection: Selection,

    phone_value: String,

    modal_visible: bool,

    /// Content of the modal search box. Kept while the modal is closed.
    search_text: String,

    on_select_country: Option<Box<dyn FnMut(&Country) + 'd>>,
    on_phone_number_change: Option<Box<dyn FnMut(&str) + 'd>>,
    renderer: Option<Box<dyn PickerRenderer + 'd>>,
}

impl PhonePicker<'static> {
    /// Creates a picker listing the bundled countries.
    pub fn new(config: PhonePickerConfig) -> Self {
        Self::with_directory(&COUNTRY_DIRECTORY, config)
    }
}

impl<'d> PhonePicker<'d> {
    pub fn with_directory(directory: &'d CountryDirectory, config: PhonePickerConfig) -> Self {
        Self {
            directory,
            selection: Selection::Default {
                dial_code: config.default_country_code.clone(),
                flag: config.default_flag.clone(),
            },
            phone_value: config.phone_value.clone(),
            modal_visible: config.open_country_modal.unwrap_or(false),
            search_text: String::new(),
            config,
            on_select_country: None,
            on_phone_number_change: None,
            renderer: None,
        }
    }

    /// Called with the full record every time a country is picked.
    pub fn on_select_country(mut self, callback: impl FnMut(&Country) + 'd) -> Self {
        self.on_select_country = Some(Box::new(callback));
        self
    }

    /// Called with the new text every time the phone number changes.
    pub fn on_phone_number_change(mut self, callback: impl FnMut(&str) + 'd) -> Self {
        self.on_phone_number_change = Some(Box::new(callback));
        self
    }

    /// Installs the renderer and renders the current state once.
    pub fn attach_renderer(&mut self, renderer: impl PickerRenderer + 'd) {
        self.renderer = Some(Box::new(renderer));
        self.render();
    }

    /// Same as [`PhonePicker::attach_renderer`] for a plain closure.
    pub fn render_with(&mut self, render: impl FnMut(&PickerView<'_>) + 'd) {
        self.attach_renderer(FnRenderer(render));
    }

    pub fn config(&self) -> &PhonePickerConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phone_value(&self) -> &str {
        &self.phone_value
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Countries listed in the modal for the current search text.
    pub fn visible_countries(&self) -> Arc<[&'static Country]> {
        self.directory.search(&self.search_text)
    }

    /// Selected dial code followed by the ASCII digits of the phone number,
    /// e.g. `+15550102000` for `+1` and `(555) 010-2000`. Nothing is validated.
    pub fn international_number(&self) -> String {
        let dial_code = self.selection.dial_code();
        let digits: String = self.phone_value.chars().filter(char::is_ascii_digit).collect();
        fast_cat::concat_str!(dial_code, &digits)
    }

    pub fn view(&self) -> PickerView<'_> {
        let name = self.selection.name();
        PickerView {
            flag: self.selection.flag(),
            dial_code: self.selection.dial_code(),
            accessibility_label: fast_cat::concat_str!(
                ACCESSIBILITY_LABEL_PREFIX,
                name,
                ACCESSIBILITY_LABEL_SUFFIX
            ),
            phone_input: (!self.config.disable_text_input).then(|| PhoneInputView {
                value: &self.phone_value,
                placeholder: &self.config.placeholder,
            }),
            country_modal: self.modal_visible.then(|| CountryModalView {
                title: &self.config.modal_title,
                search_text: &self.search_text,
                search_placeholder: &self.config.search_placeholder,
                search_icon: &self.config.search_icon,
                countries: self.visible_countries(),
            }),
        }
    }

    /// Applies a UI event. Returns whether the state changed, in which case
    /// the renderer has been called with the new view.
    pub fn handle_event(&mut self, event: PickerEvent) -> bool {
        trace!("Picker event: {:?}", event);
        let changed = match event {
            PickerEvent::PhoneTextChanged(text) => self.set_phone_value(text),
            PickerEvent::FlagButtonPressed => {
                self.modal_visible = !self.modal_visible;
                true
            }
            PickerEvent::ExternalModalControl(visible) => self.set_modal_visible(visible),
            PickerEvent::SearchTextChanged(text) => {
                if self.search_text == text {
                    false
                } else {
                    self.search_text = text;
                    true
                }
            }
            PickerEvent::CountryTapped(iso2) => self.select_tapped_country(&iso2),
            PickerEvent::BackdropTapped | PickerEvent::CloseRequested => {
                self.set_modal_visible(false)
            }
        };
        if changed {
            self.render();
        }
        changed
    }

    fn set_phone_value(&mut self, text: String) -> bool {
        if self.config.disable_text_input {
            trace!("Text input is disabled, ignoring {:?}", text);
            return false;
        }
        if self.phone_value == text {
            return false;
        }
        self.phone_value = text;
        if let Some(callback) = self.on_phone_number_change.as_mut() {
            callback(&self.phone_value);
        }
        true
    }

    fn set_modal_visible(&mut self, visible: bool) -> bool {
        if self.modal_visible == visible {
            return false;
        }
        self.modal_visible = visible;
        true
    }

    /// Rows can only be tapped while the modal is open, and only rows that
    /// the current search shows.
    fn select_tapped_country(&mut self, iso2: &str) -> bool {
        if !self.modal_visible {
            debug!("Ignoring tap on {} while the country modal is closed", iso2);
            return false;
        }
        let Some(country) = self
            .visible_countries()
            .iter()
            .find(|country| country.iso2() == iso2)
            .copied()
        else {
            debug!("Ignoring tap on {}, it is not in the visible list", iso2);
            return false;
        };

        self.selection = Selection::Picked(*country);
        debug!("Selected country {} ({})", country.iso2(), country.dial_code());
        if let Some(callback) = self.on_select_country.as_mut() {
            callback(country);
        }
        self.modal_visible = false;
        true
    }

    fn render(&mut self) {
        if let Some(mut renderer) = self.renderer.take() {
            renderer.render(&self.view());
            self.renderer = Some(renderer);
        }
    }
}
