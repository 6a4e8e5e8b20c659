use std::{cell::RefCell, rc::Rc};

use super::{init_logger, region_code::RegionCode};
use crate::{
    countrydirectory::{country::Country, countrydirectory::CountryDirectory},
    generated::{TEST_COMMON_NAMES, TEST_COUNTRIES},
    picker::{PhonePicker, PhonePickerConfig, PickerEvent, Selection},
};

fn get_directory() -> CountryDirectory {
    init_logger();
    CountryDirectory::new_for_data(TEST_COUNTRIES, TEST_COMMON_NAMES)
        .expect("Test directory should be valid")
}

/// What the renderer saw, one entry per render.
#[derive(Debug, Clone, PartialEq)]
struct Frame {
    flag: String,
    dial_code: String,
    label: String,
    phone: Option<String>,
    modal_rows: Option<Vec<&'static str>>,
}

fn recording_picker<'d>(
    directory: &'d CountryDirectory,
    config: PhonePickerConfig,
) -> (PhonePicker<'d>, Rc<RefCell<Vec<Frame>>>, Rc<RefCell<Vec<Country>>>) {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let selected = Rc::new(RefCell::new(Vec::new()));

    let selected_sink = selected.clone();
    let mut picker = PhonePicker::with_directory(directory, config)
        .on_select_country(move |country| selected_sink.borrow_mut().push(*country));

    let frames_sink = frames.clone();
    picker.render_with(move |view| {
        frames_sink.borrow_mut().push(Frame {
            flag: view.flag.to_string(),
            dial_code: view.dial_code.to_string(),
            label: view.accessibility_label.clone(),
            phone: view.phone_input.as_ref().map(|input| input.value.to_string()),
            modal_rows: view
                .country_modal
                .as_ref()
                .map(|modal| modal.countries().iter().map(|c| c.iso2()).collect()),
        })
    });
    (picker, frames, selected)
}

#[test]
fn initial_state_uses_defaults() {
    let directory = get_directory();
    let (picker, frames, selected) = recording_picker(&directory, PhonePickerConfig::default());

    assert_eq!(
        picker.selection(),
        &Selection::Default { dial_code: "+1".to_string(), flag: "🇺🇸".to_string() }
    );
    assert_eq!(picker.selection().name(), "");
    assert_eq!(picker.selection().iso2(), "");
    assert!(picker.selection().country().is_none());
    assert!(!picker.is_modal_visible());

    let frames = frames.borrow();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].flag, "🇺🇸");
    assert_eq!(frames[0].dial_code, "+1");
    assert_eq!(frames[0].label, "Selected country: . Tap to change country");
    assert_eq!(frames[0].phone, Some(String::new()));
    assert_eq!(frames[0].modal_rows, None);
    assert!(selected.borrow().is_empty());
}

#[test]
fn defaults_are_not_resolved_against_directory() {
    let directory = get_directory();
    let config = PhonePickerConfig {
        default_country_code: "+999".to_string(),
        default_flag: "🏳".to_string(),
        ..Default::default()
    };
    let picker = PhonePicker::with_directory(&directory, config);
    assert_eq!(picker.selection().dial_code(), "+999");
    assert_eq!(picker.selection().flag(), "🏳");
    assert_eq!(picker.view().dial_code, "+999");
}

#[test]
fn selecting_a_country() {
    let directory = get_directory();
    let (mut picker, frames, selected) =
        recording_picker(&directory, PhonePickerConfig::default());

    assert!(picker.handle_event(PickerEvent::FlagButtonPressed));
    assert!(picker.is_modal_visible());
    assert_eq!(
        frames.borrow().last().and_then(|frame| frame.modal_rows.as_ref().map(Vec::len)),
        Some(TEST_COUNTRIES.len())
    );

    assert!(picker.handle_event(PickerEvent::SearchTextChanged("+7".to_string())));
    assert_eq!(
        frames.borrow().last().and_then(|frame| frame.modal_rows.clone()),
        Some(vec![RegionCode::ru(), RegionCode::kz()])
    );

    assert!(picker.handle_event(PickerEvent::CountryTapped(RegionCode::kz().to_string())));
    assert!(!picker.is_modal_visible());

    let kazakhstan = TEST_COUNTRIES[3];
    assert_eq!(picker.selection(), &Selection::Picked(kazakhstan));
    assert_eq!(*selected.borrow(), vec![kazakhstan]);

    let frames = frames.borrow();
    let last = frames.last().expect("rendered");
    assert_eq!(last.flag, "🇰🇿");
    assert_eq!(last.dial_code, "+7");
    assert_eq!(last.label, "Selected country: Kazakhstan. Tap to change country");
    assert_eq!(last.modal_rows, None);
    // attach, open, search, select
    assert_eq!(frames.len(), 4);
}

#[test]
fn taps_outside_the_visible_list_are_ignored() {
    let directory = get_directory();
    let (mut picker, frames, selected) =
        recording_picker(&directory, PhonePickerConfig::default());

    // modal closed
    assert!(!picker.handle_event(PickerEvent::CountryTapped(RegionCode::de().to_string())));

    picker.handle_event(PickerEvent::FlagButtonPressed);
    picker.handle_event(PickerEvent::SearchTextChanged("united".to_string()));
    // filtered out by the search
    assert!(!picker.handle_event(PickerEvent::CountryTapped(RegionCode::de().to_string())));
    // not a directory entry at all
    assert!(!picker.handle_event(PickerEvent::CountryTapped(RegionCode::zz().to_string())));
    // lower case row keys are not rows
    assert!(!picker.handle_event(PickerEvent::CountryTapped("gb".to_string())));

    assert!(picker.selection().country().is_none());
    assert!(selected.borrow().is_empty());
    assert!(picker.is_modal_visible());
    // attach, open, search
    assert_eq!(frames.borrow().len(), 3);
}

#[test]
fn search_text_survives_closing_the_modal() {
    let directory = get_directory();
    let mut picker = PhonePicker::with_directory(&directory, PhonePickerConfig::default());

    picker.handle_event(PickerEvent::FlagButtonPressed);
    picker.handle_event(PickerEvent::SearchTextChanged("uk".to_string()));
    assert!(picker.handle_event(PickerEvent::BackdropTapped));
    assert!(!picker.is_modal_visible());
    assert!(!picker.handle_event(PickerEvent::CloseRequested));

    picker.handle_event(PickerEvent::FlagButtonPressed);
    assert_eq!(picker.search_text(), "uk");
    let rows: Vec<&str> = picker.visible_countries().iter().map(|c| c.iso2()).collect();
    assert_eq!(rows, vec![RegionCode::gb()]);
}

#[test]
fn modal_visibility_events() {
    let directory = get_directory();
    let config = PhonePickerConfig { open_country_modal: Some(true), ..Default::default() };
    let (mut picker, frames, _) = recording_picker(&directory, config);
    assert!(picker.is_modal_visible());

    // already open
    assert!(!picker.handle_event(PickerEvent::ExternalModalControl(true)));
    assert!(picker.handle_event(PickerEvent::ExternalModalControl(false)));
    assert!(!picker.is_modal_visible());
    assert!(picker.handle_event(PickerEvent::FlagButtonPressed));
    assert!(picker.handle_event(PickerEvent::FlagButtonPressed));
    assert!(!picker.is_modal_visible());
    assert!(!picker.handle_event(PickerEvent::BackdropTapped));

    // one render on attach and one per change
    assert_eq!(frames.borrow().len(), 4);
}

#[test]
fn phone_text_changes() {
    let directory = get_directory();
    let changes = Rc::new(RefCell::new(Vec::<String>::new()));
    let changes_sink = changes.clone();
    let mut picker = PhonePicker::with_directory(&directory, PhonePickerConfig::default())
        .on_phone_number_change(move |text| changes_sink.borrow_mut().push(text.to_string()));

    assert!(picker.handle_event(PickerEvent::PhoneTextChanged("555".to_string())));
    assert!(!picker.handle_event(PickerEvent::PhoneTextChanged("555".to_string())));
    assert!(picker.handle_event(PickerEvent::PhoneTextChanged("(555) 010-2000".to_string())));
    assert_eq!(picker.phone_value(), "(555) 010-2000");
    assert_eq!(*changes.borrow(), vec!["555".to_string(), "(555) 010-2000".to_string()]);
    assert_eq!(picker.international_number(), "+15550102000");

    picker.handle_event(PickerEvent::FlagButtonPressed);
    picker.handle_event(PickerEvent::CountryTapped(RegionCode::gb().to_string()));
    assert_eq!(picker.international_number(), "+445550102000");
}

#[test]
fn disabled_text_input() {
    let directory = get_directory();
    let config = PhonePickerConfig {
        disable_text_input: true,
        phone_value: "123".to_string(),
        ..Default::default()
    };
    let (mut picker, frames, _) = recording_picker(&directory, config);

    assert!(!picker.handle_event(PickerEvent::PhoneTextChanged("456".to_string())));
    assert_eq!(picker.phone_value(), "123");
    assert_eq!(frames.borrow().len(), 1);
    assert_eq!(frames.borrow()[0].phone, None);
}

#[test]
fn reselecting_replaces_the_whole_record() {
    let directory = get_directory();
    let (mut picker, _, selected) = recording_picker(&directory, PhonePickerConfig::default());

    for iso2 in [RegionCode::us(), RegionCode::ca(), RegionCode::ca()] {
        picker.handle_event(PickerEvent::FlagButtonPressed);
        assert!(picker.handle_event(PickerEvent::CountryTapped(iso2.to_string())));
        let country = picker.selection().country().copied().expect("picked");
        assert_eq!(country.iso2(), iso2);
        assert_eq!(Some(&country), directory.get_country_object(iso2));
    }
    // every selection notifies, even a repeated one
    let notified: Vec<&str> = selected.borrow().iter().map(|c| c.iso2()).collect();
    assert_eq!(notified, vec![RegionCode::us(), RegionCode::ca(), RegionCode::ca()]);
}

#[test]
fn bundled_directory_picker() {
    init_logger();
    let mut picker = PhonePicker::new(PhonePickerConfig::default());
    picker.handle_event(PickerEvent::FlagButtonPressed);
    picker.handle_event(PickerEvent::SearchTextChanged("usa".to_string()));
    assert!(picker.handle_event(PickerEvent::CountryTapped(RegionCode::us().to_string())));
    assert_eq!(picker.selection().name(), "United States");
    assert_eq!(picker.view().flag, "🇺🇸");
}

#[test]
fn default_texts_reach_the_view() {
    let directory = get_directory();
    let mut picker = PhonePicker::with_directory(&directory, PhonePickerConfig::default());
    picker.handle_event(PickerEvent::FlagButtonPressed);

    let view = picker.view();
    let input = view.phone_input.as_ref().expect("text input is enabled");
    assert_eq!(input.placeholder, "Enter phone number");
    assert_eq!(input.value, "");

    let modal = view.country_modal.as_ref().expect("modal is open");
    assert_eq!(modal.title, "Select a country");
    assert_eq!(modal.search_placeholder, "Search countries");
    assert_eq!(modal.search_icon, "🔍");
    assert_eq!(modal.search_text, "");
}

#[test]
fn custom_texts_reach_the_view() {
    let directory = get_directory();
    let config = PhonePickerConfig {
        phone_value: "030 1234".to_string(),
        placeholder: "Telefonnummer".to_string(),
        modal_title: "Land wählen".to_string(),
        search_placeholder: "Länder suchen".to_string(),
        search_icon: "🔎".to_string(),
        open_country_modal: Some(true),
        ..Default::default()
    };
    let mut picker = PhonePicker::with_directory(&directory, config);
    picker.handle_event(PickerEvent::SearchTextChanged("deutsch".to_string()));

    let view = picker.view();
    let input = view.phone_input.as_ref().expect("text input is enabled");
    assert_eq!(input.placeholder, "Telefonnummer");
    assert_eq!(input.value, "030 1234");

    let modal = view.country_modal.as_ref().expect("modal is open");
    assert_eq!(modal.title, "Land wählen");
    assert_eq!(modal.search_placeholder, "Länder suchen");
    assert_eq!(modal.search_icon, "🔎");
    assert_eq!(modal.search_text, "deutsch");
    assert_eq!(
        modal.countries().iter().map(|c| c.iso2()).collect::<Vec<_>>(),
        vec![RegionCode::de()]
    );
}
