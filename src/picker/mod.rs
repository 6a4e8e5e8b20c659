//! Toolkit independent state of a phone number input with a country picker.
//!
//! A [`PhonePicker`] owns everything the widget shows: the selected country,
//! the typed phone number, whether the country modal is open and what is
//! typed in its search box. The host feeds it [`PickerEvent`]s from its UI
//! event loop and draws the [`PickerView`] handed to its [`PickerRenderer`].

mod config;
mod events;
mod phonepicker;
mod selection;
mod view;

pub use config::PhonePickerConfig;
pub use events::PickerEvent;
pub use phonepicker::PhonePicker;
pub use selection::Selection;
pub use view::{CountryModalView, PhoneInputView, PickerView};

/// Receives a fresh view every time the picker state changes.
pub trait PickerRenderer {
    fn render(&mut self, view: &PickerView<'_>);
}

/// Adapts a closure to [`PickerRenderer`], see [`PhonePicker::render_with`].
pub(crate) struct FnRenderer<F>(pub F);

impl<F> PickerRenderer for FnRenderer<F>
where
    F: FnMut(&PickerView<'_>),
{
    fn render(&mut self, view: &PickerView<'_>) {
        (self.0)(view)
    }
}
