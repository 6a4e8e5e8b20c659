/// Input delivered by the host UI, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The phone number field content changed.
    PhoneTextChanged(String),
    /// The flag and dial code button was pressed; toggles the modal.
    FlagButtonPressed,
    /// The host opens or closes the modal programmatically.
    ExternalModalControl(bool),
    /// The modal search box content changed.
    SearchTextChanged(String),
    /// A row of the country list was tapped. Carries the row's ISO2 code.
    CountryTapped(String),
    /// The dimmed area around the modal was tapped.
    BackdropTapped,
    /// The platform asked to close the modal (e.g. Android back button).
    CloseRequested,
}
