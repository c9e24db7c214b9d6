//! Local UI chrome state (form drafts, settings modal, header clock).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the board state so the
//! controller's renders never clobber what the user is typing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Text in the create form's content field.
    pub draft_content: String,
    /// `datetime-local` value in the create form's deadline field.
    pub draft_deadline: String,
    pub settings_open: bool,
    /// Text in the settings modal's threshold field.
    pub warning_hours_input: String,
    /// Current header clock text.
    pub clock_label: String,
    /// True while a create request is in flight.
    pub submitting: bool,
}

impl UiState {
    /// Clear the form after a successful create.
    pub fn reset_form(&mut self, default_deadline: String) {
        self.draft_content.clear();
        self.draft_deadline = default_deadline;
    }

    /// Open the settings modal showing `current_hours`.
    pub fn open_settings(&mut self, current_hours: String) {
        self.warning_hours_input = current_hours;
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }
}
