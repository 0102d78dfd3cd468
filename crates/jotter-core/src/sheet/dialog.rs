use super::{BottomSheet, SheetConfig, Transition};

/// How much of the screen a confirmation sheet covers.
pub const DIALOG_OPEN_HEIGHT: f64 = 0.35;

/// Yes/no prompt presented on a non-draggable bottom sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationDialog {
    title: String,
    description: String,
    loading: bool,
    sheet: BottomSheet,
}

impl ConfirmationDialog {
    /// Create the dialog and start its opening animation.
    pub fn open(
        title: impl Into<String>,
        description: impl Into<String>,
        screen_height: f64,
    ) -> Self {
        let mut sheet = BottomSheet::new(
            SheetConfig::new(screen_height)
                .open_height(DIALOG_OPEN_HEIGHT)
                .disabled(true),
        );
        sheet.show();
        Self {
            title: title.into(),
            description: description.into(),
            loading: false,
            sheet,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Positive action in flight; the confirm button shows a spinner.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub const fn sheet(&self) -> &BottomSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BottomSheet {
        &mut self.sheet
    }

    /// Close without confirming; ends with `SheetEvent::Dismissed`.
    pub fn cancel(&mut self) -> Option<Transition> {
        self.sheet.hide()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{SheetEvent, SheetState, SnapPoint};

    #[test]
    fn dialog_opens_to_its_fraction() {
        let mut dialog = ConfirmationDialog::open("Delete", "Are you sure?", 1000.0);
        assert!(!dialog.sheet().has_handle());
        assert_eq!(
            dialog.sheet().state(),
            SheetState::AnimatingTo(SnapPoint::HalfOpen)
        );
        dialog.sheet_mut().finish_animation();
        assert!((dialog.sheet().offset() - 650.0).abs() < 1e-9);
    }

    #[test]
    fn dismiss_reports_once() {
        let mut dialog = ConfirmationDialog::open("Delete", "Are you sure?", 1000.0);
        dialog.sheet_mut().finish_animation();
        assert!(dialog.cancel().is_some());
        assert!(dialog.cancel().is_none());
        assert_eq!(
            dialog.sheet_mut().finish_animation(),
            Some(SheetEvent::Dismissed)
        );
    }

    #[test]
    fn loading_flag_toggles() {
        let mut dialog = ConfirmationDialog::open("Logout", "Sure?", 800.0);
        assert!(!dialog.is_loading());
        dialog.set_loading(true);
        assert!(dialog.is_loading());
        assert_eq!(dialog.title(), "Logout");
        assert_eq!(dialog.description(), "Sure?");
    }
}
