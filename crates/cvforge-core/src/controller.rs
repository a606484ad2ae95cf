//! Form-state and submission controller.
//!
//! One explicitly constructed object owns everything the form screen needs:
//! the active theme, the three attachment slots, the experience rows, the two
//! free-text fields and the view/phase state machine:
//!
//! ```text
//! Form/Idle ──begin_submit──▶ Form/Submitting ──finish_submit(Ok)──▶ Result
//!     ▲                              │
//!     └──────── finish_submit(Err) ──┴──▶ Form/Error(message)
//! ```
//!
//! The controller never performs I/O itself except through the preference
//! store; the caller runs the request with [`crate::GenerateClient`] and
//! reports back.

use std::sync::Arc;

use crate::attachments::{Attachment, AttachmentSlot, AttachmentTracker, PreviewTicket};
use crate::config::ClientConfig;
use crate::error::{CvError, CvResult};
use crate::experience::{ExperienceList, RowId};
use crate::result::{populate, ResultView};
use crate::storage::PreferenceStore;
use crate::submission::{GenerateResponse, SubmissionPayload};
use crate::theme::{find_theme, resolve_theme, Theme, ThemeMenu};

/// Which top-level screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Result,
}

/// Sub-state of the form screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

pub struct FormController {
    config: ClientConfig,
    store: Arc<dyn PreferenceStore>,
    theme: &'static Theme,
    theme_menu: ThemeMenu,
    attachments: AttachmentTracker,
    experiences: ExperienceList,
    contact_phone: String,
    religion: String,
    view: View,
    phase: Phase,
    result: ResultView,
}

impl FormController {
    /// Build a controller and apply the persisted (or default) theme.
    pub fn new(config: ClientConfig, store: Arc<dyn PreferenceStore>) -> Self {
        let mut controller = Self {
            config,
            store,
            theme: resolve_theme(None),
            theme_menu: ThemeMenu::Closed,
            attachments: AttachmentTracker::new(),
            experiences: ExperienceList::new(),
            contact_phone: String::new(),
            religion: String::new(),
            view: View::Form,
            phase: Phase::Idle,
            result: ResultView::default(),
        };
        controller.init_theme();
        controller
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Theme
    // ═══════════════════════════════════════════════════════════════════════

    /// Re-apply the persisted theme, or the first registry entry.
    pub fn init_theme(&mut self) {
        let persisted = match self.store.load_theme_name() {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Failed to read saved theme: {}", e);
                None
            }
        };
        self.apply_theme(resolve_theme(persisted.as_deref()));
    }

    /// Make `theme` active, persist its name and close the selector.
    pub fn apply_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
        self.theme_menu = ThemeMenu::Closed;
        if let Err(e) = self.store.save_theme_name(theme.name) {
            tracing::warn!(theme = theme.name, "Failed to persist theme: {}", e);
        }
        tracing::debug!(theme = theme.name, "Theme applied");
    }

    /// Apply a theme picked from the selector. Unknown names are ignored.
    pub fn select_theme(&mut self, name: &str) -> bool {
        match find_theme(name) {
            Some(theme) => {
                self.apply_theme(theme);
                true
            }
            None => false,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn theme_menu(&self) -> ThemeMenu {
        self.theme_menu
    }

    pub fn toggle_theme_menu(&mut self) {
        self.theme_menu = self.theme_menu.toggled();
    }

    /// Outside clicks dismiss the option list.
    pub fn close_theme_menu(&mut self) {
        self.theme_menu = ThemeMenu::Closed;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Attachments
    // ═══════════════════════════════════════════════════════════════════════

    /// Store or clear a slot. Returns a decode ticket for new files.
    pub fn on_file_selected(
        &mut self,
        slot: AttachmentSlot,
        file: Option<Attachment>,
    ) -> Option<PreviewTicket> {
        self.attachments.select(slot, file)
    }

    pub fn complete_preview(&mut self, ticket: &PreviewTicket, result: CvResult<String>) -> bool {
        self.attachments.complete_preview(ticket, result)
    }

    pub fn attachments(&self) -> &AttachmentTracker {
        &self.attachments
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Experience rows and text fields
    // ═══════════════════════════════════════════════════════════════════════

    pub fn add_row(&mut self) -> Option<RowId> {
        self.experiences.add_row()
    }

    pub fn remove_row(&mut self, id: RowId) -> bool {
        self.experiences.remove_row(id)
    }

    pub fn update_country(&mut self, id: RowId, country: impl Into<String>) {
        self.experiences.update_country(id, country);
    }

    pub fn update_period(&mut self, id: RowId, period: impl Into<String>) {
        self.experiences.update_period(id, period);
    }

    pub fn experiences(&self) -> &ExperienceList {
        &self.experiences
    }

    pub fn set_contact_phone(&mut self, value: impl Into<String>) {
        self.contact_phone = value.into();
    }

    pub fn set_religion(&mut self, value: impl Into<String>) {
        self.religion = value.into();
    }

    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    pub fn religion(&self) -> &str {
        &self.religion
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Submission
    // ═══════════════════════════════════════════════════════════════════════

    pub fn view(&self) -> View {
        self.view
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// Submit is enabled iff every slot holds a file and nothing is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.attachments.is_complete() && !self.is_submitting()
    }

    /// Message for the error area, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting` and build the request payload.
    pub fn begin_submit(&mut self) -> CvResult<SubmissionPayload> {
        if self.is_submitting() {
            return Err(CvError::NotReady("a submission is already in flight".into()));
        }
        if !self.attachments.is_complete() {
            return Err(CvError::NotReady(format!(
                "{} of 3 photos attached",
                self.attachments.filled_count()
            )));
        }

        let experiences = self.experiences.to_json()?;
        let files = self
            .attachments
            .present()
            .map(|(slot, attachment)| (slot, attachment.clone()))
            .collect();

        self.phase = Phase::Submitting;
        tracing::info!(
            experiences = self.experiences.valid_rows().len(),
            "Submission started"
        );

        Ok(SubmissionPayload {
            files,
            contact_phone: self.contact_phone.clone(),
            religion: self.religion.clone(),
            experiences,
        })
    }

    /// Leave `Submitting` with the request's outcome.
    ///
    /// Returns `true` when the result screen is now shown.
    pub fn finish_submit(&mut self, outcome: CvResult<GenerateResponse>) -> bool {
        match outcome {
            Ok(response) => {
                self.result = populate(
                    response.full_name.as_deref(),
                    response.download_url.as_deref(),
                    &self.config,
                );
                self.phase = Phase::Idle;
                self.view = View::Result;
                true
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(%message, "Submission failed");
                self.phase = Phase::Error(message);
                false
            }
        }
    }

    pub fn result(&self) -> &ResultView {
        &self.result
    }

    /// Return to the form keeping everything entered.
    pub fn back_to_form(&mut self) {
        self.view = View::Form;
    }

    /// Start over with an empty form.
    pub fn reset(&mut self) {
        self.attachments.clear();
        self.experiences.clear();
        self.contact_phone.clear();
        self.religion.clear();
        self.result = ResultView::default();
        self.phase = Phase::Idle;
        self.view = View::Form;
        tracing::debug!("Form reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::PreviewState;
    use crate::storage::MemoryPreferences;

    fn controller() -> (FormController, MemoryPreferences) {
        let store = MemoryPreferences::new();
        let controller = FormController::new(ClientConfig::default(), Arc::new(store.clone()));
        (controller, store)
    }

    fn fill_slots(controller: &mut FormController) {
        for slot in AttachmentSlot::ALL {
            controller.on_file_selected(slot, Some(Attachment::new("p.jpg", vec![0xFF, 0xD8])));
        }
    }

    #[test]
    fn test_default_theme_is_applied_and_persisted() {
        let (controller, store) = controller();
        assert_eq!(controller.theme().name, "Professional Blue");
        assert_eq!(
            store.load_theme_name().unwrap().as_deref(),
            Some("Professional Blue")
        );
    }

    #[test]
    fn test_selecting_theme_closes_menu() {
        let (mut controller, _) = controller();
        controller.toggle_theme_menu();
        assert!(controller.theme_menu().is_open());

        assert!(controller.select_theme("Emerald Green"));
        assert_eq!(controller.theme().name, "Emerald Green");
        assert!(!controller.theme_menu().is_open());

        assert!(!controller.select_theme("Nope"));
        assert_eq!(controller.theme().name, "Emerald Green");
    }

    #[test]
    fn test_outside_click_closes_menu() {
        let (mut controller, _) = controller();
        controller.toggle_theme_menu();
        assert!(controller.theme_menu().is_open());

        controller.close_theme_menu();
        assert!(!controller.theme_menu().is_open());
        assert_eq!(controller.theme().name, "Professional Blue");

        // Closing an already closed menu is a no-op
        controller.close_theme_menu();
        assert_eq!(controller.theme_menu(), ThemeMenu::Closed);
    }

    #[test]
    fn test_pending_preview_completes_after_round_trip_to_result() {
        let (mut controller, _) = controller();
        fill_slots(&mut controller);
        let ticket = controller
            .on_file_selected(
                AttachmentSlot::FullBody,
                Some(Attachment::new("body.png", vec![1, 2, 3])),
            )
            .unwrap();

        controller.begin_submit().unwrap();
        assert!(controller.finish_submit(Ok(GenerateResponse::default())));
        assert_eq!(controller.view(), View::Result);
        controller.back_to_form();

        assert_eq!(
            controller.attachments().preview(AttachmentSlot::FullBody),
            &PreviewState::Decoding
        );
        assert!(controller.complete_preview(&ticket, Ok("data:image/png;base64,AQID".into())));
        assert_eq!(
            controller.attachments().preview(AttachmentSlot::FullBody),
            &PreviewState::Ready("data:image/png;base64,AQID".into())
        );
    }

    #[test]
    fn test_submit_requires_all_slots() {
        let (mut controller, _) = controller();
        assert!(!controller.submit_enabled());
        assert!(matches!(controller.begin_submit(), Err(CvError::NotReady(_))));

        fill_slots(&mut controller);
        assert!(controller.submit_enabled());
    }

    #[test]
    fn test_begin_submit_blocks_second_request() {
        let (mut controller, _) = controller();
        fill_slots(&mut controller);

        controller.begin_submit().unwrap();
        assert!(controller.is_submitting());
        assert!(!controller.submit_enabled());
        assert!(matches!(controller.begin_submit(), Err(CvError::NotReady(_))));
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let (mut controller, _) = controller();
        fill_slots(&mut controller);
        controller.begin_submit().unwrap();
        controller.finish_submit(Err(CvError::Backend {
            status: 500,
            message: "storage full".into(),
        }));
        assert_eq!(controller.error(), Some("storage full"));

        controller.begin_submit().unwrap();
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn test_back_to_form_keeps_state() {
        let (mut controller, _) = controller();
        fill_slots(&mut controller);
        controller.set_religion("none");
        controller.begin_submit().unwrap();
        controller.finish_submit(Ok(GenerateResponse::default()));
        assert_eq!(controller.view(), View::Result);

        controller.back_to_form();
        assert_eq!(controller.view(), View::Form);
        assert!(controller.submit_enabled());
        assert_eq!(controller.religion(), "none");
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut controller, _) = controller();
        fill_slots(&mut controller);
        controller.add_row();
        controller.set_contact_phone("555-0100");
        controller.begin_submit().unwrap();
        controller.finish_submit(Ok(GenerateResponse {
            full_name: Some("Jane Doe".into()),
            download_url: Some("/files/jane.pdf".into()),
        }));

        controller.reset();
        assert_eq!(controller.view(), View::Form);
        assert_eq!(controller.phase(), &Phase::Idle);
        assert_eq!(controller.attachments().filled_count(), 0);
        assert!(controller.experiences().is_empty());
        assert_eq!(controller.contact_phone(), "");
        assert_eq!(controller.result(), &ResultView::default());
        assert!(!controller.submit_enabled());
    }
}
