//! Notification composer state

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;
use tui_textarea::TextArea;

use crate::alert::AlertState;
use crate::api::{
    ApiError, ApiHandle, ApiPayload, ApiRequest, ApiResponse, QuickTest, SendRequest,
    SendResponse, Template,
};
use crate::placeholders;
use crate::widgets::field::{create_textarea, textarea_text};

pub const SEND_FAILED: &str = "Failed to send notification";
pub const TEST_FAILED: &str = "Failed to send test email";
pub const RECIPIENT_REQUIRED: &str = "Recipient is required";
pub const TEMPLATE_REQUIRED: &str = "Please select a template";

/// Focusable element of the form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerField {
    Template,
    Recipient,
    Variable(usize),
    QuickTest(QuickTest),
}

/// Value input for one `{{slot}}` of the selected template
pub struct VariableInput {
    pub name: String,
    pub textarea: TextArea<'static>,
}

/// The call currently in flight, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Submission {
    Send(u64),
    Test(u64),
}

pub struct ComposerState {
    templates: Vec<Template>,
    selected: Option<usize>,
    pub recipient: TextArea<'static>,
    variables: Vec<VariableInput>,
    pub alert: AlertState,
    focus: ComposerField,
    submission: Option<Submission>,
    cancel_token: CancellationToken,
    pending_templates: Option<u64>,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerState {
    pub fn new() -> Self {
        let mut recipient = create_textarea();
        recipient.set_placeholder_text("recipient@example.com");

        Self {
            templates: Vec::new(),
            selected: None,
            recipient,
            variables: Vec::new(),
            alert: AlertState::new(),
            focus: ComposerField::Template,
            submission: None,
            cancel_token: CancellationToken::new(),
            pending_templates: None,
        }
    }

    /// Create the screen and fetch the template list once
    pub fn mount(api: &mut ApiHandle) -> Self {
        let mut state = Self::new();
        match api.dispatch(ApiRequest::Templates, &state.cancel_token) {
            Ok(id) => state.pending_templates = Some(id),
            Err(e) => log::warn!("Error loading templates: {}", e),
        }
        state
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.selected.and_then(|i| self.templates.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn variables(&self) -> &[VariableInput] {
        &self.variables
    }

    pub fn variable_mut(&mut self, index: usize) -> Option<&mut TextArea<'static>> {
        self.variables.get_mut(index).map(|v| &mut v.textarea)
    }

    /// Slot name to entered value
    pub fn variable_values(&self) -> BTreeMap<String, String> {
        self.variables
            .iter()
            .map(|v| (v.name.clone(), textarea_text(&v.textarea)))
            .collect()
    }

    pub fn recipient_text(&self) -> String {
        textarea_text(&self.recipient)
    }

    pub fn focus(&self) -> ComposerField {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_some()
    }

    pub fn is_loading_templates(&self) -> bool {
        self.pending_templates.is_some()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// True while keystrokes go into a text field
    pub fn is_editing_text(&self) -> bool {
        matches!(
            self.focus,
            ComposerField::Recipient | ComposerField::Variable(_)
        )
    }

    /// Select a template (or none) and reset the value inputs to its slots
    ///
    /// Re-selecting the current template also clears the values.
    pub fn select_template(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.templates.len());
        let slots = self
            .selected_template()
            .map(|t| placeholders::template_slots(&t.subject, &t.body))
            .unwrap_or_default();

        self.variables = slots
            .into_iter()
            .map(|name| {
                let mut textarea = create_textarea();
                textarea.set_placeholder_text(format!("Enter value for {}", name));
                VariableInput { name, textarea }
            })
            .collect();

        if let ComposerField::Variable(i) = self.focus
            && i >= self.variables.len()
        {
            self.focus = ComposerField::Template;
        }
    }

    /// Step through `None, 0, 1, ..` in the template selector
    pub fn select_next_template(&mut self) {
        if self.templates.is_empty() {
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(i) if i + 1 < self.templates.len() => i + 1,
            // Already on the last template; keep the typed values
            Some(_) => return,
        };
        self.select_template(Some(next));
    }

    pub fn select_prev_template(&mut self) {
        let prev = match self.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.select_template(prev);
    }

    fn focus_order(&self) -> Vec<ComposerField> {
        let mut order = vec![ComposerField::Template, ComposerField::Recipient];
        order.extend((0..self.variables.len()).map(ComposerField::Variable));
        order.extend(QuickTest::ALL.into_iter().map(ComposerField::QuickTest));
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + order.len() - 1) % order.len()];
    }

    /// Validate and send the form
    ///
    /// Ignored while another call from this screen is in flight.
    pub fn submit(&mut self, api: &mut ApiHandle) {
        if self.submission.is_some() {
            log::debug!("Send ignored, a request is already in flight");
            return;
        }

        let recipient = self.recipient_text().trim().to_string();
        if recipient.is_empty() {
            self.alert.show_failure(RECIPIENT_REQUIRED);
            return;
        }
        let Some(template_id) = self.selected_template().map(|t| t.id) else {
            self.alert.show_failure(TEMPLATE_REQUIRED);
            return;
        };

        let request = SendRequest {
            recipient,
            template_id,
            variables: self.variable_values(),
        };

        self.alert.dismiss();
        match api.dispatch(ApiRequest::SendNotification(request), &self.cancel_token) {
            Ok(id) => self.submission = Some(Submission::Send(id)),
            Err(e) => self.alert.show_failure(e.message_or(SEND_FAILED)),
        }
    }

    /// Fire one of the predefined test sends
    pub fn send_quick_test(&mut self, test: QuickTest, api: &mut ApiHandle) {
        if self.submission.is_some() {
            log::debug!("Quick test ignored, a request is already in flight");
            return;
        }

        self.alert.dismiss();
        match api.dispatch(ApiRequest::SendTest(test), &self.cancel_token) {
            Ok(id) => self.submission = Some(Submission::Test(id)),
            Err(_) => self.alert.show_failure(TEST_FAILED),
        }
    }

    /// Empty the recipient, selection and values
    pub fn clear_form(&mut self) {
        let mut recipient = create_textarea();
        recipient.set_placeholder_text("recipient@example.com");
        self.recipient = recipient;
        self.select_template(None);
        self.focus = ComposerField::Template;
    }

    pub fn handle_response(&mut self, response: ApiResponse) {
        let id = response.request_id;
        match response.payload {
            ApiPayload::Templates(result) if Some(id) == self.pending_templates => {
                self.pending_templates = None;
                match result {
                    Ok(templates) => {
                        self.templates = templates;
                        self.select_template(None);
                    }
                    Err(e) => log::warn!("Error loading templates: {}", e),
                }
            }
            ApiPayload::NotificationSent(result)
                if self.submission == Some(Submission::Send(id)) =>
            {
                self.submission = None;
                self.on_sent(result);
            }
            ApiPayload::TestSent { result, .. } if self.submission == Some(Submission::Test(id)) => {
                self.submission = None;
                self.on_test_sent(result);
            }
            _ => {
                #[cfg(debug_assertions)]
                log::debug!("Composer ignored response {}", id);
            }
        }
    }

    fn on_sent(&mut self, result: Result<SendResponse, ApiError>) {
        match result {
            Ok(response) if response.success => {
                let id = response
                    .notification_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                self.clear_form();
                self.alert
                    .show_success(format!("Notification sent successfully! ID: {}", id));
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SEND_FAILED.to_string());
                self.alert.show_failure(message);
            }
            Err(e) => {
                log::warn!("Send failed: {}", e);
                self.alert.show_failure(e.message_or(SEND_FAILED));
            }
        }
    }

    fn on_test_sent(&mut self, result: Result<SendResponse, ApiError>) {
        match result {
            Ok(response) => {
                let message = response.message.filter(|m| !m.trim().is_empty());
                if response.success {
                    self.alert
                        .show_success(message.unwrap_or_else(|| "Test email sent".to_string()));
                } else {
                    self.alert
                        .show_failure(message.unwrap_or_else(|| TEST_FAILED.to_string()));
                }
            }
            Err(e) => {
                log::warn!("Test send failed: {}", e);
                self.alert.show_failure(e.message_or(TEST_FAILED));
            }
        }
    }
}

impl Drop for ComposerState {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
#[path = "composer_state_tests.rs"]
mod composer_state_tests;
