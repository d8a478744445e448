//! Template manager state

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tokio_util::sync::CancellationToken;
use tui_textarea::TextArea;

use crate::alert::AlertState;
use crate::api::{ApiError, ApiHandle, ApiPayload, ApiRequest, ApiResponse, Template, TemplateInput};
use crate::placeholders;
use crate::widgets::field::{create_textarea, textarea_text, textarea_with_text};

pub const SAVE_FAILED: &str = "Failed to save template";
pub const DELETE_FAILED: &str = "Failed to delete template";
pub const DELETE_SUCCEEDED: &str = "Template deleted successfully!";
pub const FIELDS_REQUIRED: &str = "Name, subject and body are required";

/// How long a saved editor stays open showing its success alert
pub const EDITOR_CLOSE_DELAY: Duration = Duration::from_millis(1500);
/// How long the delete confirmation stays on screen
pub const DELETE_ALERT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateMode {
    Browse,
    Editor,
    ConfirmDelete { id: i64, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Name,
    Subject,
    Body,
}

impl EditorField {
    fn next(self) -> Self {
        match self {
            EditorField::Name => EditorField::Subject,
            EditorField::Subject => EditorField::Body,
            EditorField::Body => EditorField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            EditorField::Name => EditorField::Body,
            EditorField::Subject => EditorField::Name,
            EditorField::Body => EditorField::Subject,
        }
    }
}

fn name_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = if text.is_empty() {
        create_textarea()
    } else {
        textarea_with_text(text)
    };
    textarea.set_placeholder_text("e.g., welcome, password-reset");
    textarea
}

fn subject_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = if text.is_empty() {
        create_textarea()
    } else {
        textarea_with_text(text)
    };
    textarea.set_placeholder_text("Welcome to {{appName}}, {{name}}!");
    textarea
}

fn body_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = if text.is_empty() {
        create_textarea()
    } else {
        textarea_with_text(text)
    };
    textarea.set_placeholder_text("Hello {{name}},\n\nWelcome to {{appName}}!");
    textarea
}

/// A save in flight, tagged with the editor session that issued it
#[derive(Debug, Clone, Copy)]
struct PendingSave {
    request_id: u64,
    session: u64,
}

pub struct TemplatesState {
    templates: Vec<Template>,
    pub table_state: TableState,
    mode: TemplateMode,
    /// Id of the template being edited; `None` while creating
    editing: Option<i64>,
    pub name: TextArea<'static>,
    pub subject: TextArea<'static>,
    pub body: TextArea<'static>,
    field: EditorField,
    pub alert: AlertState,
    close_at: Option<Instant>,
    /// Bumped each time the editor opens or closes
    editor_session: u64,
    cancel_token: CancellationToken,
    pending_templates: Option<u64>,
    pending_save: Option<PendingSave>,
    pending_delete: Option<u64>,
}

impl Default for TemplatesState {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplatesState {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            table_state: TableState::default(),
            mode: TemplateMode::Browse,
            editing: None,
            name: name_textarea(""),
            subject: subject_textarea(""),
            body: body_textarea(""),
            field: EditorField::Name,
            alert: AlertState::new(),
            close_at: None,
            editor_session: 0,
            cancel_token: CancellationToken::new(),
            pending_templates: None,
            pending_save: None,
            pending_delete: None,
        }
    }

    pub fn mount(api: &mut ApiHandle) -> Self {
        let mut state = Self::new();
        state.reload(api);
        state
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn mode(&self) -> &TemplateMode {
        &self.mode
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn field(&self) -> EditorField {
        self.field
    }

    pub fn is_loading(&self) -> bool {
        self.pending_templates.is_some()
    }

    /// True while a save issued from the open editor is in flight
    pub fn is_saving(&self) -> bool {
        self.pending_save
            .is_some_and(|pending| pending.session == self.editor_session)
    }

    pub fn close_at(&self) -> Option<Instant> {
        self.close_at
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// True while keystrokes belong to the editor or the delete prompt
    pub fn is_modal(&self) -> bool {
        self.mode != TemplateMode::Browse
    }

    pub fn reload(&mut self, api: &mut ApiHandle) {
        match api.dispatch(ApiRequest::Templates, &self.cancel_token) {
            Ok(id) => self.pending_templates = Some(id),
            Err(e) => log::warn!("Error loading templates: {}", e),
        }
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.table_state
            .selected()
            .and_then(|i| self.templates.get(i))
    }

    pub fn select_next(&mut self) {
        if self.templates.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.templates.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.templates.is_empty() {
            return;
        }
        let prev = self.table_state.selected().unwrap_or(0).saturating_sub(1);
        self.table_state.select(Some(prev));
    }

    /// Open an empty editor for a new template
    pub fn open_create(&mut self) {
        self.editing = None;
        self.name = name_textarea("");
        self.subject = subject_textarea("");
        self.body = body_textarea("");
        self.field = EditorField::Name;
        self.alert.dismiss();
        self.close_at = None;
        self.editor_session += 1;
        self.mode = TemplateMode::Editor;
    }

    /// Open the editor seeded from the selected template
    pub fn open_edit(&mut self) {
        let Some(template) = self.selected_template().cloned() else {
            return;
        };
        self.editing = Some(template.id);
        self.name = name_textarea(&template.name);
        self.subject = subject_textarea(&template.subject);
        self.body = body_textarea(&template.body);
        self.field = EditorField::Name;
        self.alert.dismiss();
        self.close_at = None;
        self.editor_session += 1;
        self.mode = TemplateMode::Editor;
    }

    /// Close the editor, clearing its fields and alert
    pub fn close_editor(&mut self) {
        self.mode = TemplateMode::Browse;
        self.editing = None;
        self.name = name_textarea("");
        self.subject = subject_textarea("");
        self.body = body_textarea("");
        self.field = EditorField::Name;
        self.alert.dismiss();
        self.close_at = None;
        self.editor_session += 1;
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    pub fn active_textarea_mut(&mut self) -> &mut TextArea<'static> {
        match self.field {
            EditorField::Name => &mut self.name,
            EditorField::Subject => &mut self.subject,
            EditorField::Body => &mut self.body,
        }
    }

    pub fn editor_input(&self) -> TemplateInput {
        TemplateInput {
            name: textarea_text(&self.name),
            subject: textarea_text(&self.subject),
            body: textarea_text(&self.body),
        }
    }

    /// Slots referenced by the editor's current subject and body
    pub fn editor_slots(&self) -> Vec<String> {
        placeholders::template_slots(&textarea_text(&self.subject), &textarea_text(&self.body))
    }

    /// Create or update, depending on whether an existing template is open
    pub fn save(&mut self, api: &mut ApiHandle) {
        if self.mode != TemplateMode::Editor || self.is_saving() {
            return;
        }
        if self.close_at.is_some() {
            log::debug!("Save ignored, editor is closing");
            return;
        }

        let input = self.editor_input();
        if input.name.trim().is_empty()
            || input.subject.trim().is_empty()
            || input.body.trim().is_empty()
        {
            self.alert.show_failure(FIELDS_REQUIRED);
            return;
        }

        let request = match self.editing {
            Some(id) => ApiRequest::UpdateTemplate { id, input },
            None => ApiRequest::CreateTemplate(input),
        };

        self.alert.dismiss();
        match api.dispatch(request, &self.cancel_token) {
            Ok(request_id) => {
                self.pending_save = Some(PendingSave {
                    request_id,
                    session: self.editor_session,
                })
            }
            Err(e) => self.alert.show_failure(e.message_or(SAVE_FAILED)),
        }
    }

    /// Ask for confirmation before deleting the selected template
    pub fn request_delete(&mut self) {
        if let Some(template) = self.selected_template() {
            self.mode = TemplateMode::ConfirmDelete {
                id: template.id,
                name: template.name.clone(),
            };
        }
    }

    pub fn cancel_delete(&mut self) {
        self.mode = TemplateMode::Browse;
    }

    pub fn confirm_delete(&mut self, api: &mut ApiHandle) {
        let TemplateMode::ConfirmDelete { id, .. } = self.mode else {
            return;
        };
        self.mode = TemplateMode::Browse;
        if self.pending_delete.is_some() {
            log::debug!("Delete ignored, another delete is in flight");
            return;
        }

        match api.dispatch(ApiRequest::DeleteTemplate(id), &self.cancel_token) {
            Ok(request_id) => self.pending_delete = Some(request_id),
            Err(_) => self.alert.show_failure(DELETE_FAILED),
        }
    }

    /// Advance the editor auto-close and the alert timeout
    pub fn tick(&mut self, now: Instant) {
        if let Some(close_at) = self.close_at
            && now >= close_at
        {
            self.close_editor();
        }
        self.alert.clear_if_expired_at(now);
    }

    pub fn handle_response(&mut self, response: ApiResponse, api: &mut ApiHandle) {
        let id = Some(response.request_id);
        match response.payload {
            ApiPayload::Templates(result) if id == self.pending_templates => {
                self.pending_templates = None;
                match result {
                    Ok(templates) => self.replace_templates(templates),
                    Err(e) => log::warn!("Error loading templates: {}", e),
                }
            }
            ApiPayload::TemplateSaved { created, result }
                if id == self.pending_save.map(|pending| pending.request_id) =>
            {
                let session = self.pending_save.take().map(|pending| pending.session);
                let current =
                    session == Some(self.editor_session) && self.mode == TemplateMode::Editor;
                self.on_saved(created, result, current, api);
            }
            ApiPayload::TemplateDeleted { result, .. } if id == self.pending_delete => {
                self.pending_delete = None;
                match result {
                    Ok(()) => {
                        self.alert
                            .show_transient_success(DELETE_SUCCEEDED, DELETE_ALERT_DURATION);
                        self.reload(api);
                    }
                    Err(e) => {
                        log::warn!("Delete failed: {}", e);
                        self.alert.show_failure(DELETE_FAILED);
                    }
                }
            }
            _ => {
                #[cfg(debug_assertions)]
                log::debug!("Template manager ignored response {}", response.request_id);
            }
        }
    }

    /// `current` is false when the editor that issued the save has since
    /// been closed or reopened; the open editor is then left alone.
    fn on_saved(
        &mut self,
        created: bool,
        result: Result<Template, ApiError>,
        current: bool,
        api: &mut ApiHandle,
    ) {
        match result {
            Ok(_) => {
                self.reload(api);
                if !current {
                    log::debug!("Template saved after its editor closed");
                    return;
                }
                let message = if created {
                    "Template created successfully!"
                } else {
                    "Template updated successfully!"
                };
                self.alert.show_success(message);
                self.close_at = Some(Instant::now() + EDITOR_CLOSE_DELAY);
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                if current {
                    self.alert.show_failure(e.message_or(SAVE_FAILED));
                }
            }
        }
    }

    fn replace_templates(&mut self, templates: Vec<Template>) {
        let selected_id = self.selected_template().map(|t| t.id);
        self.templates = templates;

        let index = selected_id
            .and_then(|id| self.templates.iter().position(|t| t.id == id))
            .or_else(|| {
                let previous = self.table_state.selected().unwrap_or(0);
                if self.templates.is_empty() {
                    None
                } else {
                    Some(previous.min(self.templates.len() - 1))
                }
            });
        self.table_state.select(index);
    }
}

impl Drop for TemplatesState {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
#[path = "templates_state_tests.rs"]
mod templates_state_tests;
