//! Template manager screen
//!
//! Lists the backend's email templates and lets the user create, edit and
//! delete them. The `{{variables}}` a template uses are shown as badges.

mod templates_events;
mod templates_render;
mod templates_state;

pub use templates_events::handle_templates_key;
pub use templates_render::render_templates;
pub use templates_state::{
    DELETE_FAILED, DELETE_SUCCEEDED, EditorField, FIELDS_REQUIRED, SAVE_FAILED, TemplateMode,
    TemplatesState,
};
