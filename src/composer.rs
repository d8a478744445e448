//! Notification composer screen
//!
//! Pick a template, fill in its `{{variables}}`, and send it to a recipient.
//! A side panel fires the backend's predefined test sends.

mod composer_events;
mod composer_render;
mod composer_state;

pub use composer_events::handle_composer_key;
pub use composer_render::render_composer;
pub use composer_state::{
    ComposerField, ComposerState, RECIPIENT_REQUIRED, SEND_FAILED, TEMPLATE_REQUIRED,
    TEST_FAILED, VariableInput,
};
