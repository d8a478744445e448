//! Tests for composer key handling

use super::*;
use crate::api::{ApiPayload, ApiRequest, QuickTest};
use crate::test_utils::test_helpers::{
    FakeWorker, char_key, key, reply, template, test_api, type_keys,
};

fn mounted() -> (ComposerState, ApiHandle, FakeWorker) {
    let (mut api, mut worker) = test_api();
    let mut state = ComposerState::mount(&mut api);
    let job = worker.expect_job(|r| *r == ApiRequest::Templates);
    state.handle_response(reply(
        &job,
        ApiPayload::Templates(Ok(vec![
            template(1, "welcome", "Welcome {{name}}", "Hi {{name}}"),
            template(2, "order", "Order {{orderId}}", "Total {{total}}"),
        ])),
    ));
    (state, api, worker)
}

fn press_all(state: &mut ComposerState, api: &mut ApiHandle, keys: Vec<KeyEvent>) {
    for k in keys {
        handle_composer_key(state, api, k);
    }
}

#[test]
fn test_full_form_flow_by_keyboard() {
    let (mut state, mut api, mut worker) = mounted();

    // Template selector: pick "order"
    handle_composer_key(&mut state, &mut api, key(KeyCode::Down));
    handle_composer_key(&mut state, &mut api, key(KeyCode::Down));
    assert_eq!(state.selected_template().map(|t| t.id), Some(2));

    handle_composer_key(&mut state, &mut api, key(KeyCode::Tab));
    press_all(&mut state, &mut api, type_keys("bob@example.com"));

    handle_composer_key(&mut state, &mut api, key(KeyCode::Tab));
    press_all(&mut state, &mut api, type_keys("A-1"));
    handle_composer_key(&mut state, &mut api, key(KeyCode::Tab));
    press_all(&mut state, &mut api, type_keys("9.99"));

    handle_composer_key(&mut state, &mut api, key(KeyCode::Enter));

    let job = worker.expect_job(|r| matches!(r, ApiRequest::SendNotification(_)));
    let ApiRequest::SendNotification(request) = job.request else {
        unreachable!()
    };
    assert_eq!(request.recipient, "bob@example.com");
    assert_eq!(request.template_id, 2);
    assert_eq!(request.variables.get("orderId").map(String::as_str), Some("A-1"));
    assert_eq!(request.variables.get("total").map(String::as_str), Some("9.99"));
}

#[test]
fn test_typing_q_in_recipient_is_text() {
    let (mut state, mut api, _worker) = mounted();
    handle_composer_key(&mut state, &mut api, key(KeyCode::Tab));
    handle_composer_key(&mut state, &mut api, char_key('q'));
    assert_eq!(state.recipient_text(), "q");
    assert!(state.is_editing_text());
}

#[test]
fn test_enter_on_quick_test_button_sends_test() {
    let (mut state, mut api, mut worker) = mounted();
    handle_composer_key(&mut state, &mut api, key(KeyCode::BackTab));
    assert_eq!(
        state.focus(),
        ComposerField::QuickTest(QuickTest::OrderConfirmation)
    );

    handle_composer_key(&mut state, &mut api, key(KeyCode::Enter));
    assert_eq!(
        worker.take_requests(),
        vec![ApiRequest::SendTest(QuickTest::OrderConfirmation)]
    );
}

#[test]
fn test_esc_dismisses_alert() {
    let (mut state, mut api, _worker) = mounted();
    handle_composer_key(&mut state, &mut api, key(KeyCode::Enter));
    assert!(state.alert.is_visible());

    handle_composer_key(&mut state, &mut api, key(KeyCode::Esc));
    assert!(!state.alert.is_visible());
}

#[test]
fn test_enter_does_not_insert_newline() {
    let (mut state, mut api, _worker) = mounted();
    handle_composer_key(&mut state, &mut api, key(KeyCode::Tab));
    press_all(&mut state, &mut api, type_keys("a"));
    handle_composer_key(&mut state, &mut api, key(KeyCode::Enter));
    assert_eq!(state.recipient.lines().len(), 1);
}
