use egui::accesskit::Role;
use kittest::Queryable;
use signin_business::LoginStatus;
use wiremock::ResponseTemplate;

use crate::common::TestCtx;

mod common;

const NETWORK_ERROR: &str = "A network error occurred. Please try again later.";

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": 1,
        "username": "alice",
        "email": "alice@example.com",
        "role": "user",
        "status": "active"
    }))
}

/// Tests that the login form is displayed with all expected elements.
#[tokio::test]
async fn test_login_form_displayed() {
    let mut ctx = TestCtx::new_app("", accepted()).await;

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label("Sign in").is_some(),
        "Sign in heading should be displayed"
    );
    assert!(
        harness.query_by_label("Log in").is_some(),
        "Log in button should be displayed"
    );
    assert!(
        harness.query_by_label(NETWORK_ERROR).is_none(),
        "No error line before the first submission"
    );
}

/// The submit button does nothing while a required field is empty.
#[tokio::test]
async fn test_submit_requires_both_fields() {
    let mut ctx = TestCtx::new_app("", accepted()).await;
    ctx.fill("alice", "");

    ctx.submit();

    let state = ctx.harness_mut().state().state();
    assert_eq!(state.form.status, LoginStatus::Idle);
    assert!(ctx.navigator().history().is_empty());
}

#[tokio::test]
async fn test_success_redirects_to_callback() {
    let mut ctx = TestCtx::new_app("?callback=/dashboard", accepted()).await;
    ctx.fill("alice", "correct horse");

    ctx.submit();
    ctx.wait_for_answer().await;

    assert_eq!(ctx.navigator().history(), vec!["/dashboard".to_owned()]);
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Continuing to /dashboard")
            .is_some(),
        "redirect notice should be displayed"
    );
}

#[tokio::test]
async fn test_success_without_callback_redirects_to_root() {
    let mut ctx = TestCtx::new_app("", accepted()).await;
    ctx.fill("alice", "correct horse");

    ctx.submit();
    ctx.wait_for_answer().await;

    assert_eq!(ctx.navigator().history(), vec!["/".to_owned()]);
}

#[tokio::test]
async fn test_rejection_shows_server_message() {
    let mut ctx = TestCtx::new_app(
        "?callback=/dashboard",
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
    )
    .await;
    ctx.fill("alice", "wrong");

    ctx.submit();
    ctx.wait_for_answer().await;

    assert!(
        ctx.harness_mut().query_by_label("Invalid credentials").is_some(),
        "server message should be shown inline"
    );
    assert!(ctx.navigator().history().is_empty());
}

#[tokio::test]
async fn test_rejection_without_message_shows_default() {
    let mut ctx = TestCtx::new_app(
        "",
        ResponseTemplate::new(401).set_body_json(serde_json::json!({})),
    )
    .await;
    ctx.fill("alice", "wrong");

    ctx.submit();
    ctx.wait_for_answer().await;

    assert!(
        ctx.harness_mut().query_by_label("Login failed.").is_some(),
        "default failure line should be shown"
    );
}

#[tokio::test]
async fn test_offline_shows_network_error() {
    let mut ctx = TestCtx::new_app_offline().await;
    ctx.fill("alice", "correct horse");

    ctx.submit();
    ctx.wait_for_answer().await;

    assert!(
        ctx.harness_mut().query_by_label(NETWORK_ERROR).is_some(),
        "network error line should be shown"
    );
    assert!(ctx.navigator().history().is_empty());
}

#[tokio::test]
async fn test_editing_after_error_keeps_error() {
    let mut ctx = TestCtx::new_app(
        "",
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
    )
    .await;
    ctx.fill("alice", "wrong");

    ctx.submit();
    ctx.wait_for_answer().await;

    ctx.type_into(Role::PasswordInput, "!");

    let harness = ctx.harness_mut();
    let secret = &harness.state().state().form.secret;
    assert!(secret.contains('!'), "typed text should reach the form, got {secret:?}");
    assert!(
        harness.query_by_label("Invalid credentials").is_some(),
        "editing a field should not clear the error"
    );
}

/// Typing into the fields lands in the form state.
#[tokio::test]
async fn test_typing_fills_both_fields() {
    let mut ctx = TestCtx::new_app("", accepted()).await;

    ctx.type_into(Role::TextInput, "alice");
    ctx.type_into(Role::PasswordInput, "hunter2");

    let form = &ctx.harness_mut().state().state().form;
    assert_eq!(form.identifier, "alice");
    assert_eq!(form.secret, "hunter2");
    assert_eq!(form.status, LoginStatus::Idle);
    assert!(ctx.received_logins().await.is_empty());
}

/// Enter in the secret field submits what was typed, exactly once.
#[tokio::test]
async fn test_enter_in_secret_field_submits_once() {
    let mut ctx = TestCtx::new_app("?callback=/dashboard", accepted()).await;
    ctx.type_into(Role::TextInput, "alice");
    ctx.type_into(Role::PasswordInput, "hunter2");

    ctx.press_enter();
    ctx.wait_for_answer().await;

    assert_eq!(
        ctx.received_logins().await,
        vec![serde_json::json!({ "email": "alice", "password": "hunter2" })]
    );
    assert_eq!(ctx.navigator().history(), vec!["/dashboard".to_owned()]);
}

/// Enter does nothing while a required field is empty.
#[tokio::test]
async fn test_enter_with_empty_secret_does_not_submit() {
    let mut ctx = TestCtx::new_app("", accepted()).await;
    ctx.type_into(Role::TextInput, "alice");

    ctx.press_enter();
    ctx.wait_for_answer().await;

    assert_eq!(ctx.harness_mut().state().state().form.status, LoginStatus::Idle);
    assert!(ctx.received_logins().await.is_empty());
    assert!(ctx.navigator().history().is_empty());
}
