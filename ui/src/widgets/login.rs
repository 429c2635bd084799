//! Login widget.
//!
//! Displays a centered form with an identifier field, a masked secret field,
//! the submit button and the inline error line. Submitting hands the request
//! to a background task; its answer comes back through the state's channel
//! and is applied by [`poll_login_result`].

use egui::{Align, Button, Color32, Key, Layout, Response, RichText, TextEdit, Ui};
use log::warn;
use signin_business::{LoginField, LoginResolution, finish_login, submit_login};

use crate::{state::State, utils::spawn::spawn};

/// Red color for the error line
const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
/// Green color for the redirect notice
const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

const FIELD_WIDTH: f32 = 220.0;

/// Renders the login form, or the redirect notice once a login went through.
pub fn login_widget(state: &mut State, ui: &mut Ui) -> Response {
    match state.form.redirected_to() {
        Some(target) => {
            let target = target.to_owned();
            show_redirected(state, ui, &target)
        }
        None => show_login_form(state, ui),
    }
}

/// Shown where leaving the page is not possible (native builds).
fn show_redirected(state: &State, ui: &mut Ui, target: &str) -> Response {
    let messages = state.config.locale.messages();

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(20.0);
        ui.heading(messages.title);
        ui.add_space(24.0);
        ui.label(
            RichText::new(format!("{} {target}", messages.continuing_to)).color(COLOR_GREEN),
        );
    })
    .response
}

fn show_login_form(state: &mut State, ui: &mut Ui) -> Response {
    let messages = state.config.locale.messages();

    let mut identifier = state.form.identifier.clone();
    let mut secret = state.form.secret.clone();
    let mut should_submit = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading(messages.title);
            ui.add_space(24.0);

            let identifier_response = ui.add(
                TextEdit::singleline(&mut identifier)
                    .hint_text(messages.identifier_hint)
                    .desired_width(FIELD_WIDTH),
            );

            ui.add_space(8.0);

            let secret_response = ui.add(
                TextEdit::singleline(&mut secret)
                    .password(true)
                    .hint_text(messages.secret_hint)
                    .desired_width(FIELD_WIDTH),
            );

            // Enter in either field submits the form
            let entered = (identifier_response.lost_focus() || secret_response.lost_focus())
                && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(16.0);

            // Both fields are required before the form can be submitted
            let filled = !identifier.is_empty() && !secret.is_empty();
            let clicked = ui.add_enabled(filled, Button::new(messages.submit)).clicked();

            if state.form.is_submitting() {
                ui.add_space(4.0);
                ui.spinner();
            }

            should_submit = filled && (clicked || entered);

            if let Some(error) = &state.form.error {
                ui.add_space(8.0);
                ui.colored_label(COLOR_RED, error);
            }
        })
        .response;

    if state.form.identifier != identifier {
        state.form.set_field(LoginField::Identifier, identifier);
    }
    if state.form.secret != secret {
        state.form.set_field(LoginField::Secret, secret);
    }

    if should_submit {
        perform_login(state, ui.ctx());
    }

    response
}

/// Starts one submission with the form's current values.
///
/// Not guarded against a submission already in flight: every call sends its
/// own request and each answer is applied when it arrives.
pub fn perform_login(state: &mut State, ctx: &egui::Context) {
    let request = state.form.begin_submit();
    let config = state.config.clone();
    let sender = state.login_result_sender.clone();
    let ctx = ctx.clone();

    spawn(async move {
        let result = submit_login(&config, &request).await;
        if sender.send(result).is_err() {
            warn!("perform_login: view dropped before the answer arrived");
        }
        ctx.request_repaint();
    });
}

/// Applies every answer that arrived since the last frame.
///
/// Returns the resolution of the last one, if any.
pub fn poll_login_result(state: &mut State) -> Option<LoginResolution> {
    let messages = state.config.locale.messages();
    let mut last = None;

    while let Ok(result) = state.login_result_receiver.try_recv() {
        last = Some(finish_login(
            &mut state.form,
            &result,
            messages,
            state.navigator.as_ref(),
        ));
    }

    last
}
