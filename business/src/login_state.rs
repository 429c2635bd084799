//! View state of the login form.
//!
//! The form owns the two credential fields and the inline error line. Every
//! change goes through one of the transition methods, so the view can be
//! driven and inspected without any UI toolkit:
//!
//! - [`LoginForm::set_field`] on every edit
//! - [`LoginForm::begin_submit`] when the form is submitted
//! - [`LoginForm::submit_succeeded`] / [`LoginForm::submit_failed`] when the
//!   backend answer has been resolved
//!
//! ```text
//! Idle ──submit──▶ Submitting ──┬──▶ Redirected
//!   ▲                           └──▶ Failed ──submit──▶ Submitting
//! ```

use serde::Serialize;

/// Body posted to the credential endpoint.
///
/// The backend reads the identifier under `email` even though the field is
/// labelled as a user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Identifier,
    Secret,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    /// The latest submission has not been answered yet.
    Submitting,
    /// The page was sent to `target`.
    Redirected { target: String },
    /// The error line is showing.
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub identifier: String,
    pub secret: String,
    /// Inline error of the last completed submission.
    pub error: Option<String>,
    pub status: LoginStatus,
    /// Submissions sent but not yet answered.
    in_flight: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one field with the control's current content.
    ///
    /// Deliberately leaves `error` alone: only a new submission clears it.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        let slot = match field {
            LoginField::Identifier => &mut self.identifier,
            LoginField::Secret => &mut self.secret,
        };
        *slot = value.into();
    }

    /// Whether both fields hold something, mirroring the `required` gate
    /// in front of the submit logic.
    pub fn can_submit(&self) -> bool {
        !self.identifier.is_empty() && !self.secret.is_empty()
    }

    /// Starts a submission: clears the error line and snapshots the
    /// credentials for the request.
    ///
    /// Nothing stops a second call while a request is in flight; each call
    /// yields its own request.
    pub fn begin_submit(&mut self) -> LoginRequest {
        self.error = None;
        self.status = LoginStatus::Submitting;
        self.in_flight += 1;

        LoginRequest {
            email: self.identifier.clone(),
            password: self.secret.clone(),
        }
    }

    pub fn submit_succeeded(&mut self, target: impl Into<String>) {
        self.error = None;
        self.status = LoginStatus::Redirected {
            target: target.into(),
        };
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.status = LoginStatus::Failed;
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Whether any submission is still waiting for its answer.
    ///
    /// Stays true after an earlier answer while a later request is pending.
    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn redirected_to(&self) -> Option<&str> {
        match &self.status {
            LoginStatus::Redirected { target } => Some(target),
            _ => None,
        }
    }
}
