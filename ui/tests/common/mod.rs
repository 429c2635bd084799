use std::time::Duration;

use egui::Key;
use egui::accesskit::Role;
use egui_kittest::Harness;
use kittest::Queryable;
use signin_business::{LoginField, MemoryNavigator};
use signin_ui::SigninApp;
use signin_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: Option<MockServer>,
    navigator: MemoryNavigator,
    harness: Harness<'a, SigninApp>,
}

impl<'a> TestCtx<'a> {
    /// App on a page with query string `query`, backed by a server that
    /// answers every login with `response`.
    pub async fn new_app(query: &str, response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/user/login"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let navigator = MemoryNavigator::with_query(query);
        let state = State::test(mock_server.uri(), navigator.clone());
        Self::with_state(Some(mock_server), navigator, state)
    }

    /// App whose backend refuses connections.
    pub async fn new_app_offline() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("should bind an ephemeral port")
            .port();

        let navigator = MemoryNavigator::new();
        let state = State::test(format!("http://127.0.0.1:{port}"), navigator.clone());
        Self::with_state(None, navigator, state)
    }

    fn with_state(
        mock_server: Option<MockServer>,
        navigator: MemoryNavigator,
        state: State,
    ) -> Self {
        let app = SigninApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            navigator,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, SigninApp> {
        &mut self.harness
    }

    pub fn navigator(&self) -> &MemoryNavigator {
        &self.navigator
    }

    /// Fills both fields the way typing into them would.
    pub fn fill(&mut self, identifier: &str, secret: &str) {
        let form = &mut self.harness.state_mut().state_mut().form;
        form.set_field(LoginField::Identifier, identifier);
        form.set_field(LoginField::Secret, secret);
        self.harness.step();
    }

    /// Focuses the field with `role` and types `text` into it, as a user
    /// would. The identifier is a `TextInput`, the secret a `PasswordInput`.
    pub fn type_into(&mut self, role: Role, text: &str) {
        self.harness.get_by_role(role).focus();
        self.harness.step();

        self.harness.get_by_role(role).type_text(text);
        self.harness.step();
    }

    /// Presses Enter in whichever field has focus.
    pub fn press_enter(&mut self) {
        self.harness.key_press(Key::Enter);

        for _ in 0..10 {
            self.harness.step();
            if self.harness.state().state().form.is_submitting() {
                return;
            }
        }
    }

    /// JSON bodies of every login request the backend received.
    pub async fn received_logins(&self) -> Vec<serde_json::Value> {
        let Some(mock_server) = &self.mock_server else {
            return Vec::new();
        };

        mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .body_json::<serde_json::Value>()
                    .expect("login body should be JSON")
            })
            .collect()
    }

    /// Clicks the submit button and steps until the request is in flight.
    pub fn submit(&mut self) {
        self.harness.get_by_label("Log in").click();

        for _ in 0..10 {
            self.harness.step();
            if self.harness.state().state().form.is_submitting() {
                return;
            }
        }
    }

    /// Steps frames until the latest submission has been applied.
    pub async fn wait_for_answer(&mut self) {
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();

            if !self.harness.state().state().form.is_submitting() {
                break;
            }
        }

        // One more frame to render the outcome
        self.harness.step();
    }
}
