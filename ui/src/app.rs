use crate::{state::State, widgets};

pub struct SigninApp {
    state: State,
}

impl SigninApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for SigninApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Answers that arrived since the last frame
        widgets::poll_login_result(&mut self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::login_widget(&mut self.state, ui);
        });
    }
}
