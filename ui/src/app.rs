use roster_business::UserAction;

use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
    started: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            started: false,
        }
    }

    /// Wires request completion to repaints and kicks off the initial load.
    fn start(&mut self, ctx: &egui::Context) {
        let repaint_ctx = ctx.clone();
        self.state
            .controller
            .set_repaint(move || repaint_ctx.request_repaint());
        self.state.controller.dispatch(UserAction::Refresh);
        self.started = true;
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.start(ctx);
        }

        // Apply finished requests before drawing
        self.state.controller.poll();

        let mut actions = Vec::new();
        let users = self.state.controller.state_mut();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Users");
            ui.separator();
            actions.extend(widgets::users_panel(users, ui));
        });

        actions.extend(widgets::edit_user_window(users, ctx));
        actions.extend(widgets::users_notice(users.notice, ctx));

        // Dispatch after drawing so the state is not mutated mid-frame
        for action in actions {
            self.state.controller.dispatch(action);
        }
    }
}
