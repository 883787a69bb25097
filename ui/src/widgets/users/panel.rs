//! Main panel for the user table.

use egui::Ui;
use roster_business::{UserAction, UsersState};

use super::add_form::add_user_form;
use super::table::users_table;

/// Draws the toolbar, the table and the add form.
///
/// Returns the actions clicked this frame, in the order they were drawn.
pub fn users_panel(state: &mut UsersState, ui: &mut Ui) -> Vec<UserAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        if ui.button("Refresh").clicked() {
            actions.push(UserAction::Refresh);
        }
        if state.is_busy() {
            ui.spinner();
            ui.label("Loading...");
        }
    });

    ui.add_space(8.0);
    actions.extend(users_table(&state.store, ui));

    ui.add_space(8.0);
    actions.extend(add_user_form(&mut state.add_form, ui));

    actions
}
