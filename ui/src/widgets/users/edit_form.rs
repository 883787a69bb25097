use egui::{Context, Window};
use roster_business::{UiMode, UserAction, UsersState};

/// The shared edit form, shown only while a row is being edited.
///
/// Closing the window counts as Cancel.
pub fn edit_user_window(state: &mut UsersState, ctx: &Context) -> Option<UserAction> {
    let UiMode::Editing { id } = state.mode else {
        return None;
    };

    let mut open = true;
    let mut action = None;

    Window::new("Edit User")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("User ID: {id}"));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Edit first name:");
                ui.text_edit_singleline(&mut state.edit_form.first_name);
            });
            ui.horizontal(|ui| {
                ui.label("Edit last name:");
                ui.text_edit_singleline(&mut state.edit_form.last_name);
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(UserAction::Save);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(UserAction::Cancel);
                }
            });
        });

    if !open {
        action = Some(UserAction::Cancel);
    }
    action
}
