use egui::Ui;
use roster_business::{AddForm, UserAction};

/// The add form: two name inputs and a submit button.
///
/// Inputs are bound straight to `form`. Returns [`UserAction::Submit`] when the
/// button is clicked; the form keeps its inputs afterwards.
pub fn add_user_form(form: &mut AddForm, ui: &mut Ui) -> Option<UserAction> {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label("First Name:");
            ui.text_edit_singleline(&mut form.first_name);
        });
        ui.horizontal(|ui| {
            ui.label("Last Name:");
            ui.text_edit_singleline(&mut form.last_name);
        });

        ui.add_space(4.0);
        ui.button("Add User")
            .on_hover_text(format!("{} {}", form.method, form.action))
            .clicked()
            .then_some(UserAction::Submit)
    })
    .inner
}
