use egui::{Color32, Context, Window};
use roster_business::UserAction;

/// Shows the add-form notice, if any, until OK is clicked.
pub fn users_notice(notice: Option<&str>, ctx: &Context) -> Option<UserAction> {
    let notice = notice?;
    let mut action = None;

    Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(Color32::from_rgb(255, 165, 0), notice);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                action = Some(UserAction::DismissNotice);
            }
        });

    action
}

#[cfg(test)]
mod users_notice_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::users::ADD_INCOMPLETE_NOTICE;

    use super::*;

    #[test]
    fn test_nothing_drawn_without_notice() {
        let harness = Harness::new_ui(|ui| {
            users_notice(None, ui.ctx());
        });
        assert!(harness.query_by_label("OK").is_none());
    }

    #[test]
    fn test_ok_dismisses() {
        let mut reported = None;
        {
            let mut harness = Harness::new_ui(|ui| {
                if let Some(action) = users_notice(Some(ADD_INCOMPLETE_NOTICE), ui.ctx()) {
                    reported = Some(action);
                }
            });
            assert!(harness.query_by_label(ADD_INCOMPLETE_NOTICE).is_some());
            harness.get_by_label("OK").click();
            harness.run();
        }
        assert_eq!(reported, Some(UserAction::DismissNotice));
    }
}
