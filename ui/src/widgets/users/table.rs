//! The user rows, in a Typora-like grid with clean borders.

use egui::{Color32, Frame, InnerResponse, Margin, ScrollArea, Stroke, Ui};
use roster_business::{UserAction, UserStore};

/// Border color for the table frame (subtle gray).
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray).
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

pub const COLUMNS: [&str; 4] = ["ID", "First Name", "Last Name", "Actions"];

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Draws one row per stored user, in store order.
///
/// Returns the row action clicked this frame, if any.
pub fn users_table(store: &UserStore, ui: &mut Ui) -> Option<UserAction> {
    let mut clicked = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(COLUMNS.len())
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        for title in COLUMNS {
                            header_cell(ui, |ui| {
                                ui.strong(title);
                            });
                        }
                        ui.end_row();

                        for user in store {
                            data_cell(ui, |ui| {
                                ui.monospace(user.id.to_string());
                            });
                            data_cell(ui, |ui| {
                                ui.label(&user.first_name);
                            });
                            data_cell(ui, |ui| {
                                ui.label(&user.last_name);
                            });
                            data_cell(ui, |ui| {
                                ui.horizontal(|ui| {
                                    if ui.button("Edit").clicked() {
                                        clicked = Some(UserAction::Edit(user.id));
                                    }
                                    if ui
                                        .button(egui::RichText::new("Delete").color(Color32::RED))
                                        .clicked()
                                    {
                                        clicked = Some(UserAction::Delete(user.id));
                                    }
                                });
                            });
                            ui.end_row();
                        }
                    });
            });
        });

    clicked
}
