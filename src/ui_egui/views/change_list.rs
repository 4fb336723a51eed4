use egui::{RichText, Stroke, Ui};

use crate::services::chart::ChartSession;
use crate::ui_egui::theme::GanttTheme;

/// List pending changes with a remove button each
///
/// Returns the id of the change the user asked to revert.
pub fn render_change_list(ui: &mut Ui, session: &ChartSession, theme: &GanttTheme) -> Option<String> {
    let mut to_remove = None;

    ui.heading(RichText::new("Changes").strong());
    ui.add_space(8.0);

    let descriptions = session.change_descriptions();
    if descriptions.is_empty() {
        ui.label(RichText::new("No changes.").italics());
        return None;
    }

    for (change_id, description) in descriptions {
        egui::Frame::none()
            .stroke(Stroke::new(1.0, theme.change_border))
            .rounding(4.0)
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(description);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("remove").clicked() {
                            to_remove = Some(change_id.clone());
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }

    to_remove
}
