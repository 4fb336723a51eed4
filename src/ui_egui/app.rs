use crate::models::settings::Settings;
use crate::services::chart::ChartSession;
use crate::ui_egui::resize::{ResizeSet, UuidChangeIds};
use crate::ui_egui::theme::GanttTheme;
use crate::ui_egui::views::change_list::render_change_list;
use crate::ui_egui::views::chart_view::render_chart;

pub struct GanttApp {
    /// Base events, grid and change log
    session: ChartSession,
    settings: Settings,
    /// Currently applied theme colors
    active_theme: GanttTheme,
    /// Per-bar drag state; reset whenever the change log changes
    resizes: ResizeSet,
    change_ids: UuidChangeIds,
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(egui::RichText::new("Gantt Chart Example").size(32.0).strong());
            ui.add_space(12.0);

            let created = render_chart(
                ui,
                &self.session,
                &mut self.resizes,
                &mut self.change_ids,
                &self.settings,
                &self.active_theme,
            );

            ui.add_space(32.0);

            let removed = egui::ScrollArea::vertical()
                .id_source("gantt-change-list")
                .show(ui, |ui| render_change_list(ui, &self.session, &self.active_theme))
                .inner;

            if let Some(change) = created {
                self.session.record_change(change);
                self.resizes.reset();
            }
            if let Some(change_id) = removed {
                self.session.remove_change(&change_id);
                self.resizes.reset();
            }
        });
    }
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: ChartSession, settings: Settings) -> Self {
        let active_theme = GanttTheme::from_name(&settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            session,
            resizes: ResizeSet::new(settings.min_bar_width),
            settings,
            active_theme,
            change_ids: UuidChangeIds,
        }
    }
}
