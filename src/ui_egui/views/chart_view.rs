use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::models::change::EventChange;
use crate::models::settings::Settings;
use crate::services::chart::ChartSession;
use crate::ui_egui::resize::{ChangeIdGenerator, ResizeSet};
use crate::ui_egui::theme::GanttTheme;

const COLUMN_GAP: f32 = 2.0;
const ROW_GAP: f32 = 4.0;
const HANDLE_WIDTH: f32 = 20.0;

/// Paint the day header and one row per displayed event
///
/// Returns the change produced by a resize released this frame, if any.
pub fn render_chart(
    ui: &mut Ui,
    session: &ChartSession,
    resizes: &mut ResizeSet,
    ids: &mut dyn ChangeIdGenerator,
    settings: &Settings,
    theme: &GanttTheme,
) -> Option<EventChange> {
    let grid = session.grid();
    let bars = session.bar_placements();
    let column_width = settings.column_width;
    let row_height = settings.row_height;
    let chart_width = grid.len() as f32 * column_width;
    let chart_height = (bars.len() as f32 + 1.0) * (row_height + ROW_GAP);

    let mut emitted = None;

    egui::ScrollArea::horizontal()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::new(chart_width, chart_height), Sense::hover());
            let origin = response.rect.min;

            // Header row
            for (i, label) in grid.labels().into_iter().enumerate() {
                let cell = Rect::from_min_size(
                    Pos2::new(origin.x + i as f32 * column_width, origin.y),
                    Vec2::new(column_width - COLUMN_GAP, row_height),
                );
                painter.rect_filled(cell, 3.0, theme.header_background);
                if let Some(label) = label {
                    painter.text(
                        cell.left_center() + Vec2::new(3.0, 0.0),
                        Align2::LEFT_CENTER,
                        label,
                        FontId::proportional(11.0),
                        theme.header_text,
                    );
                }
            }

            for (row, bar) in bars.iter().enumerate() {
                let top = origin.y + (row as f32 + 1.0) * (row_height + ROW_GAP);

                let Some(span) = bar.span else {
                    painter.text(
                        Pos2::new(origin.x + 4.0, top + row_height / 2.0),
                        Align2::LEFT_CENTER,
                        format!("{} (outside visible range)", bar.event.title),
                        FontId::proportional(12.0),
                        ui.visuals().weak_text_color(),
                    );
                    continue;
                };

                let left = origin.x + (span.start - 1) as f32 * column_width;
                let natural_width = span.width() as f32 * column_width - COLUMN_GAP;

                let controller = resizes.controller_mut(&bar.event.id);
                controller.measure(natural_width);
                let width = controller.width().unwrap_or(natural_width);

                let bar_rect = Rect::from_min_size(Pos2::new(left, top), Vec2::new(width, row_height));
                let handle_rect = Rect::from_min_size(
                    Pos2::new(bar_rect.right() - HANDLE_WIDTH / 2.0, top),
                    Vec2::new(HANDLE_WIDTH, row_height),
                );

                let handle = ui.interact(
                    handle_rect,
                    ui.make_persistent_id(("gantt-resize-right", &bar.event.id)),
                    Sense::drag(),
                );

                if handle.hovered() || handle.dragged() {
                    ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
                }

                if let Some(pos) = handle.interact_pointer_pos() {
                    if handle.drag_started() {
                        controller.pointer_down(pos.x);
                    } else if handle.dragged() {
                        controller.pointer_move(pos.x);
                    }
                }

                if handle.drag_stopped() {
                    if let Some(change) = controller.pointer_up(&bar.event, ids) {
                        emitted = Some(change);
                    }
                }

                let border = if controller.is_dragging() {
                    theme.bar_border_active
                } else {
                    theme.bar_border
                };

                painter.rect_filled(bar_rect, 4.0, theme.bar_background);
                painter.rect_stroke(bar_rect, 4.0, Stroke::new(1.0, border));
                painter.rect_filled(
                    Rect::from_min_max(
                        Pos2::new(bar_rect.right() - 6.0, bar_rect.top() + 4.0),
                        Pos2::new(bar_rect.right() - 2.0, bar_rect.bottom() - 4.0),
                    ),
                    2.0,
                    theme.handle,
                );
                painter.with_clip_rect(bar_rect).text(
                    bar_rect.left_center() + Vec2::new(4.0, 0.0),
                    Align2::LEFT_CENTER,
                    &bar.label,
                    FontId::proportional(12.0),
                    theme.bar_text,
                );
            }
        });

    emitted
}
