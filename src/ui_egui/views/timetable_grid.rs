//! Weekly grid rendering.
//!
//! Lays out a header row of days and one row per time, grouped into
//! sections with optional banner rows. Cells show the class and teacher
//! placed there and act both as drop targets and as drag sources.

use egui::{Align2, Color32, FontId, Id, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::{fallback_color, text_on, token_color, with_alpha};
use crate::models::hover::HoverPreview;
use crate::models::instance::PlacedItem;
use crate::models::settings::SectionSettings;
use crate::models::slot::{Dimension, SlotKey};
use crate::services::drag::DragController;
use crate::ui_egui::drag::{DragRequest, DropZones};

const LABEL_WIDTH: f32 = 70.0;
const MIN_COLUMN_WIDTH: f32 = 110.0;
const HEADER_HEIGHT: f32 = 32.0;
const ROW_HEIGHT: f32 = 64.0;
const BANNER_HEIGHT: f32 = 28.0;

/// Render the full grid. Returns a drag request when a cell was picked up.
pub fn render_timetable_grid(
    ui: &mut egui::Ui,
    controller: &DragController,
    sections: &[SectionSettings],
    zones: &mut DropZones,
) -> Option<DragRequest> {
    let days = controller.space().days();
    let hover = controller.hover();
    let hover_color = hover
        .color_tag
        .as_deref()
        .and_then(token_color)
        .unwrap_or(ui.visuals().selection.bg_fill);
    let text_color = ui.visuals().text_color();
    let line_color = ui.visuals().widgets.noninteractive.bg_stroke.color;

    let origin = ui.available_rect_before_wrap().min;
    let column_width =
        ((ui.available_width() - LABEL_WIDTH) / days.len() as f32).max(MIN_COLUMN_WIDTH);
    let grid_width = LABEL_WIDTH + column_width * days.len() as f32;
    let painter = ui.painter().clone();

    let mut request = None;
    let mut y = origin.y;

    // Header row
    for (col, day) in days.iter().enumerate() {
        let rect = Rect::from_min_size(
            Pos2::new(origin.x + LABEL_WIDTH + col as f32 * column_width, y),
            Vec2::new(column_width, HEADER_HEIGHT),
        );
        let color = if hover.highlights_day(day) {
            hover_color
        } else {
            text_color
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            day,
            FontId::proportional(15.0),
            color,
        );
    }
    y += HEADER_HEIGHT;

    for section in sections {
        for time in &section.times {
            let label_rect = Rect::from_min_size(
                Pos2::new(origin.x, y),
                Vec2::new(LABEL_WIDTH, ROW_HEIGHT),
            );
            let color = if hover.highlights_time(time) {
                hover_color
            } else {
                text_color
            };
            painter.text(
                label_rect.center(),
                Align2::CENTER_CENTER,
                time,
                FontId::proportional(15.0),
                color,
            );

            for (col, day) in days.iter().enumerate() {
                let rect = Rect::from_min_size(
                    Pos2::new(origin.x + LABEL_WIDTH + col as f32 * column_width, y),
                    Vec2::new(column_width, ROW_HEIGHT),
                );
                let slot = SlotKey::new(day, time);
                if let Some(picked) =
                    render_cell(ui, controller, hover, &slot, rect, line_color, hover_color, zones)
                {
                    request = Some(picked);
                }
            }
            y += ROW_HEIGHT;
        }

        if let Some(banner) = &section.banner {
            let rect = Rect::from_min_size(
                Pos2::new(origin.x + LABEL_WIDTH, y),
                Vec2::new(column_width * days.len() as f32, BANNER_HEIGHT),
            );
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, line_color));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                banner,
                FontId::proportional(14.0),
                text_color,
            );
            y += BANNER_HEIGHT;
        }
    }

    let total = Rect::from_min_max(origin, Pos2::new(origin.x + grid_width, y));
    ui.allocate_rect(total, Sense::hover());

    request
}

#[allow(clippy::too_many_arguments)]
fn render_cell(
    ui: &mut egui::Ui,
    controller: &DragController,
    hover: &HoverPreview,
    slot: &SlotKey,
    rect: Rect,
    line_color: Color32,
    hover_color: Color32,
    zones: &mut DropZones,
) -> Option<DragRequest> {
    let key = slot.composite();
    let response = ui.interact(rect, Id::new(("timetable_cell", key.as_str())), Sense::drag());
    let painter = ui.painter();

    if hover.highlights_cell(slot) {
        painter.rect_filled(rect, 0.0, with_alpha(hover_color, 50));
    }
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, line_color));

    let layers = controller.board().layers_at(slot);
    let inner = rect.shrink(4.0);
    let layer_height = inner.height() / Dimension::ALL.len() as f32;
    for (dimension, item) in &layers {
        let row = Dimension::ALL
            .iter()
            .position(|dim| dim == dimension)
            .unwrap_or(0);
        let block = Rect::from_min_size(
            Pos2::new(inner.left(), inner.top() + row as f32 * layer_height),
            Vec2::new(inner.width(), layer_height - 2.0),
        );
        paint_item(painter, block, item);
    }

    zones.register(rect, key.clone());

    if layers.is_empty() {
        return None;
    }
    if response.hovered() && !controller.is_dragging() {
        ui.output_mut(|out| out.cursor_icon = egui::CursorIcon::Grab);
    }
    if response.drag_started() {
        return Some(DragRequest {
            source_key: key,
            source_index: 0,
        });
    }
    None
}

pub(crate) fn paint_item(painter: &egui::Painter, rect: Rect, item: &PlacedItem) {
    let fill = token_color(item.style_tag.fill()).unwrap_or_else(fallback_color);
    painter.rect_filled(rect, 4.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &item.label,
        FontId::proportional(13.0),
        text_on(fill),
    );
}
