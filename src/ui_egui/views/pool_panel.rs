//! Catalog pools shown in the side panel.
//!
//! Each pool is a drop target (dropping a placed item here removes it from
//! the grid) and a list of draggable templates.

use egui::{Align2, FontId, Sense, Stroke, Vec2};

use super::palette::{fallback_color, text_on, token_color, with_alpha};
use crate::models::slot::Dimension;
use crate::models::template::ItemTemplate;
use crate::ui_egui::drag::{DragRequest, DropZones};

const ITEM_HEIGHT: f32 = 28.0;

/// Render one pool. Returns a drag request when an item was picked up.
pub fn render_pool(
    ui: &mut egui::Ui,
    dimension: Dimension,
    templates: &[ItemTemplate],
    highlighted: bool,
    zones: &mut DropZones,
) -> Option<DragRequest> {
    let mut request = None;

    let inner = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(dimension.pool_title()).strong().size(16.0));
        ui.add_space(6.0);

        for (index, template) in templates.iter().enumerate() {
            let size = Vec2::new(ui.available_width(), ITEM_HEIGHT);
            let (rect, response) = ui.allocate_exact_size(size, Sense::drag());

            let fill = token_color(template.style_tag.fill()).unwrap_or_else(fallback_color);
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                &template.label,
                FontId::proportional(14.0),
                text_on(fill),
            );

            if response.drag_started() {
                request = Some(DragRequest {
                    source_key: dimension.pool_key().to_string(),
                    source_index: index,
                });
            }
            if response.hovered() {
                ui.output_mut(|out| out.cursor_icon = egui::CursorIcon::Grab);
            }
            ui.add_space(4.0);
        }
    });

    let rect = inner.response.rect;
    if highlighted {
        let accent = ui.visuals().selection.bg_fill;
        ui.painter().rect_filled(rect, 4.0, with_alpha(accent, 40));
        ui.painter().rect_stroke(rect, 4.0, Stroke::new(2.0, accent));
    }
    zones.register(rect, dimension.pool_key());

    request
}
