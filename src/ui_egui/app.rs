use egui::{Align2, FontId, Id, LayerId, Order, Rect, RichText, Vec2};

use crate::models::settings::{SectionSettings, Settings};
use crate::models::slot::{Dimension, DropTarget};
use crate::services::drag::{DragController, DropEffect, DropReport};
use crate::services::settings::{build_controller, SettingsError};
use crate::ui_egui::drag::{DragManager, DropZones};
use crate::ui_egui::views::palette::{fallback_color, text_on, token_color, with_alpha};
use crate::ui_egui::views::pool_panel::render_pool;
use crate::ui_egui::views::timetable_grid::render_timetable_grid;

const SIDE_PANEL_WIDTH: f32 = 220.0;

pub struct TimetableApp {
    controller: DragController,
    /// Display grouping of the time rows
    sections: Vec<SectionSettings>,
    /// Summary of the most recent drop, shown in the status bar
    last_drop: Option<String>,
}

impl eframe::App for TimetableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.controller.is_dragging() {
            DragManager::cancel(&mut self.controller);
            self.last_drop = Some("Drag cancelled".to_string());
        }

        let mut zones = DropZones::default();
        let mut request = None;

        self.render_status_bar(ctx);

        egui::SidePanel::left("pools")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                let hovered_pool = self.hovered_pool();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for dimension in Dimension::ALL {
                        let templates = self.controller.catalog().list(dimension);
                        let highlighted = hovered_pool == Some(dimension);
                        if let Some(picked) =
                            render_pool(ui, dimension, templates, highlighted, &mut zones)
                        {
                            request = Some(picked);
                        }
                        ui.add_space(12.0);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Curriculum Schedule");
            ui.add_space(8.0);
            egui::ScrollArea::both().show(ui, |ui| {
                if let Some(picked) =
                    render_timetable_grid(ui, &self.controller, &self.sections, &mut zones)
                {
                    request = Some(picked);
                }
            });
        });

        if let Some(request) = request {
            DragManager::begin(&mut self.controller, request);
        }

        if let Some(report) = DragManager::track(ctx, &mut self.controller, &zones) {
            self.last_drop = Some(summarize(&report));
        }

        self.render_drag_ghost(ctx);
    }
}

impl TimetableApp {
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        Ok(Self {
            controller: build_controller(settings)?,
            sections: settings.sections.clone(),
            last_drop: None,
        })
    }

    fn hovered_pool(&self) -> Option<Dimension> {
        match self.controller.session()?.hovered.as_ref()? {
            DropTarget::Pool(dimension) => Some(*dimension),
            DropTarget::Cell(_) => None,
        }
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for dimension in Dimension::ALL {
                    let count = self.controller.store(dimension).len();
                    ui.label(RichText::new(format!("{}: {} placed", dimension, count)).small());
                    ui.separator();
                }
                if let Some(message) = &self.last_drop {
                    ui.label(RichText::new(message).small());
                } else {
                    ui.label(
                        RichText::new("Drag items from the pools onto the grid")
                            .small()
                            .weak(),
                    );
                }
            });
        });
    }

    /// Paint the carried item under the pointer while dragging.
    fn render_drag_ghost(&self, ctx: &egui::Context) {
        let Some(session) = self.controller.session() else {
            return;
        };
        let Some(pointer) = ctx.input(|i| i.pointer.latest_pos()) else {
            return;
        };

        let fill = session
            .source
            .accent()
            .and_then(token_color)
            .unwrap_or_else(fallback_color);
        let rect = Rect::from_center_size(pointer, Vec2::new(140.0, 28.0));
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("timetable_drag_ghost")));
        painter.rect_filled(rect, 4.0, with_alpha(fill, 200));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            session.source.label(),
            FontId::proportional(13.0),
            text_on(fill),
        );
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    }
}

fn summarize(report: &DropReport) -> String {
    if report.is_empty() {
        return "Nothing changed".to_string();
    }

    let parts: Vec<String> = report
        .effects
        .iter()
        .map(|(_, effect)| match effect {
            DropEffect::Placed { slot, item, evicted } => match evicted {
                Some(old) => format!("{} placed at {} (replaced {})", item.label, slot, old.label),
                None => format!("{} placed at {}", item.label, slot),
            },
            DropEffect::Moved {
                from,
                to,
                item,
                evicted,
            } => match evicted {
                Some(old) => format!("{} moved {} → {} (replaced {})", item.label, from, to, old.label),
                None => format!("{} moved {} → {}", item.label, from, to),
            },
            DropEffect::Removed { slot, item } => format!("{} removed from {}", item.label, slot),
        })
        .collect();
    parts.join("; ")
}
