use egui::{Context, Pos2, Rect};

use crate::services::drag::{DragController, DropReport};

/// Drop targets laid out during the current frame.
///
/// Views register every pool and cell rect under its gesture key; the
/// pointer is then hit-tested against them to find the destination.
#[derive(Debug, Default)]
pub struct DropZones {
    zones: Vec<(Rect, String)>,
}

impl DropZones {
    pub fn register(&mut self, rect: Rect, key: impl Into<String>) {
        self.zones.push((rect, key.into()));
    }

    /// Key of the last-registered zone under `pos`.
    pub fn target_at(&self, pos: Pos2) -> Option<&str> {
        self.zones
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, key)| key.as_str())
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }
}

/// A drag requested by a view this frame: source key and pool index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragRequest {
    pub source_key: String,
    pub source_index: usize,
}

pub struct DragManager;

impl DragManager {
    /// Forward a drag start from a view to the controller.
    pub fn begin(controller: &mut DragController, request: DragRequest) {
        if !controller.begin(&request.source_key, request.source_index) {
            log::debug!("View drag from '{}' was not accepted", request.source_key);
        }
    }

    /// Translate this frame's pointer state into `update` or `end`.
    ///
    /// Returns the drop report when the primary button was released.
    pub fn track(
        ctx: &Context,
        controller: &mut DragController,
        zones: &DropZones,
    ) -> Option<DropReport> {
        if !controller.is_dragging() {
            return None;
        }

        let (pointer, released) =
            ctx.input(|i| (i.pointer.latest_pos(), i.pointer.primary_released()));
        let target = pointer.and_then(|pos| zones.target_at(pos));

        if released {
            Some(controller.end(target))
        } else {
            controller.update(target);
            None
        }
    }

    pub fn cancel(controller: &mut DragController) {
        controller.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_target_at_prefers_latest_zone() {
        let mut zones = DropZones::default();
        zones.register(Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)), "classes");
        zones.register(Rect::from_min_max(pos2(10.0, 10.0), pos2(20.0, 20.0)), "Monday-9AM");

        assert_eq!(zones.target_at(pos2(15.0, 15.0)), Some("Monday-9AM"));
        assert_eq!(zones.target_at(pos2(50.0, 50.0)), Some("classes"));
        assert_eq!(zones.target_at(pos2(150.0, 50.0)), None);

        zones.clear();
        assert_eq!(zones.target_at(pos2(15.0, 15.0)), None);
    }
}
