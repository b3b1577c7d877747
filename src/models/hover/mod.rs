//! Transient highlight state shown while a drag is in progress.

use crate::models::slot::{DropTarget, SlotKey};

/// Day/time under the pointer and the accent of the carried item.
///
/// Recomputed on every drag update and cleared when the drag ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverPreview {
    pub day: Option<String>,
    pub time: Option<String>,
    pub color_tag: Option<String>,
}

impl HoverPreview {
    /// Project a destination and the carried item's accent.
    ///
    /// Only grid cells produce a day and time. Pools and missing targets
    /// keep the color but clear the coordinates.
    pub fn project(destination: Option<&DropTarget>, accent: Option<&str>) -> Self {
        let cell = destination.and_then(DropTarget::cell);
        Self {
            day: cell.map(|slot| slot.day.clone()),
            time: cell.map(|slot| slot.time.clone()),
            color_tag: accent.map(str::to_string),
        }
    }

    pub fn is_clear(&self) -> bool {
        self.day.is_none() && self.time.is_none() && self.color_tag.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn highlights_day(&self, day: &str) -> bool {
        self.day.as_deref() == Some(day)
    }

    pub fn highlights_time(&self, time: &str) -> bool {
        self.time.as_deref() == Some(time)
    }

    pub fn highlights_cell(&self, slot: &SlotKey) -> bool {
        self.highlights_day(&slot.day) && self.highlights_time(&slot.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::Dimension;

    #[test]
    fn test_project_cell() {
        let target = DropTarget::Cell(SlotKey::new("Monday", "9AM"));
        let hover = HoverPreview::project(Some(&target), Some("text-blue-500"));
        assert_eq!(hover.day.as_deref(), Some("Monday"));
        assert_eq!(hover.time.as_deref(), Some("9AM"));
        assert_eq!(hover.color_tag.as_deref(), Some("text-blue-500"));
        assert!(hover.highlights_cell(&SlotKey::new("Monday", "9AM")));
        assert!(!hover.highlights_day("Tuesday"));
    }

    #[test]
    fn test_project_without_destination_keeps_color() {
        let hover = HoverPreview::project(None, Some("text-red-500"));
        assert_eq!(hover.day, None);
        assert_eq!(hover.time, None);
        assert_eq!(hover.color_tag.as_deref(), Some("text-red-500"));
        assert!(!hover.is_clear());
    }

    #[test]
    fn test_project_pool_has_no_coordinates() {
        let target = DropTarget::Pool(Dimension::Classes);
        let hover = HoverPreview::project(Some(&target), Some("text-red-500"));
        assert_eq!(hover.day, None);
        assert_eq!(hover.time, None);
    }

    #[test]
    fn test_clear() {
        let target = DropTarget::Cell(SlotKey::new("Friday", "2PM"));
        let mut hover = HoverPreview::project(Some(&target), Some("text-pink-500"));
        hover.clear();
        assert!(hover.is_clear());
        assert_eq!(hover, HoverPreview::default());
    }
}
