// Test fixtures - reusable test data
// Provides consistent controllers and gesture helpers across test files

#![allow(dead_code)]

use rust_timetable::models::catalog::Catalog;
use rust_timetable::models::slot::SlotSpace;
use rust_timetable::services::drag::{DragController, DropReport};

/// Controller over the built-in catalog and the default Monday-Friday grid.
pub fn controller() -> DragController {
    DragController::new(Catalog::builtin(), SlotSpace::default())
}

/// One complete gesture: begin, a single update over the target, end.
pub fn drag(
    ctl: &mut DragController,
    source_key: &str,
    source_index: usize,
    destination_key: Option<&str>,
) -> DropReport {
    ctl.begin(source_key, source_index);
    ctl.update(destination_key);
    ctl.end(destination_key)
}

/// Every composite cell key of the default grid.
pub fn all_cell_keys() -> Vec<String> {
    SlotSpace::default().slots().map(|slot| slot.composite()).collect()
}
