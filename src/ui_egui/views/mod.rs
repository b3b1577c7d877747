//! Views for the timetable window.
//!
//! Views only read the drag controller and report drag starts; all
//! mutations go through [`crate::services::drag::DragController`].

pub mod palette;
pub mod pool_panel;
pub mod timetable_grid;
