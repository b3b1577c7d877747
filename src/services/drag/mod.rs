//! Drag controller: turns gesture events into assignment mutations.
//!
//! The gesture layer reports `begin`, any number of `update`s and one `end`
//! per drag, addressing pools and cells by their string keys. The
//! controller resolves those keys against its slot space, carries the
//! dragged items, keeps the hover preview current and applies the
//! commit policy on `end`:
//!
//! | source | destination | effect |
//! |--------|-------------|--------|
//! | pool   | none / pool | nothing |
//! | pool   | cell        | mint a new instance and place it |
//! | cell   | none        | nothing |
//! | cell   | pool        | remove the layer owned by that pool |
//! | cell   | same cell   | nothing |
//! | cell   | other cell  | move every carried layer |
//!
//! Dimensions are evaluated independently. A drag from the classes pool
//! never touches the teachers store and vice versa.

use crate::models::catalog::Catalog;
use crate::models::hover::HoverPreview;
use crate::models::instance::{InstanceId, PlacedItem};
use crate::models::slot::{Dimension, DropTarget, SlotKey, SlotSpace};
use crate::models::template::ItemTemplate;
use crate::services::assignment::{AssignmentStore, Board, MoveOutcome};

/// A gesture event as delivered by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Begin { source_key: String, source_index: usize },
    Update { destination_key: Option<String> },
    End { destination_key: Option<String> },
}

/// Where the active drag came from and what it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A catalog template, copied by value. Instantiated only on drop.
    Pool {
        dimension: Dimension,
        template: ItemTemplate,
    },
    /// The occupants of the source cell, in dimension order.
    Cell {
        slot: SlotKey,
        layers: Vec<(Dimension, PlacedItem)>,
    },
}

impl DragSource {
    /// Accent of the carried item used to tint the hover preview.
    pub fn accent(&self) -> Option<&str> {
        match self {
            DragSource::Pool { template, .. } => Some(template.style_tag.accent()),
            DragSource::Cell { layers, .. } => {
                layers.first().map(|(_, item)| item.style_tag.accent())
            }
        }
    }

    /// Label of the carried item, for drag ghosts.
    pub fn label(&self) -> String {
        match self {
            DragSource::Pool { template, .. } => template.label.clone(),
            DragSource::Cell { layers, .. } => layers
                .iter()
                .map(|(_, item)| item.label.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub source: DragSource,
    pub source_index: usize,
    pub hovered: Option<DropTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Mutation applied to one dimension when a drag ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropEffect {
    Placed {
        slot: SlotKey,
        item: PlacedItem,
        evicted: Option<PlacedItem>,
    },
    Moved {
        from: SlotKey,
        to: SlotKey,
        item: PlacedItem,
        evicted: Option<PlacedItem>,
    },
    Removed {
        slot: SlotKey,
        item: PlacedItem,
    },
}

impl DropEffect {
    /// Item displaced from its destination, if any.
    pub fn evicted(&self) -> Option<&PlacedItem> {
        match self {
            DropEffect::Placed { evicted, .. } | DropEffect::Moved { evicted, .. } => {
                evicted.as_ref()
            }
            DropEffect::Removed { .. } => None,
        }
    }
}

/// Everything a single `end` changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropReport {
    pub effects: Vec<(Dimension, DropEffect)>,
}

impl DropReport {
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effect(&self, dimension: Dimension) -> Option<&DropEffect> {
        self.effects
            .iter()
            .find(|(dim, _)| *dim == dimension)
            .map(|(_, effect)| effect)
    }

    pub fn evictions(&self) -> impl Iterator<Item = &PlacedItem> {
        self.effects.iter().filter_map(|(_, effect)| effect.evicted())
    }
}

/// Owns the placement data and the drag state machine.
pub struct DragController {
    catalog: Catalog,
    space: SlotSpace,
    board: Board,
    state: DragState,
    hover: HoverPreview,
}

impl DragController {
    pub fn new(catalog: Catalog, space: SlotSpace) -> Self {
        Self {
            catalog,
            space,
            board: Board::new(),
            state: DragState::Idle,
            hover: HoverPreview::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn space(&self) -> &SlotSpace {
        &self.space
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self, dimension: Dimension) -> &AssignmentStore {
        self.board.store(dimension)
    }

    /// Occupant of a cell addressed by its composite key.
    pub fn get(&self, dimension: Dimension, slot_key: &str) -> Option<&PlacedItem> {
        let slot = SlotKey::parse(slot_key)?;
        self.board.store(dimension).get(&slot)
    }

    pub fn hover(&self) -> &HoverPreview {
        &self.hover
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Dispatch a gesture event. Only `End` produces a non-empty report.
    pub fn handle(&mut self, gesture: Gesture) -> DropReport {
        match gesture {
            Gesture::Begin {
                source_key,
                source_index,
            } => {
                self.begin(&source_key, source_index);
                DropReport::default()
            }
            Gesture::Update { destination_key } => {
                self.update(destination_key.as_deref());
                DropReport::default()
            }
            Gesture::End { destination_key } => self.end(destination_key.as_deref()),
        }
    }

    /// Start a drag. Returns whether a session is now active.
    ///
    /// Pool sources pick the template at `source_index`; cell sources
    /// carry whatever occupies the cell. Unknown keys, out-of-range
    /// indices and empty cells leave the controller idle.
    pub fn begin(&mut self, source_key: &str, source_index: usize) -> bool {
        if let DragState::Dragging(previous) = &self.state {
            log::warn!(
                "Drag started from '{}' while a drag carrying '{}' was active; replacing it",
                source_key,
                previous.source.label()
            );
            self.cancel();
        }

        let Some(target) = self.space.resolve(source_key) else {
            log::debug!("Ignoring drag from unknown key '{}'", source_key);
            return false;
        };

        let source = match target {
            DropTarget::Pool(dimension) => {
                let Some(template) = self.catalog.get(dimension, source_index) else {
                    log::debug!(
                        "Ignoring drag from {} pool: index {} out of range",
                        dimension,
                        source_index
                    );
                    return false;
                };
                DragSource::Pool {
                    dimension,
                    template: template.clone(),
                }
            }
            DropTarget::Cell(slot) => {
                let layers: Vec<(Dimension, PlacedItem)> = self
                    .board
                    .layers_at(&slot)
                    .into_iter()
                    .map(|(dimension, item)| (dimension, item.clone()))
                    .collect();
                if layers.is_empty() {
                    log::debug!("Ignoring drag from empty cell {}", slot);
                    return false;
                }
                DragSource::Cell { slot, layers }
            }
        };

        log::debug!("Drag started from '{}' carrying '{}'", source_key, source.label());
        self.state = DragState::Dragging(DragSession {
            source,
            source_index,
            hovered: None,
        });
        true
    }

    /// Recompute the hover preview for the target under the pointer.
    pub fn update(&mut self, destination_key: Option<&str>) {
        let destination = destination_key.and_then(|key| self.space.resolve(key));
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };

        self.hover = HoverPreview::project(destination.as_ref(), session.source.accent());
        session.hovered = destination;
    }

    /// Finish the drag, apply the commit policy and clear the preview.
    pub fn end(&mut self, destination_key: Option<&str>) -> DropReport {
        let destination = destination_key.and_then(|key| self.space.resolve(key));
        let state = std::mem::take(&mut self.state);
        self.hover.clear();

        let DragState::Dragging(session) = state else {
            log::debug!("Drag end received while idle");
            return DropReport::default();
        };

        let report = match destination {
            Some(destination) => self.commit(session, destination),
            None => {
                log::debug!(
                    "Drag carrying '{}' dropped outside any target",
                    session.source.label()
                );
                DropReport::default()
            }
        };

        for (dimension, effect) in &report.effects {
            log::info!("Committed {} drop: {:?}", dimension, effect);
        }
        report
    }

    /// Abandon the active drag without touching any store.
    pub fn cancel(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.state) {
            log::debug!("Drag carrying '{}' cancelled", session.source.label());
        }
        self.hover.clear();
    }

    fn commit(&mut self, session: DragSession, destination: DropTarget) -> DropReport {
        let mut report = DropReport::default();

        match (session.source, destination) {
            (DragSource::Pool { .. }, DropTarget::Pool(_)) => {}
            (DragSource::Pool { dimension, template }, DropTarget::Cell(slot)) => {
                let item = mint_instance(&self.catalog, &template);
                let evicted = self
                    .board
                    .store_mut(dimension)
                    .place(slot.clone(), item.clone());
                report
                    .effects
                    .push((dimension, DropEffect::Placed { slot, item, evicted }));
            }
            (DragSource::Cell { slot: from, layers }, DropTarget::Pool(pool)) => {
                for (dimension, _) in layers.into_iter().filter(|(dim, _)| *dim == pool) {
                    if let Some(item) = self.board.store_mut(dimension).remove(&from) {
                        report.effects.push((
                            dimension,
                            DropEffect::Removed {
                                slot: from.clone(),
                                item,
                            },
                        ));
                    }
                }
            }
            (DragSource::Cell { slot: from, .. }, DropTarget::Cell(to)) if from == to => {
                log::debug!("Cell {} dropped onto itself", from);
            }
            (DragSource::Cell { slot: from, layers }, DropTarget::Cell(to)) => {
                for (dimension, _) in layers {
                    match self
                        .board
                        .store_mut(dimension)
                        .move_within_grid(&from, to.clone())
                    {
                        MoveOutcome::Moved { item, evicted } => report.effects.push((
                            dimension,
                            DropEffect::Moved {
                                from: from.clone(),
                                to: to.clone(),
                                item,
                                evicted,
                            },
                        )),
                        MoveOutcome::SourceEmpty => {
                            log::warn!("No {} item left at {} to move", dimension, from);
                        }
                    }
                }
            }
        }

        report
    }
}

fn mint_instance(catalog: &Catalog, template: &ItemTemplate) -> PlacedItem {
    let id = InstanceId::mint(|candidate| catalog.has_template_id(candidate));
    PlacedItem::from_template(template, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DragController {
        DragController::new(Catalog::builtin(), SlotSpace::default())
    }

    #[test]
    fn test_starts_idle() {
        let ctl = controller();
        assert_eq!(ctl.state(), &DragState::Idle);
        assert!(ctl.hover().is_clear());
    }

    #[test]
    fn test_pool_to_cell_places_new_instance() {
        let mut ctl = controller();
        assert!(ctl.begin("classes", 0));
        let report = ctl.end(Some("Monday-9AM"));

        let placed = ctl.get(Dimension::Classes, "Monday-9AM").unwrap();
        assert_eq!(placed.label, "Math");
        assert_eq!(placed.template_id, "1");
        assert_ne!(placed.instance_id.as_str(), "1");
        assert!(matches!(
            report.effect(Dimension::Classes),
            Some(DropEffect::Placed { evicted: None, .. })
        ));
        assert!(report.effect(Dimension::Teachers).is_none());
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn test_update_projects_hover() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.update(Some("Monday-9AM"));

        let hover = ctl.hover();
        assert_eq!(hover.day.as_deref(), Some("Monday"));
        assert_eq!(hover.time.as_deref(), Some("9AM"));
        assert_eq!(hover.color_tag.as_deref(), Some("text-blue-500"));
        assert_eq!(
            ctl.session().unwrap().hovered,
            Some(DropTarget::Cell(SlotKey::new("Monday", "9AM")))
        );
    }

    #[test]
    fn test_update_outside_clears_coordinates_keeps_color() {
        let mut ctl = controller();
        ctl.begin("classes", 3);
        ctl.update(Some("Monday-9AM"));
        ctl.update(None);

        let hover = ctl.hover();
        assert_eq!(hover.day, None);
        assert_eq!(hover.time, None);
        assert_eq!(hover.color_tag.as_deref(), Some("text-red-500"));
    }

    #[test]
    fn test_update_while_idle_is_ignored() {
        let mut ctl = controller();
        ctl.update(Some("Monday-9AM"));
        assert!(ctl.hover().is_clear());
    }

    #[test]
    fn test_begin_rejects_bad_sources() {
        let mut ctl = controller();
        assert!(!ctl.begin("classes", 42));
        assert!(!ctl.begin("Monday-9AM", 0));
        assert!(!ctl.begin("Sunday-9AM", 0));
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn test_pool_drop_variants_do_nothing() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        assert!(ctl.end(Some("classes")).is_empty());
        ctl.begin("classes", 0);
        assert!(ctl.end(Some("teachers")).is_empty());
        ctl.begin("teachers", 0);
        assert!(ctl.end(None).is_empty());
        ctl.begin("teachers", 0);
        assert!(ctl.end(Some("Saturday-9AM")).is_empty());
        assert_eq!(ctl.board(), &Board::new());
    }

    #[test]
    fn test_cell_to_cell_moves_every_layer() {
        let mut ctl = controller();
        ctl.begin("classes", 1);
        ctl.end(Some("Monday-9AM"));
        ctl.begin("teachers", 2);
        ctl.end(Some("Monday-9AM"));
        let class_id = ctl.get(Dimension::Classes, "Monday-9AM").unwrap().instance_id.clone();
        let teacher_id = ctl.get(Dimension::Teachers, "Monday-9AM").unwrap().instance_id.clone();

        assert!(ctl.begin("Monday-9AM", 0));
        let report = ctl.end(Some("Wednesday-11AM"));

        assert_eq!(report.effects.len(), 2);
        assert!(ctl.get(Dimension::Classes, "Monday-9AM").is_none());
        assert!(ctl.get(Dimension::Teachers, "Monday-9AM").is_none());
        assert_eq!(
            ctl.get(Dimension::Classes, "Wednesday-11AM").unwrap().instance_id,
            class_id
        );
        assert_eq!(
            ctl.get(Dimension::Teachers, "Wednesday-11AM").unwrap().instance_id,
            teacher_id
        );
    }

    #[test]
    fn test_cell_to_pool_removes_only_that_layer() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.end(Some("Tuesday-10AM"));
        ctl.begin("teachers", 0);
        ctl.end(Some("Tuesday-10AM"));

        ctl.begin("Tuesday-10AM", 0);
        let report = ctl.end(Some("classes"));

        assert!(matches!(
            report.effect(Dimension::Classes),
            Some(DropEffect::Removed { .. })
        ));
        assert!(ctl.get(Dimension::Classes, "Tuesday-10AM").is_none());
        assert!(ctl.get(Dimension::Teachers, "Tuesday-10AM").is_some());
        assert_eq!(ctl.catalog(), &Catalog::builtin());
    }

    #[test]
    fn test_cell_to_foreign_pool_keeps_layer() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.end(Some("Tuesday-10AM"));

        ctl.begin("Tuesday-10AM", 0);
        let report = ctl.end(Some("teachers"));

        assert!(report.is_empty());
        assert!(ctl.get(Dimension::Classes, "Tuesday-10AM").is_some());
    }

    #[test]
    fn test_place_over_occupied_reports_eviction() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.end(Some("Monday-9AM"));
        let math_id = ctl.get(Dimension::Classes, "Monday-9AM").unwrap().instance_id.clone();

        ctl.begin("classes", 4);
        let report = ctl.end(Some("Monday-9AM"));

        let evicted: Vec<_> = report.evictions().collect();
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].instance_id, math_id);
        assert_eq!(ctl.get(Dimension::Classes, "Monday-9AM").unwrap().label, "Art");
    }

    #[test]
    fn test_grid_drag_hover_uses_first_layer_accent() {
        let mut ctl = controller();
        ctl.begin("teachers", 1);
        ctl.end(Some("Friday-1PM"));
        ctl.begin("classes", 5);
        ctl.end(Some("Friday-1PM"));

        ctl.begin("Friday-1PM", 0);
        ctl.update(Some("Friday-2PM"));

        assert_eq!(ctl.hover().color_tag.as_deref(), Some("text-pink-500"));
    }

    #[test]
    fn test_begin_while_dragging_replaces_session() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.update(Some("Monday-9AM"));
        ctl.begin("classes", 1);

        assert!(ctl.hover().is_clear());
        ctl.end(Some("Monday-9AM"));
        assert_eq!(ctl.get(Dimension::Classes, "Monday-9AM").unwrap().label, "English");
    }

    #[test]
    fn test_end_while_idle_is_empty() {
        let mut ctl = controller();
        assert!(ctl.end(Some("Monday-9AM")).is_empty());
        assert!(ctl.board().store(Dimension::Classes).is_empty());
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.update(Some("Monday-9AM"));
        ctl.cancel();

        assert!(!ctl.is_dragging());
        assert!(ctl.hover().is_clear());
        assert!(ctl.end(Some("Monday-9AM")).is_empty());
    }

    #[test]
    fn test_handle_dispatches_gestures() {
        let mut ctl = controller();
        ctl.handle(Gesture::Begin {
            source_key: "teachers".into(),
            source_index: 3,
        });
        ctl.handle(Gesture::Update {
            destination_key: Some("Thursday-2PM".into()),
        });
        assert_eq!(ctl.hover().day.as_deref(), Some("Thursday"));

        let report = ctl.handle(Gesture::End {
            destination_key: Some("Thursday-2PM".into()),
        });
        assert!(report.effect(Dimension::Teachers).is_some());
        assert_eq!(ctl.get(Dimension::Teachers, "Thursday-2PM").unwrap().label, "Mr. Okafor");
    }

    #[test]
    fn test_cell_source_label_joins_layers() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.end(Some("Monday-9AM"));
        ctl.begin("teachers", 0);
        ctl.end(Some("Monday-9AM"));

        ctl.begin("Monday-9AM", 0);
        assert_eq!(ctl.session().unwrap().source.label(), "Math / Ms. Chen");
    }

    #[test]
    fn test_cell_dropped_onto_itself_changes_nothing() {
        let mut ctl = controller();
        ctl.begin("classes", 0);
        ctl.end(Some("Monday-9AM"));
        ctl.begin("teachers", 0);
        ctl.end(Some("Monday-9AM"));
        let before = ctl.board().clone();

        ctl.begin("Monday-9AM", 0);
        ctl.update(Some("Monday-9AM"));
        let report = ctl.end(Some("Monday-9AM"));

        assert!(report.is_empty());
        assert_eq!(ctl.board(), &before);
        assert!(ctl.hover().is_clear());
        assert!(!ctl.is_dragging());
    }
}
