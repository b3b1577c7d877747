// Assignment store
// Slot -> placed item mapping, one store per dimension

use std::collections::HashMap;

use crate::models::instance::PlacedItem;
use crate::models::slot::{Dimension, SlotKey};

/// Result of moving an item between two cells of one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item now sits at the destination; `evicted` is whatever
    /// occupied the destination before.
    Moved {
        item: PlacedItem,
        evicted: Option<PlacedItem>,
    },
    /// Nothing was at the source. The destination is left untouched.
    SourceEmpty,
}

/// Mapping from slot to at most one placed item.
///
/// A slot is present iff it is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentStore {
    slots: HashMap<SlotKey, PlacedItem>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: &SlotKey) -> Option<&PlacedItem> {
        self.slots.get(slot)
    }

    /// Put `item` at `slot`, returning the previous occupant if any.
    pub fn place(&mut self, slot: SlotKey, item: PlacedItem) -> Option<PlacedItem> {
        let evicted = self.slots.insert(slot, item);
        if let Some(ref previous) = evicted {
            log::info!(
                "Evicted '{}' ({}) from an occupied slot",
                previous.label,
                previous.instance_id
            );
        }
        evicted
    }

    pub fn remove(&mut self, slot: &SlotKey) -> Option<PlacedItem> {
        self.slots.remove(slot)
    }

    /// Move the item at `from` to `to`, keeping its instance id.
    ///
    /// Moving onto itself leaves the item in place.
    pub fn move_within_grid(&mut self, from: &SlotKey, to: SlotKey) -> MoveOutcome {
        let Some(item) = self.slots.remove(from) else {
            return MoveOutcome::SourceEmpty;
        };
        let evicted = self.place(to, item.clone());
        MoveOutcome::Moved { item, evicted }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &PlacedItem)> {
        self.slots.iter()
    }
}

/// One assignment store per dimension, sharing a slot space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    classes: AssignmentStore,
    teachers: AssignmentStore,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, dimension: Dimension) -> &AssignmentStore {
        match dimension {
            Dimension::Classes => &self.classes,
            Dimension::Teachers => &self.teachers,
        }
    }

    pub fn store_mut(&mut self, dimension: Dimension) -> &mut AssignmentStore {
        match dimension {
            Dimension::Classes => &mut self.classes,
            Dimension::Teachers => &mut self.teachers,
        }
    }

    /// Occupants of a cell across all dimensions, in dimension order.
    pub fn layers_at(&self, slot: &SlotKey) -> Vec<(Dimension, &PlacedItem)> {
        Dimension::ALL
            .into_iter()
            .filter_map(|dimension| self.store(dimension).get(slot).map(|item| (dimension, item)))
            .collect()
    }
}
