//! Slot space: the fixed set of grid cells plus the reserved pool keys.
//!
//! Cells are addressed by `(day, time)` and serialized as `"{day}-{time}"`
//! for the gesture layer. The two pool keys (`"classes"`, `"teachers"`)
//! stand for "return to catalog".

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Independent overlay on the grid. Each dimension has its own pool and
/// its own assignment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Classes,
    Teachers,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Classes, Dimension::Teachers];

    /// Reserved drop key of this dimension's pool.
    pub fn pool_key(self) -> &'static str {
        match self {
            Dimension::Classes => "classes",
            Dimension::Teachers => "teachers",
        }
    }

    pub fn from_pool_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dim| dim.pool_key() == key)
    }

    /// Heading shown above the pool.
    pub fn pool_title(self) -> &'static str {
        match self {
            Dimension::Classes => "Available Classes",
            Dimension::Teachers => "Available Teachers",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pool_key())
    }
}

/// A `(day, time)` grid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub day: String,
    pub time: String,
}

impl SlotKey {
    pub fn new(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
        }
    }

    /// Split a composite key on its first `-`.
    ///
    /// Does not check membership in any slot space.
    pub fn parse(key: &str) -> Option<Self> {
        let (day, time) = key.split_once('-')?;
        if day.is_empty() || time.is_empty() {
            return None;
        }
        Some(Self::new(day, time))
    }

    /// Composite key understood by the gesture layer.
    pub fn composite(&self) -> String {
        format!("{}-{}", self.day, self.time)
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.day, self.time)
    }
}

/// Where a gesture key points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    Pool(Dimension),
    Cell(SlotKey),
}

impl DropTarget {
    pub fn cell(&self) -> Option<&SlotKey> {
        match self {
            DropTarget::Cell(slot) => Some(slot),
            DropTarget::Pool(_) => None,
        }
    }
}

/// Validation errors for a slot space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSpaceError {
    NoDays,
    NoTimes,
    EmptyLabel,
    ContainsSeparator(String),
    DuplicateLabel(String),
    ReservedLabel(String),
}

impl std::fmt::Display for SlotSpaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDays => write!(f, "At least one day is required"),
            Self::NoTimes => write!(f, "At least one time is required"),
            Self::EmptyLabel => write!(f, "Day and time labels cannot be empty"),
            Self::ContainsSeparator(label) => {
                write!(f, "Label '{}' must not contain '-'", label)
            }
            Self::DuplicateLabel(label) => write!(f, "Label '{}' is declared twice", label),
            Self::ReservedLabel(label) => {
                write!(f, "Label '{}' collides with a pool key", label)
            }
        }
    }
}

impl std::error::Error for SlotSpaceError {}

/// The enumerable cross product of days and times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpace {
    days: Vec<String>,
    times: Vec<String>,
}

impl SlotSpace {
    pub fn new(days: Vec<String>, times: Vec<String>) -> Result<Self, SlotSpaceError> {
        if days.is_empty() {
            return Err(SlotSpaceError::NoDays);
        }
        if times.is_empty() {
            return Err(SlotSpaceError::NoTimes);
        }

        let mut seen = HashSet::new();
        for label in days.iter().chain(times.iter()) {
            if label.trim().is_empty() {
                return Err(SlotSpaceError::EmptyLabel);
            }
            if label.contains('-') {
                return Err(SlotSpaceError::ContainsSeparator(label.clone()));
            }
            if Dimension::from_pool_key(label).is_some() {
                return Err(SlotSpaceError::ReservedLabel(label.clone()));
            }
            if !seen.insert(label.as_str()) {
                return Err(SlotSpaceError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { days, times })
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn contains(&self, slot: &SlotKey) -> bool {
        self.days.contains(&slot.day) && self.times.contains(&slot.time)
    }

    /// All cells, day-major.
    pub fn slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.days
            .iter()
            .flat_map(move |day| self.times.iter().map(move |time| SlotKey::new(day, time)))
    }

    pub fn len(&self) -> usize {
        self.days.len() * self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map a raw gesture key to a drop target.
    ///
    /// Returns `None` for keys outside the space, which callers treat the
    /// same as "no destination".
    pub fn resolve(&self, key: &str) -> Option<DropTarget> {
        if let Some(dimension) = Dimension::from_pool_key(key) {
            return Some(DropTarget::Pool(dimension));
        }
        SlotKey::parse(key)
            .filter(|slot| self.contains(slot))
            .map(DropTarget::Cell)
    }
}

impl Default for SlotSpace {
    fn default() -> Self {
        let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
        let times = ["9AM", "10AM", "11AM", "1PM", "2PM"];
        Self {
            days: days.iter().map(|d| d.to_string()).collect(),
            times: times.iter().map(|t| t.to_string()).collect(),
        }
    }
}
