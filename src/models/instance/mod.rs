//! Placed item instances.
//!
//! An instance is born when a template is dropped from its pool onto the
//! grid. It keeps its id while it moves between cells and disappears when
//! it is dragged back to a pool.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::models::template::{ItemTemplate, StyleTag};

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a placed item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(String);

impl InstanceId {
    /// Mint a fresh id that `is_reserved` does not claim.
    ///
    /// The sequence component is never reused within the process, so two
    /// minted ids are always distinct even when minted in the same
    /// millisecond.
    pub fn mint(is_reserved: impl Fn(&str) -> bool) -> Self {
        loop {
            let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
            let candidate = format!("{}-{}", Utc::now().timestamp_millis(), sequence);
            if !is_reserved(&candidate) {
                return Self(candidate);
            }
            log::debug!("Skipping reserved instance id candidate {}", candidate);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A template occurrence occupying one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedItem {
    pub instance_id: InstanceId,
    pub template_id: String,
    pub label: String,
    pub style_tag: StyleTag,
}

impl PlacedItem {
    /// Copy a template's display data under a new identity.
    pub fn from_template(template: &ItemTemplate, instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            template_id: template.template_id.clone(),
            label: template.label.clone(),
            style_tag: template.style_tag.clone(),
        }
    }
}
