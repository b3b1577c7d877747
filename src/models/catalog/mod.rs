//! Catalog of draggable templates, one ordered list per dimension.
//!
//! The catalog is an immutable value: it is handed to the drag controller
//! at construction and never changes afterwards. Items dragged back to a
//! pool are discarded, not returned here.

use crate::models::slot::Dimension;
use crate::models::template::ItemTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    classes: Vec<ItemTemplate>,
    teachers: Vec<ItemTemplate>,
}

impl Catalog {
    pub fn new(classes: Vec<ItemTemplate>, teachers: Vec<ItemTemplate>) -> Self {
        Self { classes, teachers }
    }

    /// Templates of a pool in declaration order.
    pub fn list(&self, dimension: Dimension) -> &[ItemTemplate] {
        match dimension {
            Dimension::Classes => &self.classes,
            Dimension::Teachers => &self.teachers,
        }
    }

    pub fn get(&self, dimension: Dimension, index: usize) -> Option<&ItemTemplate> {
        self.list(dimension).get(index)
    }

    /// Whether any template in any pool uses `template_id`.
    pub fn has_template_id(&self, template_id: &str) -> bool {
        Dimension::ALL
            .into_iter()
            .flat_map(|dimension| self.list(dimension))
            .any(|template| template.template_id == template_id)
    }

    pub fn len(&self) -> usize {
        self.classes.len() + self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Subjects that ship with the application.
pub fn default_classes() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate::new("1", "Math", "bg-blue-500 text-blue-500"),
        ItemTemplate::new("2", "English", "bg-green-500 text-green-500"),
        ItemTemplate::new("3", "Science", "bg-yellow-500 text-yellow-500"),
        ItemTemplate::new("4", "History", "bg-red-500 text-red-500"),
        ItemTemplate::new("5", "Art", "bg-purple-500 text-purple-500"),
        ItemTemplate::new("6", "Music", "bg-pink-500 text-pink-500"),
        ItemTemplate::new("7", "PE", "bg-indigo-500 text-indigo-500"),
        ItemTemplate::new("8", "Geography", "bg-gray-500 text-gray-500"),
    ]
}

/// Teachers that ship with the application. Ids are not unique.
pub fn default_teachers() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate::new("1", "Ms. Chen", "bg-teal-500 text-teal-500"),
        ItemTemplate::new("1", "Mr. Patel", "bg-orange-500 text-orange-500"),
        ItemTemplate::new("1", "Mrs. Novak", "bg-cyan-500 text-cyan-500"),
        ItemTemplate::new("2", "Mr. Okafor", "bg-lime-500 text-lime-500"),
        ItemTemplate::new("3", "Ms. Rivera", "bg-rose-500 text-rose-500"),
    ]
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::new(default_classes(), default_teachers())
    }
}
