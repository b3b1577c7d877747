//! Item template model.
//!
//! Templates are the immutable catalog entries (subjects, teachers) a user
//! drags out of a pool. Each carries a style tag in the `"<fill> <accent>"`
//! form, e.g. `"bg-blue-500 text-blue-500"`.

use serde::{Deserialize, Serialize};

/// Catalog entry that can be instantiated by dragging it onto the grid.
///
/// `template_id` is provenance only. Catalogs may contain duplicate ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "id")]
    pub template_id: String,
    pub label: String,
    #[serde(rename = "style")]
    pub style_tag: StyleTag,
}

impl ItemTemplate {
    pub fn new(
        template_id: impl Into<String>,
        label: impl Into<String>,
        style_tag: impl Into<String>,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            label: label.into(),
            style_tag: StyleTag::new(style_tag),
        }
    }

    /// Validate the template
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err(format!("Template '{}' has an empty label", self.template_id));
        }

        if self.style_tag.is_empty() {
            return Err(format!("Template '{}' has an empty style", self.label));
        }

        for token in [self.style_tag.fill(), self.style_tag.accent()] {
            if let Some(digits) = token.strip_prefix('#') {
                let valid = matches!(digits.len(), 3 | 6)
                    && digits.bytes().all(|b| b.is_ascii_hexdigit());
                if !valid {
                    return Err(format!(
                        "Template '{}' has an invalid hex color '{}'",
                        self.label, token
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Space-separated style descriptor: fill token first, accent token second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTag(String);

impl StyleTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Token used to paint the item's block.
    pub fn fill(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }

    /// Token used to tint highlighted headers while the item is dragged.
    ///
    /// Falls back to the fill token when the tag has a single component.
    pub fn accent(&self) -> &str {
        let mut tokens = self.0.split_whitespace();
        let fill = tokens.next().unwrap_or("");
        tokens.next().unwrap_or(fill)
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
