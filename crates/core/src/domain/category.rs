use serde::{Deserialize, Serialize};

/// Visual grouping shown next to an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub emoji: String,
    pub color: String,
}

impl Category {
    pub fn new(label: &str, emoji: &str, color: &str) -> Self {
        Self { label: label.to_string(), emoji: emoji.to_string(), color: color.to_string() }
    }

    /// Applied to any item absent from the category table.
    pub fn fallback() -> Self {
        Self::new("アイテム", "👕", "#F3F4F6")
    }
}
