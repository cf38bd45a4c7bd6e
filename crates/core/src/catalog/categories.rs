use std::collections::BTreeMap;

use crate::domain::category::Category;
use crate::domain::item::GenericItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTable {
    entries: BTreeMap<String, Category>,
    fallback: Category,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl CategoryTable {
    pub fn new(entries: BTreeMap<String, Category>) -> Self {
        Self { entries, fallback: Category::fallback() }
    }

    pub fn standard() -> Self {
        let inner = Category::new("インナー", "👶", "#FFF3E0");
        let middle = Category::new("ミドル", "🧸", "#E3F2FD");
        let outer = Category::new("アウター", "🧥", "#EDE7F6");

        let entries = [
            (GenericItem::ShortUndershirt, inner.clone()),
            (GenericItem::CombinationUndershirt, inner),
            (GenericItem::Bodysuit, middle.clone()),
            (GenericItem::Romper, middle),
            (GenericItem::Coverall, outer),
        ]
        .into_iter()
        .map(|(item, category)| (item.universal_name().to_string(), category))
        .collect();

        Self::new(entries)
    }

    pub fn lookup(&self, item: &str) -> Option<&Category> {
        self.entries.get(item)
    }

    pub fn category_of(&self, item: &str) -> &Category {
        self.lookup(item).unwrap_or(&self.fallback)
    }
}
