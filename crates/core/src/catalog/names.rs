use std::collections::BTreeMap;

use crate::domain::item::GenericItem;
use crate::domain::shop::{AKACHAN_HONPO, NISHIMATSUYA, UNIQLO};

/// Retailer catalog names keyed by universal name, then shop id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl NameTable {
    pub fn new(entries: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        let rows: [(GenericItem, [&str; 3]); 5] = [
            (GenericItem::ShortUndershirt, ["短肌着", "コットン前開き短肌着", "短肌着"]),
            (
                GenericItem::CombinationUndershirt,
                ["コンビ肌着", "コットン前開きコンビ肌着", "コンビ肌着"],
            ),
            (
                GenericItem::Bodysuit,
                ["ボディスーツ", "クルーネックボディスーツ", "長袖ボディシャツ"],
            ),
            (GenericItem::Coverall, ["プレオール", "フライスカバーオール", "ドレスオール"]),
            (GenericItem::Romper, ["ロンパス", "ショートオール", "ロンパース"]),
        ];

        let entries = rows
            .into_iter()
            .map(|(item, names)| {
                let shops: BTreeMap<String, String> = [NISHIMATSUYA, UNIQLO, AKACHAN_HONPO]
                    .into_iter()
                    .zip(names)
                    .map(|(shop, name)| (shop.to_string(), name.to_string()))
                    .collect();
                (item.universal_name().to_string(), shops)
            })
            .collect();

        Self { entries }
    }

    /// Shop-specific name if the table has a non-blank one.
    pub fn lookup(&self, item: &str, shop: &str) -> Option<&str> {
        self.entries
            .get(item)
            .and_then(|shops| shops.get(shop))
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Falls back to the item's own identifier on any miss.
    pub fn translate<'a>(&'a self, item: &'a str, shop: &str) -> &'a str {
        self.lookup(item, shop).unwrap_or(item)
    }
}
