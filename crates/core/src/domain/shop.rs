use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub String);

impl ShopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShopId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A retailer the name table is curated for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub display_name: String,
}

pub const NISHIMATSUYA: &str = "nishimatsuya";
pub const UNIQLO: &str = "uniqlo";
pub const AKACHAN_HONPO: &str = "akachan_honpo";

pub fn known_shops() -> Vec<Shop> {
    [(NISHIMATSUYA, "西松屋"), (UNIQLO, "ユニクロ"), (AKACHAN_HONPO, "アカチャンホンポ")]
        .into_iter()
        .map(|(id, display_name)| Shop {
            id: ShopId::new(id),
            display_name: display_name.to_string(),
        })
        .collect()
}
