use std::fmt;

use serde::{Deserialize, Serialize};

/// A garment named independently of any retailer's catalog wording.
///
/// The universal name is the identifier used on the wire and as the key
/// into the name and category tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GenericItem {
    #[serde(rename = "短肌着")]
    ShortUndershirt,
    #[serde(rename = "コンビ肌着")]
    CombinationUndershirt,
    #[serde(rename = "ボディースーツ")]
    Bodysuit,
    #[serde(rename = "カバーオール")]
    Coverall,
    #[serde(rename = "ロンパース")]
    Romper,
}

impl GenericItem {
    pub const ALL: [GenericItem; 5] = [
        GenericItem::ShortUndershirt,
        GenericItem::CombinationUndershirt,
        GenericItem::Bodysuit,
        GenericItem::Coverall,
        GenericItem::Romper,
    ];

    pub fn universal_name(self) -> &'static str {
        match self {
            Self::ShortUndershirt => "短肌着",
            Self::CombinationUndershirt => "コンビ肌着",
            Self::Bodysuit => "ボディースーツ",
            Self::Coverall => "カバーオール",
            Self::Romper => "ロンパース",
        }
    }

    pub fn from_universal_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.universal_name() == name.trim())
    }
}

impl fmt::Display for GenericItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.universal_name())
    }
}
