use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rules::age::AgeMonths;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopName {
    pub shop_key: String,
    pub shop_display_name: String,
    pub shop_name: String,
}

/// A recommended garment with its retailer names and category metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub universal_name: String,
    pub shop_specific_name: String,
    pub category_label: String,
    pub category_emoji: String,
    pub category_color: String,
    pub shop_names: Vec<ShopName>,
    pub other_shop_names: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub age_in_months: AgeMonths,
    pub target_date: NaiveDate,
    pub temperature: f64,
    pub size: String,
    pub items: Vec<EnrichedItem>,
}
