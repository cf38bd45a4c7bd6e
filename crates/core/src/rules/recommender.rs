use crate::domain::item::GenericItem;
use crate::rules::age::AgeMonths;

/// Oldest age still dressed in the newborn undershirt layering.
pub const NEWBORN_MAX_AGE_MONTHS: AgeMonths = 3;

/// At or above this, newborns drop the combination undershirt.
pub const SECOND_UNDERSHIRT_BELOW: f64 = 25.0;
/// Below this, every age gets a coverall on top.
pub const COVERALL_BELOW: f64 = 15.0;
pub const NEWBORN_ROMPER_BELOW: f64 = 20.0;
pub const MOBILE_ROMPER_BELOW: f64 = 22.0;

pub trait Recommender: Send + Sync {
    fn recommend(&self, age_in_months: AgeMonths, temperature: f64) -> Vec<GenericItem>;
}

/// Base layer first, then at most one outer layer chosen by temperature.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayeringRecommender;

impl Recommender for LayeringRecommender {
    fn recommend(&self, age_in_months: AgeMonths, temperature: f64) -> Vec<GenericItem> {
        recommend(age_in_months, temperature)
    }
}

pub fn recommend(age_in_months: AgeMonths, temperature: f64) -> Vec<GenericItem> {
    let mut items = Vec::with_capacity(3);

    // Thresholds are strict: a temperature equal to a threshold takes the warmer bucket.
    if age_in_months <= NEWBORN_MAX_AGE_MONTHS {
        items.push(GenericItem::ShortUndershirt);
        if temperature < SECOND_UNDERSHIRT_BELOW {
            items.push(GenericItem::CombinationUndershirt);
        }

        if temperature < COVERALL_BELOW {
            items.push(GenericItem::Coverall);
        } else if temperature < NEWBORN_ROMPER_BELOW {
            items.push(GenericItem::Romper);
        }
    } else {
        items.push(GenericItem::Bodysuit);

        if temperature < COVERALL_BELOW {
            items.push(GenericItem::Coverall);
        } else if temperature < MOBILE_ROMPER_BELOW {
            items.push(GenericItem::Romper);
        }
    }

    items
}
