use crate::rules::age::AgeMonths;

/// Rough clothing size for an age. A general guide only; babies vary.
pub fn estimate_size(age_in_months: AgeMonths) -> &'static str {
    match age_in_months {
        0..=2 => "50-60cm",
        3..=5 => "60-70cm",
        6..=11 => "70-80cm",
        12..=17 => "80cm",
        18..=23 => "90cm",
        _ => "90cm+",
    }
}
