use chrono::{Datelike, NaiveDate};

/// Whole calendar months elapsed since birth.
pub type AgeMonths = u32;

/// Counts monthly anniversaries between `birth_date` and `reference_date`.
///
/// A month is only counted once the reference day-of-month reaches the birth
/// day-of-month, so a child born on Jan 31 is still 0 months old on Feb 28
/// and turns 1 on Mar 1. A reference date before the birth date yields 0.
pub fn calculate_age_in_months(birth_date: NaiveDate, reference_date: NaiveDate) -> AgeMonths {
    let years = i64::from(reference_date.year()) - i64::from(birth_date.year());
    let months = i64::from(reference_date.month()) - i64::from(birth_date.month());

    let mut total = years * 12 + months;
    if reference_date.day() < birth_date.day() {
        total -= 1;
    }

    AgeMonths::try_from(total.max(0)).unwrap_or(AgeMonths::MAX)
}
