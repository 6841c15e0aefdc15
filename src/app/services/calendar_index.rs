//! The shared 365-slot calendar axis
//!
//! Pure functions that make different calendar years directly comparable:
//! a leap-day-folding day-of-year projection, its label inverse over a fixed
//! non-leap reference year, and month-day range containment with wraparound.

use crate::app::models::MonthDay;
use crate::constants::{DAYS_PER_YEAR, LEAP_FOLD_DAY, MONTH_LABELS, REFERENCE_YEAR};
use chrono::{Datelike, NaiveDate};

/// Project a date onto the 365-slot axis
///
/// Feb 29 maps to 59 (Feb 28's slot) and every later day of a leap year is
/// shifted back by one, so the result is always in [1, 365] and the same
/// calendar day lands on the same slot in leap and non-leap years.
pub fn day_of_year_365(date: NaiveDate) -> u16 {
    if date.month() == 2 && date.day() == 29 {
        return LEAP_FOLD_DAY;
    }
    let ordinal = date.ordinal() as u16;
    if date.leap_year() && date.month() > 2 {
        ordinal - 1
    } else {
        ordinal
    }
}

/// The "DD-mon" axis label for a day-of-year slot
///
/// Exact inverse of [`day_of_year_365`] over the non-leap reference year.
/// Leap-year Feb 29 collapses onto Feb 28's label; that loss is part of the
/// axis definition, not an error. Returns `None` outside [1, 365].
pub fn label_from_day_of_year(day_of_year: u16) -> Option<String> {
    let date = reference_date(day_of_year)?;
    Some(format!(
        "{:02}-{}",
        date.day(),
        MONTH_LABELS[date.month0() as usize]
    ))
}

/// The month/day a day-of-year slot represents
pub fn month_day_from_day_of_year(day_of_year: u16) -> Option<MonthDay> {
    reference_date(day_of_year).map(MonthDay::from_date)
}

/// Inclusive month-day range containment
///
/// When `start <= end` this is the ordinary interval. When `start > end` the
/// range wraps across the year boundary (e.g. Nov 1 .. Mar 31) and a
/// month-day is contained when it falls on either side of the wrap.
pub fn in_range(month_day: MonthDay, start: MonthDay, end: MonthDay) -> bool {
    if start <= end {
        start <= month_day && month_day <= end
    } else {
        month_day >= start || month_day <= end
    }
}

fn reference_date(day_of_year: u16) -> Option<NaiveDate> {
    if !(1..=DAYS_PER_YEAR).contains(&day_of_year) {
        return None;
    }
    NaiveDate::from_yo_opt(REFERENCE_YEAR, day_of_year as u32)
}
