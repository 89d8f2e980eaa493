//! Copyright Year
//!
//! Year range shown in the documentation's copyright notice.

use chrono::{Datelike, Local};
use tracing::warn;

/// Copyright year(s) for `base_year`, relative to the current local year.
///
/// - `"2016"` while the current year is 2016
/// - `"2016-2024"` once the current year is 2024
pub fn copyright_year(base_year: i32) -> String {
    copyright_year_at(base_year, Local::now().year())
}

/// Same as [`copyright_year`] with an explicit current year.
///
/// A current year before `base_year` is rendered as the base year alone.
pub fn copyright_year_at(base_year: i32, current_year: i32) -> String {
    if current_year > base_year {
        return format!("{}-{}", base_year, current_year);
    }

    if current_year < base_year {
        warn!(
            "Current year {} is before copyright base year {}; using base year only",
            current_year, base_year
        );
    }
    base_year.to_string()
}
