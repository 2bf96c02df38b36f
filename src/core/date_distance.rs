use crate::domain::ports::Clock;
use crate::utils::error::{GreetError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::clock::SystemClock;

static STRICT_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static pattern"));

/// Signed day distance from `date` to today: positive for past dates, negative
/// for future ones, zero for today.
///
/// The input must be strict zero-padded 'YYYY-MM-DD'. A shape violation fails
/// with [`GreetError::InvalidDateFormat`]; a well-shaped string that is not a
/// real calendar date (e.g. "2021-02-30") fails with the distinct
/// [`GreetError::InvalidDateValue`].
pub fn days_from_today(date: &str) -> Result<i64> {
    days_from(date, &SystemClock)
}

/// Same as [`days_from_today`], but reads "today" from the given clock.
pub fn days_from(date: &str, clock: &impl Clock) -> Result<i64> {
    if !STRICT_DATE_RE.is_match(date) {
        return Err(GreetError::InvalidDateFormat {
            input: date.to_string(),
        });
    }

    let given = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        // shape already checked, so this is an impossible calendar date
        GreetError::InvalidDateValue {
            input: date.to_string(),
        }
    })?;

    Ok((clock.today() - given).num_days())
}
