use crate::domain::model::{Congratulation, User};
use crate::domain::ports::Clock;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::clock::SystemClock;

const WINDOW_DAYS: i64 = 7;
const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// Return a congratulation entry for every user whose birthday falls within the
/// next 7 days (today inclusive), sorted by congratulation date.
///
/// Weekend birthdays get their congratulation moved to the following Monday;
/// the window test uses the unshifted birthday, so a shifted date may land just
/// past the 7-day horizon. Records whose `birthday` does not parse as
/// 'YYYY.MM.DD' are dropped silently.
pub fn upcoming_birthdays(users: &[User]) -> Vec<Congratulation> {
    upcoming_birthdays_with(users, &SystemClock)
}

/// Same as [`upcoming_birthdays`], but reads "today" from the given clock.
pub fn upcoming_birthdays_with(users: &[User], clock: &impl Clock) -> Vec<Congratulation> {
    let today = clock.today();
    let horizon = today + Duration::days(WINDOW_DAYS);
    let mut results = Vec::new();

    for user in users {
        let birthday = match NaiveDate::parse_from_str(&user.birthday, BIRTHDAY_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                tracing::debug!(name = %user.name, birthday = %user.birthday, "dropping unparseable record");
                continue;
            }
        };

        // This year's occurrence, or next year's if it already passed.
        let occurrence = match project_onto_year(birthday, today.year()) {
            Some(date) if date >= today => date,
            _ => match project_onto_year(birthday, today.year() + 1) {
                Some(date) => date,
                None => continue,
            },
        };

        if occurrence >= today && occurrence <= horizon {
            results.push(Congratulation {
                name: user.name.clone(),
                congratulation_date: shift_to_monday(occurrence)
                    .format(BIRTHDAY_FORMAT)
                    .to_string(),
            });
        }
    }

    // fixed-width zero-padded strings, so lexicographic order is chronological
    results.sort_by(|a, b| a.congratulation_date.cmp(&b.congratulation_date));
    results
}

/// The occurrence of `birthday` in `year`. A Feb 29 birthday projected onto a
/// non-leap year resolves to Mar 1 of that year.
fn project_onto_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    match birthday.with_year(year) {
        Some(date) => Some(date),
        None if birthday.month() == 2 && birthday.day() == 29 => {
            NaiveDate::from_ymd_opt(year, 3, 1)
        }
        None => None,
    }
}

fn shift_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
