use chrono::NaiveDate;
use greetkit::{days_from, days_from_today, FixedClock, GreetError};

fn fixed(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn test_distance_signs_against_fixed_clock() {
    let clock = fixed(2024, 10, 9);

    assert_eq!(days_from("2024-10-09", &clock).unwrap(), 0);
    assert_eq!(days_from("2020-10-09", &clock).unwrap(), 1461);
    assert_eq!(days_from("2030-01-01", &clock).unwrap(), -1910);
}

#[test]
fn test_format_and_value_errors_are_distinct() {
    let clock = fixed(2024, 10, 9);

    assert!(matches!(
        days_from("2021-2-30", &clock),
        Err(GreetError::InvalidDateFormat { .. })
    ));
    assert!(matches!(
        days_from("2021-02-30", &clock),
        Err(GreetError::InvalidDateValue { .. })
    ));
}

#[test]
fn test_rejected_shapes() {
    let clock = fixed(2024, 10, 9);

    for input in ["", "2021/02/03", "20210203", "2021-02-03 ", "02-03-2021"] {
        assert!(
            matches!(
                days_from(input, &clock),
                Err(GreetError::InvalidDateFormat { .. })
            ),
            "expected format error for {input:?}"
        );
    }
}

#[test]
fn test_leap_day_is_a_valid_value_only_on_leap_years() {
    let clock = fixed(2024, 10, 9);

    assert!(days_from("2024-02-29", &clock).is_ok());
    assert!(matches!(
        days_from("2023-02-29", &clock),
        Err(GreetError::InvalidDateValue { .. })
    ));
}

#[test]
fn test_system_clock_entry_point_accepts_valid_input() {
    // wall-clock dependent, so only shape of the result is checked
    assert!(days_from_today("2000-01-01").is_ok());
}
