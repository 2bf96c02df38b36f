use chrono::NaiveDate;

/// Source of "today". The day-distance and birthday functions read the current
/// date through this port so tests can pin it to a fixed reference date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
