pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::birthdays::{upcoming_birthdays, upcoming_birthdays_with};
pub use crate::core::clock::{FixedClock, SystemClock};
pub use crate::core::date_distance::{days_from, days_from_today};
pub use crate::core::phone::normalize_phone;
pub use crate::core::ticket::{numbers_ticket, numbers_ticket_with};
pub use domain::model::{Congratulation, User};
pub use domain::ports::Clock;
pub use utils::error::{GreetError, Result};
