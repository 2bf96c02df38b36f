pub mod birthdays;
pub mod clock;
pub mod date_distance;
pub mod phone;
pub mod ticket;

pub use crate::domain::model::{Congratulation, User};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
