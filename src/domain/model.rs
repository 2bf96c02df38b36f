use serde::{Deserialize, Serialize};

/// Input record for the birthday scheduler. `birthday` stays a raw string so
/// malformed records can be dropped instead of failing the whole call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub birthday: String,
}

/// One entry of the congratulation schedule. `congratulation_date` is a
/// zero-padded "YYYY.MM.DD" string, so lexicographic order is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Congratulation {
    pub name: String,
    pub congratulation_date: String,
}
