//! Record types
//!
//! `User` mirrors the upstream JSON, `UserRow` mirrors the stored table.

mod user;

pub use user::{parse_users, Address, Company, User, UserRow};

use serde::{Deserialize, Serialize};

/// One entry of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    /// The counted value
    pub value: String,
    /// How many rows carry it
    pub count: usize,
}

impl ValueCount {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}
