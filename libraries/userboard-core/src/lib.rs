//! Userboard Core
//!
//! Domain types, column derivations and frequency counts shared by every
//! Userboard crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Record Types**: `User` as served upstream, `UserRow` as stored
//! - **Derivations**: email domain, character lengths
//! - **Frame**: `UserFrame`, the reloaded table with derived columns
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use userboard_core::{UserFrame, UserRow};
//!
//! let rows = vec![UserRow {
//!     id: 1,
//!     name: "Leanne Graham".into(),
//!     username: "Bret".into(),
//!     email: "Sincere@april.biz".into(),
//!     phone: "1-770-736-8031".into(),
//!     website: "hildegard.org".into(),
//!     city: Some("Gwenborough".into()),
//!     street: Some("Kulas Light".into()),
//!     company_name: Some("Romaguera-Crona".into()),
//! }];
//!
//! let frame = UserFrame::from_rows(rows);
//! assert_eq!(frame.rows()[0].domain, "april.biz");
//! assert_eq!(frame.domain_counts()[0].count, 1);
//! ```

#![forbid(unsafe_code)]

pub mod derive;
pub mod error;
pub mod frame;
pub mod types;

pub use derive::{char_length, domain_or_fallback, email_domain, value_counts, UNKNOWN_DOMAIN};
pub use error::{CoreError, Result};
pub use frame::{DerivedUser, Summary, UserFrame};
pub use types::{parse_users, Address, Company, User, UserRow, ValueCount};
