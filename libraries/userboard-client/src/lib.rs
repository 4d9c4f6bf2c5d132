//! Userboard Client
//!
//! HTTP client for the public users endpoint the dashboard is built from.
//!
//! One unauthenticated GET with a fixed deadline. There is no retry: a
//! network failure aborts the run and is shown to the viewer.
//!
//! # Example
//!
//! ```ignore
//! use userboard_client::{ClientConfig, UsersClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://jsonplaceholder.typicode.com/users");
//!     let client = UsersClient::new(config)?;
//!
//!     let users = client.fetch_users().await?;
//!     println!("Fetched {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{ClientConfig, UsersClient, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
