//! Userboard Dashboard
//!
//! Fetches the public users list, overwrites the local users table, reloads
//! it, derives the domain and length columns and renders the dashboard,
//! either once to disk or on every page load.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod state;

// Re-export commonly used types for convenience
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use pipeline::Pipeline;
pub use state::AppState;
