//! Startup configuration
//!
//! Environment lookups happen exactly once, in [`Settings::from_config`].
//! Everything downstream receives the captured [`Settings`] value.

pub mod settings;

pub use settings::{expand_home, Settings};
