//! Hygen Add Core - Shared library for installing hygen template packages
//!
//! A template package is a directory of generators, usually found under a
//! `_templates` directory. This library finds such a package and copies its
//! generators into a project's own templates root.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package resolution and generator installation
//! - **Layer 2: Configuration** - `ProductConfig` trait and `Settings` captured at startup
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use hygen_add_core::{config::Settings, templates};
//!
//! let settings = Settings::from_config(&MyConfig)?;
//! let spec = templates::PackageSpec::new("react");
//! let (_name, source) = templates::resolve(&spec, &settings).found(&spec)?;
//!
//! let mut keep_existing = |_name: &str| false;
//! let report = templates::install(&source, &settings.dest_root, &Default::default(), &mut keep_existing).await?;
//! println!("added {:?}", report.added());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod product;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{AddError, InstallError};
pub use product::ProductConfig;
pub use templates::{
    install, resolve, InstallHandler, InstallOptions, InstallReport, Overwrite, PackageSpec,
    Resolution,
};

#[cfg(feature = "tui")]
pub use tui::run;
