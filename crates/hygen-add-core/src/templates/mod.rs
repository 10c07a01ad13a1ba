//! Template package resolution and installation
//!
//! This module provides:
//! - Package lookup across literal paths and installed modules
//! - Copy planning with optional generator prefixes
//! - Installation with pluggable conflict handling

pub mod copier;
pub mod resolver;

pub use copier::{
    install, plan, target_name, EntryOutcome, EntryStatus, InstallHandler, InstallOptions,
    InstallReport, Overwrite, PlanEntry,
};
pub use resolver::{resolve, resolve_with, Candidate, PackageSpec, Resolution};
