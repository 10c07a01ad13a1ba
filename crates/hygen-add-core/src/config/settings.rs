//! Resolved locations for a single invocation

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Filesystem locations and naming conventions captured at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Working directory literal-path candidates are joined onto
    pub cwd: PathBuf,

    /// Directory containing the running program
    pub install_dir: PathBuf,

    /// Root searched for locally installed template modules
    pub local_modules_root: PathBuf,

    /// Root searched for globally installed template modules
    pub global_modules_root: PathBuf,

    /// Directory generators are copied into
    pub dest_root: PathBuf,

    /// Prefix that turns an identifier into a module name
    pub module_prefix: String,

    /// Directory name holding templates inside a package
    pub templates_dir: String,
}

impl Settings {
    /// Capture settings from the process environment
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let install_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());

        let global_override = std::env::var(config.global_root_env()).ok();
        let dest_override = std::env::var(config.dest_dir_env()).ok();

        Ok(Self::from_values(
            config,
            cwd,
            install_dir,
            global_override.as_deref(),
            dest_override.as_deref(),
        ))
    }

    /// Build settings from already-read values
    ///
    /// Empty overrides count as unset.
    pub fn from_values<C: ProductConfig>(
        config: &C,
        cwd: PathBuf,
        install_dir: PathBuf,
        global_override: Option<&str>,
        dest_override: Option<&str>,
    ) -> Self {
        let global_root = global_override
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| config.default_global_root());
        let dest_dir = dest_override
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| config.templates_dir());

        Self {
            local_modules_root: install_dir.join(config.local_modules_dir()),
            global_modules_root: expand_home(global_root),
            // An absolute override replaces the install dir entirely
            dest_root: install_dir.join(expand_home(dest_dir)),
            module_prefix: config.module_prefix().to_string(),
            templates_dir: config.templates_dir().to_string(),
            cwd,
            install_dir,
        }
    }

    /// Module directory name for an identifier
    pub fn module_name(&self, identifier: &str, exact: bool) -> String {
        if exact {
            identifier.to_string()
        } else {
            format!("{}{}", self.module_prefix, identifier)
        }
    }
}

/// Expand a leading `~` to the user's home directory
///
/// Paths are returned unchanged when no home directory is known.
pub fn expand_home(path: &str) -> PathBuf {
    let home = match dirs::home_dir() {
        Some(home) => home,
        None => return PathBuf::from(path),
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
