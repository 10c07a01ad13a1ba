//! Template package resolution
//!
//! A package identifier is looked up in a fixed order of candidate
//! locations. Literal paths are always checked before installed modules,
//! so a local directory shadows a module with the same name.

use crate::config::Settings;
use crate::error::AddError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// User-supplied resolution request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSpec {
    /// Path or package name as typed by the user
    pub identifier: String,

    /// Look up `identifier` instead of the prefixed module name
    pub exact: bool,

    /// Prefix added to every installed generator name
    pub prefix: Option<String>,

    /// Name to report instead of the canonical name
    pub explicit_name: Option<String>,
}

impl PackageSpec {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Canonical package name, independent of which candidate matched
    pub fn canonical_name(&self, settings: &Settings) -> String {
        settings.module_name(&self.identifier, self.exact)
    }

    /// Name used in progress and error messages
    pub fn display_name(&self, settings: &Settings) -> String {
        self.explicit_name
            .clone()
            .unwrap_or_else(|| self.canonical_name(settings))
    }
}

/// A candidate location for a template package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// `<cwd>/<identifier>`
    LiteralPath,
    /// `<cwd>/<identifier>/_templates`
    LiteralTemplates,
    /// `<install dir>/<identifier>`
    InstallPath,
    /// `<install dir>/<identifier>/_templates`
    InstallTemplates,
    /// `<local modules>/<module>/_templates`
    LocalModule,
    /// `<global modules>/<module>/_templates`
    GlobalModule,
}

impl Candidate {
    /// Candidates in the order they are checked
    pub const SEARCH_ORDER: [Candidate; 6] = [
        Candidate::LiteralPath,
        Candidate::LiteralTemplates,
        Candidate::InstallPath,
        Candidate::InstallTemplates,
        Candidate::LocalModule,
        Candidate::GlobalModule,
    ];

    /// Build this candidate's path for a request
    pub fn path(self, spec: &PackageSpec, settings: &Settings) -> PathBuf {
        let id = spec.identifier.as_str();
        let templates = settings.templates_dir.as_str();

        match self {
            Candidate::LiteralPath => settings.cwd.join(id),
            Candidate::LiteralTemplates => settings.cwd.join(id).join(templates),
            Candidate::InstallPath => settings.install_dir.join(id),
            Candidate::InstallTemplates => settings.install_dir.join(id).join(templates),
            Candidate::LocalModule => settings
                .local_modules_root
                .join(settings.module_name(id, spec.exact))
                .join(templates),
            Candidate::GlobalModule => settings
                .global_modules_root
                .join(settings.module_name(id, spec.exact))
                .join(templates),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Candidate::LiteralPath => "path",
            Candidate::LiteralTemplates => "path templates",
            Candidate::InstallPath => "bundled path",
            Candidate::InstallTemplates => "bundled templates",
            Candidate::LocalModule => "local module",
            Candidate::GlobalModule => "global module",
        }
    }
}

/// Outcome of resolving a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        canonical_name: String,
        source_path: PathBuf,
        candidate: Candidate,
    },
    NotFound,
}

impl Resolution {
    /// Convert into a result, reporting the identifier that failed
    pub fn found(self, spec: &PackageSpec) -> Result<(String, PathBuf), AddError> {
        match self {
            Resolution::Found {
                canonical_name,
                source_path,
                ..
            } => Ok((canonical_name, source_path)),
            Resolution::NotFound => Err(AddError::NotFound {
                identifier: spec.identifier.clone(),
            }),
        }
    }
}

/// Resolve a package against the real filesystem
pub fn resolve(spec: &PackageSpec, settings: &Settings) -> Resolution {
    resolve_with(spec, settings, |path| path.is_dir())
}

/// Resolve a package using a custom directory-existence check
///
/// Candidates are built and checked one at a time; checking stops at the
/// first hit.
pub fn resolve_with<F>(spec: &PackageSpec, settings: &Settings, mut exists: F) -> Resolution
where
    F: FnMut(&Path) -> bool,
{
    for candidate in Candidate::SEARCH_ORDER {
        let path = candidate.path(spec, settings);
        let hit = exists(&path);
        debug!(
            candidate = candidate.description(),
            path = %path.display(),
            hit,
            "checked template candidate"
        );

        if hit {
            return Resolution::Found {
                canonical_name: spec.canonical_name(settings),
                source_path: path,
                candidate,
            };
        }
    }

    Resolution::NotFound
}
