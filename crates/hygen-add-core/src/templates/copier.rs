//! Generator installation into a destination templates root

use crate::error::InstallError;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Name a generator is installed under
///
/// Works on raw file names so non-UTF-8 entries keep their exact bytes.
pub fn target_name(basename: &OsStr, prefix: Option<&str>) -> OsString {
    match prefix {
        Some(prefix) => {
            let mut name = OsString::from(prefix);
            name.push("-");
            name.push(basename);
            name
        }
        None => basename.to_os_string(),
    }
}

/// One immediate child of the source directory and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    /// Display form of the target file name
    pub target_name: String,
    /// Something already exists at `target_path`
    pub conflicts: bool,
}

/// Compute the copy plan for a source directory, sorted by entry name
pub async fn plan(
    source: &Path,
    dest_root: &Path,
    prefix: Option<&str>,
) -> Result<Vec<PlanEntry>, InstallError> {
    let read_err = |source_err: io::Error| InstallError::ReadSource {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut dir = fs::read_dir(source).await.map_err(read_err)?;
    let mut names = Vec::new();
    while let Some(entry) = dir.next_entry().await.map_err(read_err)? {
        names.push(entry.file_name());
    }
    names.sort();

    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let target_file = target_name(&name, prefix);
        let target_path = dest_root.join(&target_file);
        let conflicts = fs::symlink_metadata(&target_path).await.is_ok();

        entries.push(PlanEntry {
            source_path: source.join(&name),
            target_path,
            target_name: target_file.to_string_lossy().into_owned(),
            conflicts,
        });
    }

    Ok(entries)
}

/// What happened to a single generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Added,
    Skipped,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Added => f.pad("added"),
            EntryStatus::Skipped => f.pad("skipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub name: String,
    pub status: EntryStatus,
}

/// Per-entry outcomes of an install, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub entries: Vec<EntryOutcome>,
}

impl InstallReport {
    fn names(&self, status: EntryStatus) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.status == status)
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn added(&self) -> Vec<&str> {
        self.names(EntryStatus::Added)
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.names(EntryStatus::Skipped)
    }
}

/// Decides conflicts and observes progress during an install
pub trait InstallHandler {
    /// Whether an existing `target_name` should be overwritten
    fn should_overwrite(&mut self, target_name: &str) -> io::Result<bool>;

    /// Called once per entry, right after it is added or skipped
    fn on_outcome(&mut self, _outcome: &EntryOutcome) {}
}

impl<F> InstallHandler for F
where
    F: FnMut(&str) -> bool,
{
    fn should_overwrite(&mut self, target_name: &str) -> io::Result<bool> {
        Ok(self(target_name))
    }
}

/// Fixed answer to every conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    Never,
}

impl InstallHandler for Overwrite {
    fn should_overwrite(&mut self, _target_name: &str) -> io::Result<bool> {
        Ok(*self == Overwrite::Always)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Prefix added to every generator name
    pub prefix: Option<String>,
}

/// Copy every generator under `source` into `dest_root`
///
/// Stops at the first filesystem error. Entries copied before the
/// failure are left in place.
pub async fn install<H>(
    source: &Path,
    dest_root: &Path,
    options: &InstallOptions,
    handler: &mut H,
) -> Result<InstallReport, InstallError>
where
    H: InstallHandler + ?Sized,
{
    fs::create_dir_all(dest_root)
        .await
        .map_err(|e| InstallError::CreateRoot {
            path: dest_root.to_path_buf(),
            source: e,
        })?;

    let entries = plan(source, dest_root, options.prefix.as_deref()).await?;
    debug!(
        source = %source.display(),
        dest = %dest_root.display(),
        count = entries.len(),
        "planned install"
    );

    let mut report = InstallReport::default();
    for entry in entries {
        ensure_disjoint(&entry.source_path, &entry.target_path).await?;

        let overwrite = if entry.conflicts {
            handler
                .should_overwrite(&entry.target_name)
                .map_err(|e| InstallError::Prompt {
                    name: entry.target_name.clone(),
                    source: e,
                })?
        } else {
            true
        };

        let status = if overwrite {
            copy_entry(&entry.source_path, &entry.target_path).await?;
            info!(name = %entry.target_name, overwrote = entry.conflicts, "added generator");
            EntryStatus::Added
        } else {
            info!(name = %entry.target_name, "skipped existing generator");
            EntryStatus::Skipped
        };

        let outcome = EntryOutcome {
            name: entry.target_name,
            status,
        };
        handler.on_outcome(&outcome);
        report.entries.push(outcome);
    }

    Ok(report)
}

/// Refuse to copy an entry onto itself or into one of its own subdirectories
async fn ensure_disjoint(from: &Path, to: &Path) -> Result<(), InstallError> {
    let canon_err = |path: &Path, e: io::Error| InstallError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: io::Error::new(e.kind(), format!("{}: {}", path.display(), e)),
    };

    let from_canon = fs::canonicalize(from)
        .await
        .map_err(|e| canon_err(from, e))?;

    // The target itself may not exist yet; its parent is the destination root
    let to_canon = match fs::canonicalize(to).await {
        Ok(path) => path,
        Err(_) => match (to.parent(), to.file_name()) {
            (Some(parent), Some(file)) => fs::canonicalize(parent)
                .await
                .map_err(|e| canon_err(parent, e))?
                .join(file),
            _ => to.to_path_buf(),
        },
    };

    if to_canon.starts_with(&from_canon) {
        return Err(InstallError::SameOrNested {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    Ok(())
}

/// Recursively copy a file or directory, overwriting existing files
async fn copy_entry(from: &Path, to: &Path) -> Result<(), InstallError> {
    let copy_err = |path: &Path, target: &Path, e: io::Error| InstallError::Copy {
        from: path.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    };

    for item in WalkDir::new(from).follow_links(true) {
        let item = item.map_err(|e| {
            let path = e.path().unwrap_or(from).to_path_buf();
            copy_err(&path, to, e.into())
        })?;

        let target = match item.path().strip_prefix(from) {
            Ok(rel) if !rel.as_os_str().is_empty() => to.join(rel),
            _ => to.to_path_buf(),
        };

        if item.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .map_err(|e| copy_err(item.path(), &target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| copy_err(item.path(), &target, e))?;
            }
            fs::copy(item.path(), &target)
                .await
                .map_err(|e| copy_err(item.path(), &target, e))?;
        }
    }

    Ok(())
}
