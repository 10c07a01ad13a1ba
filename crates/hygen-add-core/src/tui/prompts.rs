//! Charm-style CLI prompts using cliclack

use crate::config::Settings;
use crate::error::AddError;
use crate::product::ProductConfig;
use crate::templates::copier::{self, EntryOutcome, EntryStatus, InstallHandler, InstallOptions};
use crate::templates::resolver::{self, PackageSpec};
use crate::templates::InstallReport;
use anyhow::Result;
use colored::Colorize;
use std::io;
use tracing::debug;

/// How to answer when a generator already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictMode {
    /// Ask interactively, defaulting to overwrite
    #[default]
    Prompt,
    /// Overwrite without asking
    Yes,
    /// Keep the existing generator without asking
    No,
}

/// CLI arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Path or package to add
    pub identifier: Option<String>,

    /// Name reported instead of the package name
    pub name: Option<String>,

    /// Prefix added to every generator
    pub prefix: Option<String>,

    /// Look up the package name as given, without the module prefix
    pub exact: bool,

    pub conflicts: ConflictMode,
}

impl AddArgs {
    fn into_spec(self) -> Result<PackageSpec, AddError> {
        let identifier = self
            .identifier
            .filter(|id| !id.is_empty())
            .ok_or(AddError::Usage)?;

        Ok(PackageSpec {
            identifier,
            exact: self.exact,
            prefix: self.prefix.filter(|p| !p.is_empty()),
            explicit_name: self.name,
        })
    }
}

/// Prints each outcome and answers conflicts according to a [`ConflictMode`]
pub struct ConsoleHandler {
    mode: ConflictMode,
}

impl ConsoleHandler {
    pub fn new(mode: ConflictMode) -> Self {
        Self { mode }
    }
}

impl InstallHandler for ConsoleHandler {
    fn should_overwrite(&mut self, target_name: &str) -> io::Result<bool> {
        match self.mode {
            ConflictMode::Yes => Ok(true),
            ConflictMode::No => Ok(false),
            ConflictMode::Prompt => {
                cliclack::confirm(format!("'{}' already exists. Overwrite?", target_name))
                    .initial_value(true)
                    .interact()
            }
        }
    }

    fn on_outcome(&mut self, outcome: &EntryOutcome) {
        println!("{}", outcome_line(outcome));
    }
}

fn outcome_line(outcome: &EntryOutcome) -> String {
    let line = format!("{:>8}: {}", outcome.status, outcome.name);
    match outcome.status {
        EntryStatus::Added => line.green().to_string(),
        EntryStatus::Skipped => line.yellow().to_string(),
    }
}

/// Resolve the requested package and install its generators
pub async fn run<C: ProductConfig>(config: &C, args: AddArgs) -> Result<InstallReport> {
    let mode = args.conflicts;
    let spec = args.into_spec()?;
    let settings = Settings::from_config(config)?;
    debug!(product = config.name(), ?settings, "captured settings");

    let (canonical_name, source_path) = resolver::resolve(&spec, &settings).found(&spec)?;
    let package = spec.display_name(&settings);
    debug!(
        package = %canonical_name,
        source = %source_path.display(),
        dest = %settings.dest_root.display(),
        "resolved template package"
    );

    show_progress(format!("Adding: {}", package));

    let options = InstallOptions {
        prefix: spec.prefix.clone(),
    };
    let mut handler = ConsoleHandler::new(mode);
    let report = copier::install(&source_path, &settings.dest_root, &options, &mut handler)
        .await
        .map_err(|source| AddError::Install { package, source })?;

    Ok(report)
}

/// Flash a spinner on interactive terminals before the per-entry output
fn show_progress(message: String) {
    if console::user_attended() {
        let spinner = cliclack::spinner();
        spinner.start(&message);
        spinner.stop(message);
    } else {
        debug!("{}", message);
    }
}
