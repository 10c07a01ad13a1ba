//! hygen-add CLI - Add template packages to a project's hygen templates

use clap::{CommandFactory, Parser};
use colored::Colorize;
use hygen_add_core::tui::{AddArgs, ConflictMode};
use hygen_add_core::{AddError, ProductConfig};
use std::process::ExitCode;

/// hygen product configuration
#[derive(Clone)]
pub struct HygenConfig;

impl ProductConfig for HygenConfig {
    fn name(&self) -> &'static str {
        "hygen-add"
    }

    fn module_prefix(&self) -> &'static str {
        "hygen-"
    }

    fn global_root_env(&self) -> &'static str {
        "NPM_CONFIG_PREFIX"
    }

    fn default_global_root(&self) -> &'static str {
        "~/.npm-global/lib/node_modules"
    }

    fn dest_dir_env(&self) -> &'static str {
        "HYGEN_TMPLS"
    }
}

const EXAMPLES: &str = "\
Notes:
  PATH is always checked before PACKAGE.
  For an npm module named 'hygen-react', PACKAGE is 'react'.
  Generators are copied to $HYGEN_TMPLS or '_templates' next to this program.

Examples:
  $ hygen-add ~/.local/templates
  ->  template_path = ~/.local/templates

  $ hygen-add cra
  ->  searches for the first directory that exists in this order:
        ./cra
        ./cra/_templates
        node_modules/hygen-cra/_templates
        ~/.npm-global/lib/node_modules/hygen-cra/_templates

  $ hygen-add canvas --exact
  ->  searches node_modules/canvas instead of node_modules/hygen-canvas";

#[derive(Parser, Debug)]
#[command(name = "hygen-add")]
#[command(about = "Add a hygen template package to your templates")]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Args {
    /// Path relative to the current directory, or npm package to add
    #[arg(value_name = "PATH|PACKAGE")]
    pub identifier: Option<String>,

    /// Package name to report when it cannot be inferred
    #[arg(long)]
    pub name: Option<String>,

    /// Prefix added to generators, avoids clashing names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Look for PACKAGE instead of hygen-PACKAGE
    #[arg(long)]
    pub exact: bool,

    /// Overwrite existing generators without asking
    #[arg(short, long, conflicts_with = "no")]
    pub yes: bool,

    /// Keep existing generators without asking
    #[arg(long)]
    pub no: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for AddArgs {
    fn from(args: Args) -> Self {
        let conflicts = if args.yes {
            ConflictMode::Yes
        } else if args.no {
            ConflictMode::No
        } else {
            ConflictMode::Prompt
        };

        AddArgs {
            identifier: args.identifier,
            name: args.name,
            prefix: args.prefix,
            exact: args.exact,
            conflicts,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    hygen_add_core::logging::init_tracing(args.verbose);

    let result = hygen_add_core::run(&HygenConfig, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print a failure the way the user expects to see it and pick the exit code
fn report(err: &anyhow::Error) -> ExitCode {
    let Some(add_err) = err.downcast_ref::<AddError>() else {
        print_error_block(err);
        return ExitCode::FAILURE;
    };

    match add_err {
        AddError::Usage => {
            println!("{}\n", add_err);
            println!("{}", Args::command().render_help());
        }
        AddError::NotFound { .. } => println!("{}", add_err),
        AddError::Install { .. } => print_error_block(err),
    }

    ExitCode::from(add_err.exit_code())
}

fn print_error_block(err: &anyhow::Error) {
    println!("\n\n{}\n", err.to_string().red());
    for cause in err.chain().skip(1) {
        println!("  {}", cause);
    }
}
