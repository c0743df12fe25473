//!
//! Harness entry point for binaries embedding a case registry.

use std::{path::PathBuf, process};

use clap::Parser;

use crate::params;
use crate::registry::CaseRegistry;
use crate::report::RunConfig;
use crate::runner;

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The harness CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "paracase",
    version,
    about = "Run parametrized test cases registered with the paracase harness."
)]
pub struct HarnessArgs {
    /// Case-insensitive substring filter on selector names.
    pub filter: Option<String>,

    /// Directory scanned for YAML parameter files.
    #[arg(long, value_name = "DIR")]
    pub params: Option<PathBuf>,

    /// List selectors per case without running them.
    #[arg(long)]
    pub list: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl HarnessArgs {
    /// Builds the run configuration these arguments describe.
    pub fn to_config(&self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            filter: self.filter.as_ref().map(|f| f.to_lowercase()),
            params_root: self
                .params
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or(defaults.params_root),
            use_colors: defaults.use_colors && !self.no_color,
        }
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for harness binaries.
///
/// Parses the process arguments, runs the registry, and exits nonzero when
/// any selector failed.
pub fn harness_main(registry: &CaseRegistry) {
    let args = HarnessArgs::parse();
    run_with_args(registry, &args);
}

/// Runs the registry under already-parsed arguments.
pub fn run_with_args(registry: &CaseRegistry, args: &HarnessArgs) {
    let config = args.to_config();

    // Unreadable parameter files abort the run before any selector fires.
    if let Some(root) = args.params.as_deref() {
        if let Err(e) = params::load_all_param_sets(root) {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }

    if args.list {
        list_selectors(registry);
        return;
    }

    let (_, failed, _) = runner::run_all(registry, &config);
    if failed > 0 {
        process::exit(1);
    }
}

/// Prints every registered case and its selectors without invoking anything.
fn list_selectors(registry: &CaseRegistry) {
    for entry in registry.entries() {
        println!("{}", entry.name());
        for selector in entry.selector_names() {
            println!("  {}", selector);
        }
    }
}
