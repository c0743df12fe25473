//! Run configuration and result reporting.

use crate::runner::{partition_outcomes, CaseOutcome};

/// Configuration for harness execution and reporting.
pub struct RunConfig {
    /// Case-insensitive substring filter applied to selector names.
    pub filter: Option<String>,
    /// Root directory scanned for YAML parameter files.
    pub params_root: String,
    /// Whether to emit ANSI colors.
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            params_root: "tests/params".to_string(),
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

impl RunConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Print per-selector outcome lines and a summary with counts.
pub fn report_outcomes(outcomes: &[CaseOutcome], config: &RunConfig) {
    for outcome in outcomes {
        match outcome {
            CaseOutcome::Pass { case, selector } => {
                println!("{}: {} [{}]", config.colorize("PASS", GREEN), selector, case)
            }
            CaseOutcome::Fail { .. } => print_failure(outcome, config),
            CaseOutcome::Skipped {
                case,
                selector,
                reason,
            } => {
                println!(
                    "{}: {} [{}] ({})",
                    config.colorize("SKIP", YELLOW),
                    selector,
                    case,
                    reason
                )
            }
        }
    }

    let (passed, failed, skipped) = partition_outcomes(outcomes);
    println!(
        "\nRun summary: total {}, {} {}, {} {}, {} {}",
        outcomes.len(),
        config.colorize("passed", GREEN),
        passed,
        config.colorize("failed", RED),
        failed,
        config.colorize("skipped", YELLOW),
        skipped,
    );

    if failed > 0 {
        eprintln!("\nFailed selectors:");
        for outcome in outcomes {
            if let CaseOutcome::Fail { case, selector, .. } = outcome {
                eprintln!("  - {} [{}]", selector, case);
            }
        }
    }
}

/// Print detailed failure information.
pub fn print_failure(outcome: &CaseOutcome, config: &RunConfig) {
    if let CaseOutcome::Fail {
        case,
        selector,
        message,
    } = outcome
    {
        eprintln!("{}: {} [{}]", config.colorize("FAIL", RED), selector, case);
        eprintln!("  Error: {}", message);
    }
}
