//! Selector invocation: the external-collaborator side of the parametrized
//! case contract.
//!
//! For each selector, in sequence order, the runner constructs a fresh case
//! instance, runs `set_up`, invokes the method, and runs `tear_down`. A panic
//! during invocation (an assertion failure) is caught and recorded as a
//! failure carrying the panic message; nothing is ever skipped silently.

use std::any::Any;
use std::panic;

use crate::case::ParametrizedCase;
use crate::registry::{CaseEntry, CaseRegistry};
use crate::report::{self, RunConfig};
use crate::selector::MethodSelector;

// =============================================================================
// OUTCOME TYPES
// =============================================================================

/// Represents the result of invoking a single selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Selector ran to completion
    Pass { case: String, selector: String },
    /// Selector panicked (assertion failure or misbehaving method)
    Fail {
        case: String,
        selector: String,
        message: String,
    },
    /// Selector was not invoked
    Skipped {
        case: String,
        selector: String,
        reason: String,
    },
}

impl CaseOutcome {
    pub fn selector(&self) -> &str {
        match self {
            CaseOutcome::Pass { selector, .. }
            | CaseOutcome::Fail { selector, .. }
            | CaseOutcome::Skipped { selector, .. } => selector,
        }
    }
}

// =============================================================================
// SINGLE-CASE EXECUTION
// =============================================================================

/// Returns the selector names a case declares, in declaration order.
pub fn selector_names<C: ParametrizedCase>() -> Vec<String> {
    C::test_method_selectors()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

/// Runs every selector a case declares, in declaration order.
///
/// The selector list is queried exactly once per call. The list is taken as
/// returned: no reordering, no deduplication (a selector listed twice is
/// invoked twice), no dropped entries. Filtered-out selectors are recorded as
/// skips so the outcome list always mirrors the declared sequence.
pub fn run_case<C: ParametrizedCase>(case_name: &str, config: &RunConfig) -> Vec<CaseOutcome> {
    C::test_method_selectors()
        .iter()
        .map(|selector| {
            if let Some(reason) = selector_skip_reason(config.filter.as_deref(), selector.name()) {
                return CaseOutcome::Skipped {
                    case: case_name.to_string(),
                    selector: selector.name().to_string(),
                    reason,
                };
            }
            match invoke_selector(selector) {
                Ok(()) => CaseOutcome::Pass {
                    case: case_name.to_string(),
                    selector: selector.name().to_string(),
                },
                Err(message) => CaseOutcome::Fail {
                    case: case_name.to_string(),
                    selector: selector.name().to_string(),
                    message,
                },
            }
        })
        .collect()
}

/// Invokes one selector on a fresh instance, with lifecycle hooks around it.
///
/// `tear_down` runs even when the method panicked.
fn invoke_selector<C: ParametrizedCase>(selector: &MethodSelector<C>) -> Result<(), String> {
    let mut case = C::default();
    case.set_up();
    let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| selector.invoke(&mut case)));
    case.tear_down();
    outcome.map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test method panicked".to_string()
    }
}

// =============================================================================
// SKIP LOGIC
// =============================================================================

/// Skip reason for a selector under the configured filter, if any.
pub fn selector_skip_reason(filter: Option<&str>, selector: &str) -> Option<String> {
    if let Some(f) = filter {
        if !selector.to_lowercase().contains(&f.to_lowercase()) {
            return Some(format!("Filtered out by substring: {}", f));
        }
    }
    None
}

/// Skip reason for a whole registered case, if any.
pub fn case_skip_reason(entry: &CaseEntry, has_only: bool) -> Option<String> {
    if has_only && !entry.only() {
        return Some("Not marked 'only' in 'only' mode".to_string());
    }
    if entry.skip() {
        return Some("Marked 'skip'".to_string());
    }
    None
}

// =============================================================================
// FULL-REGISTRY EXECUTION
// =============================================================================

/// Runs every registered case in registration order, reports, and returns
/// (passed, failed, skipped) counts.
pub fn run_all(registry: &CaseRegistry, config: &RunConfig) -> (usize, usize, usize) {
    let has_only = registry.has_only();

    let mut outcomes = Vec::new();
    for entry in registry.entries() {
        if let Some(reason) = case_skip_reason(entry, has_only) {
            for selector in entry.selector_names() {
                outcomes.push(CaseOutcome::Skipped {
                    case: entry.name().to_string(),
                    selector,
                    reason: reason.clone(),
                });
            }
            continue;
        }
        outcomes.extend(entry.run(config));
    }

    report::report_outcomes(&outcomes, config);
    partition_outcomes(&outcomes)
}

/// Partition outcomes by kind into (passed, failed, skipped) counts.
pub fn partition_outcomes(outcomes: &[CaseOutcome]) -> (usize, usize, usize) {
    let passed = outcomes
        .iter()
        .filter(|o| matches!(o, CaseOutcome::Pass { .. }))
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, CaseOutcome::Fail { .. }))
        .count();
    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, CaseOutcome::Skipped { .. }))
        .count();
    (passed, failed, skipped)
}
