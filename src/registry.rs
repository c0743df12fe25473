//! Canonical case registry.
//!
//! Rust has no runtime class discovery, so case types are registered
//! explicitly by name. Registry Invariant: the registry is a single source of
//! truth. It must be constructed once at the entrypoint and passed by
//! reference to the runner and the CLI. Never construct a local/hidden
//! registry.

use crate::case::ParametrizedCase;
use crate::error::HarnessError;
use crate::report::RunConfig;
use crate::runner::{self, CaseOutcome};

/// Skip/only marks attached to a registered case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseMarks {
    pub skip: bool,
    pub only: bool,
}

/// One registered case type: its name, its marks, and the monomorphized
/// entry points the harness calls through.
#[derive(Debug)]
pub struct CaseEntry {
    name: String,
    marks: CaseMarks,
    selectors_fn: fn() -> Vec<String>,
    run_fn: fn(&str, &RunConfig) -> Vec<CaseOutcome>,
}

impl CaseEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skip(&self) -> bool {
        self.marks.skip
    }

    pub fn only(&self) -> bool {
        self.marks.only
    }

    /// The selector names this case declares, in declaration order.
    pub fn selector_names(&self) -> Vec<String> {
        (self.selectors_fn)()
    }

    /// Runs every selector this case declares.
    pub fn run(&self, config: &RunConfig) -> Vec<CaseOutcome> {
        (self.run_fn)(&self.name, config)
    }
}

/// Ordered, name-keyed registry of parametrized case types.
///
/// # Examples
///
/// ```rust
/// use paracase::case::ParametrizedCase;
/// use paracase::registry::CaseRegistry;
///
/// #[derive(Default)]
/// struct Plain;
/// impl ParametrizedCase for Plain {}
///
/// let mut registry = CaseRegistry::new();
/// registry.register::<Plain>("plain").unwrap();
/// assert_eq!(registry.len(), 1);
/// assert!(registry.register::<Plain>("plain").is_err());
/// ```
#[derive(Debug, Default)]
pub struct CaseRegistry {
    entries: Vec<CaseEntry>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a case type under the given name.
    pub fn register<C: ParametrizedCase>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<(), HarnessError> {
        self.register_marked::<C>(name, CaseMarks::default())
    }

    /// Registers a case type with explicit skip/only marks.
    pub fn register_marked<C: ParametrizedCase>(
        &mut self,
        name: impl Into<String>,
        marks: CaseMarks,
    ) -> Result<(), HarnessError> {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name) {
            return Err(HarnessError::DuplicateCase { name });
        }
        self.entries.push(CaseEntry {
            name,
            marks,
            selectors_fn: runner::selector_names::<C>,
            run_fn: runner::run_case::<C>,
        });
        Ok(())
    }

    /// All registered cases, in registration order.
    pub fn entries(&self) -> &[CaseEntry] {
        &self.entries
    }

    /// Looks up a case by name.
    pub fn get(&self, name: &str) -> Result<&CaseEntry, HarnessError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| HarnessError::UnknownCase {
                name: name.to_string(),
            })
    }

    /// True when any registered case is marked `only`.
    pub fn has_only(&self) -> bool {
        self.entries.iter().any(|e| e.marks.only)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::MethodSelector;

    #[derive(Default)]
    struct Empty;
    impl ParametrizedCase for Empty {}

    #[derive(Default)]
    struct Pair;
    impl ParametrizedCase for Pair {
        fn test_method_selectors() -> Vec<MethodSelector<Self>> {
            vec![
                MethodSelector::new("test_left", |_: &mut Self| {}),
                MethodSelector::new("test_right", |_: &mut Self| {}),
            ]
        }
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = CaseRegistry::new();
        registry.register::<Pair>("pair").unwrap();
        registry.register::<Empty>("empty").unwrap();
        let names: Vec<_> = registry.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["pair", "empty"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = CaseRegistry::new();
        registry.register::<Pair>("pair").unwrap();
        let err = registry.register::<Empty>("pair").unwrap_err();
        assert!(matches!(err, HarnessError::DuplicateCase { .. }));
    }

    #[test]
    fn lookup_by_name() {
        let mut registry = CaseRegistry::new();
        registry.register::<Pair>("pair").unwrap();
        assert_eq!(
            registry.get("pair").unwrap().selector_names(),
            ["test_left", "test_right"]
        );
        assert!(matches!(
            registry.get("missing"),
            Err(HarnessError::UnknownCase { .. })
        ));
    }

    #[test]
    fn empty_case_lists_no_selectors() {
        let mut registry = CaseRegistry::new();
        registry.register::<Empty>("empty").unwrap();
        assert!(registry.get("empty").unwrap().selector_names().is_empty());
    }
}
