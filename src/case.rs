use std::fmt;

use crate::selector::MethodSelector;

/// A test case whose additional test methods are listed per parameter set.
///
/// Implementors override [`test_method_selectors`](Self::test_method_selectors)
/// to supply the ordered sequence of methods a runner should invoke. The
/// default implementation returns nothing, so a case that does not override
/// contributes zero additional test methods.
///
/// The query is class-level (no instance is needed) and pure: the harness
/// never reorders, deduplicates, or filters the returned sequence, and calling
/// it twice must yield the same sequence both times.
///
/// # Examples
///
/// ```rust
/// use paracase::case::ParametrizedCase;
/// use paracase::selector::MethodSelector;
///
/// #[derive(Default)]
/// struct Plain;
/// impl ParametrizedCase for Plain {}
///
/// assert!(Plain::test_method_selectors().is_empty());
///
/// #[derive(Default)]
/// struct TwoMethods;
/// impl ParametrizedCase for TwoMethods {
///     fn test_method_selectors() -> Vec<MethodSelector<Self>> {
///         vec![
///             MethodSelector::new("test_a", |_: &mut Self| {}),
///             MethodSelector::new("test_b", |_: &mut Self| {}),
///         ]
///     }
/// }
///
/// let names: Vec<_> = TwoMethods::test_method_selectors()
///     .iter()
///     .map(|s| s.name().to_string())
///     .collect();
/// assert_eq!(names, ["test_a", "test_b"]);
/// ```
pub trait ParametrizedCase: Default {
    /// List of test methods to call. By default returns nothing.
    fn test_method_selectors() -> Vec<MethodSelector<Self>> {
        Vec::new()
    }

    /// Runs before each selector invocation on a fresh instance.
    fn set_up(&mut self) {}

    /// Runs after each selector invocation, also when the method panicked.
    fn tear_down(&mut self) {}
}

/// Builds one selector per parameter, in parameter order.
///
/// Each selector is named `test_<param>` using the parameter's display form
/// and binds that parameter into the method call, so the resulting sequence
/// mirrors the parameter list exactly. Duplicate display forms produce
/// duplicate selector names; no deduplication happens here.
pub fn selectors_from_params<C, P, F>(params: Vec<P>, method: F) -> Vec<MethodSelector<C>>
where
    P: fmt::Display + 'static,
    F: Fn(&mut C, &P) + Clone + 'static,
{
    params
        .into_iter()
        .map(|param| {
            let name = format!("test_{}", param);
            let method = method.clone();
            MethodSelector::new(name, move |case: &mut C| method(case, &param))
        })
        .collect()
}
