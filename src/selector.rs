use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable handle for a test method so it can be stored in an ordered,
/// homogeneous collection.
///
/// The selector carries the method identifier (its name) together with the
/// callable bound at construction time. Equality and hashing are structural
/// on the name only: two selectors built from the same identifier compare
/// equal even when the bound callables are distinct allocations.
///
/// # Examples
///
/// ```rust
/// use paracase::selector::MethodSelector;
///
/// struct Probe { hits: usize }
///
/// let sel: MethodSelector<Probe> = MethodSelector::new("test_probe", |p: &mut Probe| p.hits += 1);
/// let mut probe = Probe { hits: 0 };
/// sel.invoke(&mut probe);
/// assert_eq!(probe.hits, 1);
/// assert_eq!(sel.name(), "test_probe");
/// ```
pub struct MethodSelector<C> {
    name: String,
    method: Arc<dyn Fn(&mut C)>,
}

impl<C> MethodSelector<C> {
    /// Wraps a method identifier and its bound callable into a selector.
    ///
    /// No validation happens here; a selector whose callable panics or
    /// misbehaves is a caller error that surfaces at invocation time.
    pub fn new<F>(name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut C) + 'static,
    {
        Self {
            name: name.into(),
            method: Arc::new(method),
        }
    }

    /// Returns the method identifier this selector wraps.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the wrapped method on the given case instance.
    pub fn invoke(&self, case: &mut C) {
        (self.method)(case)
    }
}

impl<C> Clone for MethodSelector<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            method: Arc::clone(&self.method),
        }
    }
}

impl<C> fmt::Debug for MethodSelector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSelector")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<C> PartialEq for MethodSelector<C> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<C> Eq for MethodSelector<C> {}

impl<C> Hash for MethodSelector<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
