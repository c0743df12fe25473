//! Parameter sets for parametrized cases.
//!
//! Parameters come from two places: generated in code as a cartesian grid
//! ([`ParamGrid`]), or supplied externally as YAML files discovered under a
//! root directory. Either way the result is an ordered list of values that a
//! case maps into its method selectors.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::HarnessError;

/// Represents a single parameter value.
///
/// # Examples
///
/// ```rust
/// use paracase::params::ParamValue;
/// let n = ParamValue::Number(50.0);
/// assert_eq!(n.type_name(), "Number");
/// assert_eq!(n.to_string(), "50");
/// let nil = ParamValue::default();
/// assert!(nil.is_nil());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Nil => "Nil",
            ParamValue::Bool(_) => "Bool",
            ParamValue::Number(_) => "Number",
            ParamValue::String(_) => "String",
            ParamValue::List(_) => "List",
            ParamValue::Map(_) => "Map",
        }
    }

    /// Returns true if the value is Nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, ParamValue::Nil)
    }

    /// Returns the contained number if this is a Number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained bool if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained string if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Nil => write!(f, "nil"),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Number(n) => {
                // whole numbers print without the trailing .0 so selector
                // names stay readable
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ParamValue::String(s) => write!(f, "{}", s),
            ParamValue::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            ParamValue::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// One row of a parameter grid: the values of every axis, in axis order.
///
/// Displays as the values joined with `_`, which is what
/// [`selectors_from_params`](crate::case::selectors_from_params) turns into
/// selector names like `test_50_100`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRow(Vec<ParamValue>);

impl ParamRow {
    /// Returns all values of the row in axis order.
    pub fn values(&self) -> &[ParamValue] {
        &self.0
    }

    /// Returns the value for the given axis index.
    pub fn get(&self, index: usize) -> Option<&ParamValue> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ParamValue>> for ParamRow {
    fn from(values: Vec<ParamValue>) -> Self {
        ParamRow(values)
    }
}

impl fmt::Display for ParamRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Builder for the cartesian product of parameter axes.
///
/// Rows come out in axis-major order: the first axis varies slowest, exactly
/// like nesting one `for` loop per axis with the first axis outermost.
///
/// # Examples
///
/// ```rust
/// use paracase::params::{ParamGrid, ParamValue};
///
/// let rows = ParamGrid::new()
///     .axis([ParamValue::Number(1.0), ParamValue::Number(2.0)])
///     .axis([ParamValue::Number(10.0), ParamValue::Number(20.0)])
///     .rows();
///
/// let labels: Vec<_> = rows.iter().map(|r| r.to_string()).collect();
/// assert_eq!(labels, ["1_10", "1_20", "2_10", "2_20"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamGrid {
    axes: Vec<Vec<ParamValue>>,
}

impl ParamGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one axis of values to the grid.
    pub fn axis(mut self, values: impl IntoIterator<Item = ParamValue>) -> Self {
        self.axes.push(values.into_iter().collect());
        self
    }

    /// Expands the grid into rows.
    ///
    /// A grid with no axes has no rows; a grid containing an empty axis also
    /// has no rows.
    pub fn rows(&self) -> Vec<ParamRow> {
        if self.axes.is_empty() {
            return Vec::new();
        }
        let mut rows: Vec<Vec<ParamValue>> = vec![Vec::new()];
        for axis in &self.axes {
            let mut next = Vec::with_capacity(rows.len() * axis.len());
            for row in &rows {
                for value in axis {
                    let mut extended = row.clone();
                    extended.push(value.clone());
                    next.push(extended);
                }
            }
            rows = next;
        }
        rows.into_iter().map(ParamRow).collect()
    }
}

/// A named, ordered collection of parameter values loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamSet {
    pub name: String,
    pub params: Vec<ParamValue>,
}

// =====================
// File Discovery and Loading
// =====================

/// Recursively scans a directory for `.yaml`/`.yml` parameter files.
///
/// The returned list of files is sorted to ensure deterministic ordering.
pub fn discover_param_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, HarnessError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| HarnessError::ParamWalk {
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_param_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Loads and parses all parameter sets from a single YAML file.
pub fn load_param_sets(path: &Path) -> Result<Vec<ParamSet>, HarnessError> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| HarnessError::ParamIo {
        path: path_str.clone(),
        source,
    })?;
    parse_param_sets(&path_str, &content)
}

/// Parses parameter sets from YAML content, attaching source context to
/// parse failures.
pub fn parse_param_sets(name: &str, content: &str) -> Result<Vec<ParamSet>, HarnessError> {
    serde_yaml::from_str::<Vec<ParamSet>>(content).map_err(|e| HarnessError::ParamParse {
        message: e.to_string(),
        src: NamedSource::new(name, content.to_string()),
        span: location_span(&e, content),
    })
}

/// Loads every parameter set under the given root, in sorted file order.
pub fn load_all_param_sets<P: AsRef<Path>>(root: P) -> Result<Vec<ParamSet>, HarnessError> {
    let mut sets = Vec::new();
    for file in discover_param_files(root)? {
        sets.extend(load_param_sets(&file)?);
    }
    Ok(sets)
}

/// Lenient variant of [`load_all_param_sets`] for use inside selector
/// queries, which have no error channel: unloadable files are reported to
/// stderr and skipped rather than aborting the run silently.
pub fn load_param_sets_or_warn<P: AsRef<Path>>(root: P) -> Vec<ParamSet> {
    let files = match discover_param_files(root) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            return Vec::new();
        }
    };
    let mut sets = Vec::new();
    for file in files {
        match load_param_sets(&file) {
            Ok(loaded) => sets.extend(loaded),
            Err(e) => eprintln!("{:?}", miette::Report::new(e)),
        }
    }
    sets
}

fn location_span(err: &serde_yaml::Error, content: &str) -> SourceSpan {
    match err.location() {
        Some(location) => (location.index().min(content.len()), 0).into(),
        None => (0, 0).into(),
    }
}

fn is_param_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_are_axis_major() {
        let rows = ParamGrid::new()
            .axis([ParamValue::Number(50.0), ParamValue::Number(100.0)])
            .axis([ParamValue::Number(5.0), ParamValue::Number(0.0)])
            .rows();
        let labels: Vec<_> = rows.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["50_5", "50_0", "100_5", "100_0"]);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        assert!(ParamGrid::new().rows().is_empty());
        let with_empty_axis = ParamGrid::new()
            .axis([ParamValue::Number(1.0)])
            .axis([]);
        assert!(with_empty_axis.rows().is_empty());
    }

    #[test]
    fn param_values_parse_untagged_from_yaml() {
        let sets = parse_param_sets(
            "inline",
            r#"
- name: sizes
  params: [50, 100.5, hello, true, ~]
"#,
        )
        .unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name, "sizes");
        assert_eq!(
            sets[0].params,
            vec![
                ParamValue::Number(50.0),
                ParamValue::Number(100.5),
                ParamValue::String("hello".to_string()),
                ParamValue::Bool(true),
                ParamValue::Nil,
            ]
        );
    }

    #[test]
    fn invalid_yaml_yields_parse_error_with_source() {
        let err = parse_param_sets("inline", "- name: [broken").unwrap_err();
        assert!(matches!(err, HarnessError::ParamParse { .. }));
        assert_eq!(err.error_code(), "paracase::params::parse");
    }

    #[test]
    fn display_forms_are_compact() {
        assert_eq!(ParamValue::Number(200.0).to_string(), "200");
        assert_eq!(ParamValue::Number(0.5).to_string(), "0.5");
        assert_eq!(
            ParamValue::List(vec![ParamValue::Number(1.0), ParamValue::Bool(false)]).to_string(),
            "(1 false)"
        );
        let row: ParamRow = vec![ParamValue::Number(50.0), ParamValue::Number(100.0)].into();
        assert_eq!(row.to_string(), "50_100");
    }
}
