//! Unified diagnostic type for all harness failure modes.
//!
//! Every fallible library API returns [`HarnessError`]. Each variant carries a
//! stable error code so callers (and CLI regression tests) can match on the
//! code instead of on message text.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Unified error type for the paracase harness.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// A parameter file could not be read from disk.
    #[error("Failed to read parameter file '{path}': {source}")]
    #[diagnostic(
        code(paracase::params::io),
        help("check that the path exists and is readable")
    )]
    ParamIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A parameter file was read but is not valid parameter YAML.
    #[error("Invalid parameter file: {message}")]
    #[diagnostic(
        code(paracase::params::parse),
        help("parameter files hold a YAML list of {{ name, params }} entries")
    )]
    ParamParse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid parameter syntax here")]
        span: SourceSpan,
    },

    /// Walking the parameter directory failed.
    #[error("Failed to walk parameter directory: {message}")]
    #[diagnostic(code(paracase::params::walk))]
    ParamWalk { message: String },

    /// A case name was registered twice in the same registry.
    #[error("Case '{name}' is already registered")]
    #[diagnostic(
        code(paracase::registry::duplicate),
        help("case names must be unique within a registry")
    )]
    DuplicateCase { name: String },

    /// A case name was looked up but never registered.
    #[error("Unknown case '{name}'")]
    #[diagnostic(code(paracase::registry::unknown))]
    UnknownCase { name: String },
}

impl HarnessError {
    /// Returns the stable error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            HarnessError::ParamIo { .. } => "paracase::params::io",
            HarnessError::ParamParse { .. } => "paracase::params::parse",
            HarnessError::ParamWalk { .. } => "paracase::params::walk",
            HarnessError::DuplicateCase { .. } => "paracase::registry::duplicate",
            HarnessError::UnknownCase { .. } => "paracase::registry::unknown",
        }
    }
}
