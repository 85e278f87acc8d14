use std::fmt;

use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

use crate::schema::FieldPath;

/// A single failed constraint, located by its path inside the checked document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found while checking one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub entity: &'static str,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(entity: &'static str, violations: Vec<Violation>) -> Self {
        Self { entity, violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations whose path is exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.at(path).next().is_some()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} validation failed: {}", self.entity, messages)
    }
}

/// Flattens derive-level errors of a single record into violations under `prefix`.
///
/// Field names come from the Rust struct and are rewritten to the camelCase keys
/// used by content documents. The output is sorted so repeated runs agree.
pub fn flatten_field_errors(prefix: &FieldPath, errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations: Vec<Violation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            let path = prefix.field(&camel_case(&field.to_string()));
            errors.iter().map(move |e| {
                Violation::new(
                    path.to_string(),
                    e.message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                )
            })
        })
        .collect();

    violations.sort();
    violations
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Display)]
pub enum ContentError {
    #[display("{_0}")]
    Validation(ValidationReport),

    #[display("Content not found: {_0}")]
    NotFound(String),

    #[display("IO error: {_0}")]
    Io(String),

    #[display("Malformed content: {_0}")]
    Parse(String),

    #[display("Deferred renderer unavailable: {_0}")]
    Acquisition(String),

    #[display("Render failed: {_0}")]
    Render(String),

    #[display("Configuration error: {_0}")]
    Config(String),
}

impl std::error::Error for ContentError {}

impl From<ValidationReport> for ContentError {
    fn from(report: ValidationReport) -> Self {
        ContentError::Validation(report)
    }
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ContentError::NotFound(err.to_string()),
            _ => ContentError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for ContentError {
    fn from(err: config::ConfigError) -> Self {
        ContentError::Config(err.to_string())
    }
}
