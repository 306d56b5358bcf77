//! Error types for template loading and saving.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a template definition.
///
/// Rendering itself never errors: resolution misses are silent omission
/// by design, so the only failure surface is the filesystem boundary.
#[derive(Debug, Error)]
pub enum TemplateError {
    // IO errors (exit code 3)
    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl TemplateError {
    /// Returns the process exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TemplateError::ReadError { .. } | TemplateError::WriteError { .. } => 3,
            TemplateError::InvalidJson { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let err = TemplateError::ReadError {
            path: PathBuf::from("template.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 3);

        let err = TemplateError::InvalidJson {
            source: serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn display_includes_path() {
        let err = TemplateError::WriteError {
            path: PathBuf::from("/out/template.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir"),
        };
        assert!(err.to_string().contains("/out/template.json"));
    }
}
