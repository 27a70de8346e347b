//! The error taxonomy (spec.md §7): an IO error, a parse error, and an
//! internal invariant violation. The core never surfaces a user-facing
//! error for anything it doesn't understand — unsupported constructs
//! evaluate to `Unknown` and are reported via `eprintln!`, not an `Err`
//! (spec.md §7 item 3) — so `InternalError` covers only genuine
//! programming-bug conditions (a broken scope-stack invariant), and
//! `AnalysisError` is what the driver actually matches on to pick an
//! exit code and a message.
//!
//! Generalizes the teacher's `thiserror`-derived `EvalError` (rich
//! variants with `#[error("...")]` messages and helper constructors)
//! from an interpreter's runtime-error taxonomy to this driver-facing
//! one.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InternalError {
    #[error("scope stack was empty when a frame was expected")]
    EmptyScopeStack,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("analysis failed")]
    Internal(#[from] InternalError),
}

impl AnalysisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        AnalysisError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_message_is_generic() {
        let err: AnalysisError = InternalError::EmptyScopeStack.into();
        assert_eq!(err.to_string(), "analysis failed");
    }

    #[test]
    fn parse_error_carries_line_and_message() {
        let err = AnalysisError::parse(12, "unexpected indent");
        assert_eq!(err.to_string(), "parse error at line 12: unexpected indent");
    }

    #[test]
    fn io_error_carries_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = AnalysisError::io("missing.txt", source);
        assert!(err.to_string().contains("missing.txt"));
    }
}
