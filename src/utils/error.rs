use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{program} expected 1 argument, {given} given")]
    ArgumentCount { program: String, given: usize },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Expected an even number of lines in {}", .path.display())]
    OddLineCount { path: PathBuf },

    #[error("'{line}' did not match the operation regex")]
    OperationMismatch { line: String },

    #[error("'{line}' did not match the result regex")]
    ResultMismatch { line: String },

    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Io,
    Structural,
    Content,
    Internal,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::ArgumentCount { .. } => ErrorCategory::Usage,
            CheckError::Read { .. } => ErrorCategory::Io,
            CheckError::OddLineCount { .. } => ErrorCategory::Structural,
            CheckError::OperationMismatch { .. } | CheckError::ResultMismatch { .. } => {
                ErrorCategory::Content
            }
            CheckError::Pattern(_) => ErrorCategory::Internal,
        }
    }

    /// Every failure is fatal and reported with the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CheckError::ArgumentCount {
            program: "fp-ops-check".to_string(),
            given: 2,
        };
        assert_eq!(err.to_string(), "fp-ops-check expected 1 argument, 2 given");

        let err = CheckError::OddLineCount {
            path: PathBuf::from("out/trace.txt"),
        };
        assert_eq!(
            err.to_string(),
            "Expected an even number of lines in out/trace.txt"
        );

        let err = CheckError::OperationMismatch {
            line: "XORSS deadbeef 0000002a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'XORSS deadbeef 0000002a' did not match the operation regex"
        );

        let err = CheckError::ResultMismatch {
            line: " 7".to_string(),
        };
        assert_eq!(err.to_string(), "' 7' did not match the result regex");
    }

    #[test]
    fn test_categories() {
        let err = CheckError::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 1);

        let err = CheckError::ResultMismatch {
            line: String::new(),
        };
        assert_eq!(err.category(), ErrorCategory::Content);
    }
}
