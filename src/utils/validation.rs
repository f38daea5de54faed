use crate::utils::error::{CheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Fails unless exactly `expected` positional arguments were supplied.
pub fn validate_argument_count(program: &str, given: usize, expected: usize) -> Result<()> {
    if given != expected {
        return Err(CheckError::ArgumentCount {
            program: program.to_string(),
            given,
        });
    }
    Ok(())
}

pub fn validate_even_line_count(path: &std::path::Path, lines: usize) -> Result<()> {
    if lines % 2 != 0 {
        return Err(CheckError::OddLineCount {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_validate_argument_count() {
        assert!(validate_argument_count("fp-ops-check", 1, 1).is_ok());
        assert!(validate_argument_count("fp-ops-check", 0, 1).is_err());

        match validate_argument_count("fp-ops-check", 3, 1) {
            Err(CheckError::ArgumentCount { program, given }) => {
                assert_eq!(program, "fp-ops-check");
                assert_eq!(given, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_even_line_count() {
        let path = Path::new("trace.txt");
        assert!(validate_even_line_count(path, 0).is_ok());
        assert!(validate_even_line_count(path, 4).is_ok());
        assert!(matches!(
            validate_even_line_count(path, 3),
            Err(CheckError::OddLineCount { .. })
        ));
    }
}
