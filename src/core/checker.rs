use crate::core::patterns::LinePatterns;
use crate::domain::model::CheckSummary;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::validate_even_line_count;
use std::path::Path;

/// Walks a line sequence two lines at a time and stops at the first mismatch.
pub struct PairChecker<'a> {
    patterns: &'a LinePatterns,
}

impl<'a> PairChecker<'a> {
    pub fn new(patterns: &'a LinePatterns) -> Self {
        Self { patterns }
    }

    /// `path` is only used to name the file in the odd-line-count error.
    pub fn check(&self, path: &Path, lines: &[&str]) -> Result<CheckSummary> {
        validate_even_line_count(path, lines.len())?;

        let mut summary = CheckSummary::default();
        for (index, pair) in lines.chunks_exact(2).enumerate() {
            let (op_line, result_line) = (pair[0], pair[1]);

            let operation = self.patterns.match_operation(op_line).ok_or_else(|| {
                CheckError::OperationMismatch {
                    line: op_line.to_string(),
                }
            })?;
            let result = self.patterns.match_result(result_line).ok_or_else(|| {
                CheckError::ResultMismatch {
                    line: result_line.to_string(),
                }
            })?;

            match result.value_f32() {
                Some(value) => tracing::debug!(
                    "pair {}: {} {} {} -> {}",
                    index,
                    operation.opcode,
                    operation.lhs_f32(),
                    operation.rhs_f32(),
                    value
                ),
                None => tracing::debug!(
                    "pair {}: {} {:08x} {:08x} -> {}",
                    index,
                    operation.opcode,
                    operation.lhs,
                    operation.rhs,
                    result.digits
                ),
            }

            summary.record(operation.opcode);
        }

        Ok(summary)
    }
}
