use crate::domain::model::{OperationRecord, ResultRecord};
use crate::utils::error::Result;
use regex::Regex;

// Both patterns are anchored at the start only: anything after the matched
// prefix is accepted.
const OPERATION_PATTERN: &str = r"^(ADDSS|SUBSS|MULSS|DIVSS) ([0-9a-f]{8}) ([0-9a-f]{8})";
const RESULT_PATTERN: &str = r"^  ([0-9a-f]+)";

/// The two line patterns of a trace, compiled once per run.
#[derive(Debug, Clone)]
pub struct LinePatterns {
    operation: Regex,
    result: Regex,
}

impl LinePatterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            operation: Regex::new(OPERATION_PATTERN)?,
            result: Regex::new(RESULT_PATTERN)?,
        })
    }

    pub fn match_operation(&self, line: &str) -> Option<OperationRecord> {
        let caps = self.operation.captures(line)?;
        Some(OperationRecord {
            opcode: caps[1].parse().ok()?,
            lhs: u32::from_str_radix(&caps[2], 16).ok()?,
            rhs: u32::from_str_radix(&caps[3], 16).ok()?,
        })
    }

    pub fn match_result(&self, line: &str) -> Option<ResultRecord> {
        let caps = self.result.captures(line)?;
        Some(ResultRecord {
            digits: caps[1].to_string(),
        })
    }
}
