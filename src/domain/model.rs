use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scalar single-precision SSE instructions that appear in a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
}

impl Opcode {
    pub const ALL: [Opcode; 4] = [Opcode::Add, Opcode::Sub, Opcode::Mul, Opcode::Div];

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADDSS",
            Opcode::Sub => "SUBSS",
            Opcode::Mul => "MULSS",
            Opcode::Div => "DIVSS",
        }
    }

    fn index(self) -> usize {
        match self {
            Opcode::Add => 0,
            Opcode::Sub => 1,
            Opcode::Mul => 2,
            Opcode::Div => 3,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown opcode: {0}")]
pub struct UnknownOpcode(pub String);

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| UnknownOpcode(s.to_string()))
    }
}

/// A decoded operation line: the instruction and its two operand bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRecord {
    pub opcode: Opcode,
    pub lhs: u32,
    pub rhs: u32,
}

impl OperationRecord {
    pub fn lhs_f32(&self) -> f32 {
        f32::from_bits(self.lhs)
    }

    pub fn rhs_f32(&self) -> f32 {
        f32::from_bits(self.rhs)
    }
}

/// A decoded result line. Only the leading digit is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub digits: String,
}

impl ResultRecord {
    /// Bit pattern of the result, when the full 8-digit encoding is present.
    pub fn bits(&self) -> Option<u32> {
        if self.digits.len() != 8 {
            return None;
        }
        u32::from_str_radix(&self.digits, 16).ok()
    }

    pub fn value_f32(&self) -> Option<f32> {
        self.bits().map(f32::from_bits)
    }
}

/// Outcome of a successful check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    counts: [usize; 4],
}

impl CheckSummary {
    pub fn record(&mut self, opcode: Opcode) {
        self.counts[opcode.index()] += 1;
    }

    pub fn count(&self, opcode: Opcode) -> usize {
        self.counts[opcode.index()]
    }

    pub fn pairs(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn lines(&self) -> usize {
        self.pairs() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.pairs() == 0
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pairs", self.pairs())?;
        for op in Opcode::ALL {
            write!(f, ", {}: {}", op, self.count(op))?;
        }
        Ok(())
    }
}
