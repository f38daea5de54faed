pub mod checker;
pub mod engine;
pub mod lines;
pub mod patterns;

pub use crate::domain::model::{CheckSummary, Opcode, OperationRecord, ResultRecord};
pub use crate::domain::ports::TraceSource;
pub use crate::utils::error::Result;
