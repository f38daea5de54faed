use crate::core::checker::PairChecker;
use crate::core::lines::split_lines;
use crate::core::patterns::LinePatterns;
use crate::domain::model::CheckSummary;
use crate::domain::ports::TraceSource;
use crate::utils::error::Result;
use std::path::Path;

pub struct CheckEngine<S: TraceSource> {
    source: S,
    patterns: LinePatterns,
}

impl<S: TraceSource> CheckEngine<S> {
    pub fn new(source: S) -> Result<Self> {
        Ok(Self {
            source,
            patterns: LinePatterns::compile()?,
        })
    }

    /// Reads the trace at `path` and checks every operation/result pair.
    pub fn run(&self, path: &Path) -> Result<CheckSummary> {
        tracing::debug!("Reading trace from {}", path.display());
        let text = self.source.read_text(path)?;

        let lines = split_lines(&text);
        tracing::debug!("Read {} lines", lines.len());

        let summary = PairChecker::new(&self.patterns).check(path, &lines)?;
        tracing::info!("{}: {} lines checked, {}", path.display(), summary.lines(), summary);

        Ok(summary)
    }
}
