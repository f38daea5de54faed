use crate::utils::error::Result;
use std::path::Path;

/// Where trace text is loaded from. The whole file is read up front.
pub trait TraceSource {
    fn read_text(&self, path: &Path) -> Result<String>;
}
