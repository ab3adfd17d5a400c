use std::path::PathBuf;

use maillist_transform::NormalizeReport;

#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    /// Where the extract landed; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Final column order of the extract.
    pub columns: Vec<String>,
    pub report: NormalizeReport,
}
