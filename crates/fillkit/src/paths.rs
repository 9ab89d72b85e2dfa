//! Output path construction helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::check::TemplateKind;

/// Join an output directory, bare file name, and template extension into
/// the full destination path.
pub fn output_path(dir: &Path, name: &str, kind: TemplateKind) -> PathBuf {
    dir.join(format!("{}.{}", name, kind.extension()))
}

/// Create a timestamped output directory `<prefix>_<yyyymmddHHMMSS>` under
/// `parent` and return its path.
pub fn create_output_dir(prefix: &str, parent: impl AsRef<Path>) -> io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let dir = parent.as_ref().join(format!("{}_{}", prefix, timestamp));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
