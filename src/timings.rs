use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::i18n::I18n;
use crate::storage::TimingRecord;

/// Append-only timings file, one line per timed command.
pub struct TimingLog {
    path: PathBuf,
}

impl TimingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens and closes the file so path or permission problems surface
    /// before the command runs.
    pub fn check_access(&self, i18n: &I18n) -> Result<()> {
        let file = self.open(i18n)?;
        drop(file);
        log::debug!("timings file {} is writable", self.path.display());
        Ok(())
    }

    pub fn append(&self, record: &TimingRecord, i18n: &I18n) -> Result<()> {
        let mut file = self.open(i18n)?;
        file.write_all(record.to_line().as_bytes())
            .with_context(|| i18n.t_format("error_write_timing", &[&self.path.display().to_string()]))?;
        Ok(())
    }

    fn open(&self, i18n: &I18n) -> Result<File> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        options
            .open(&self.path)
            .with_context(|| i18n.t_format("error_open_times_file", &[&self.path.display().to_string()]))
    }
}
