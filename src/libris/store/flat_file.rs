use crate::error::{LibrisError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// One delimited flat file with a fixed header line.
///
/// This is the persistence primitive under [`super::fs::FileStore`]: append
/// a row, read every row, or rewrite a single field of the first matching
/// row. Fields are joined with bare commas; values containing the delimiter
/// corrupt the row on the next read.
pub struct FlatFile {
    path: PathBuf,
    header: String,
}

impl FlatFile {
    pub fn new(path: PathBuf, header: &str) -> Self {
        Self {
            path,
            header: header.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header first when the file is missing or
    /// empty. The handle is opened and closed within this call.
    pub fn append(&self, fields: &[String]) -> Result<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(LibrisError::Io)?;
        if needs_header {
            writeln!(file, "{}", self.header).map_err(LibrisError::Io)?;
        }
        writeln!(file, "{}", fields.join(",")).map_err(LibrisError::Io)?;
        Ok(())
    }

    /// Every data row in file order, split on commas, header skipped.
    /// A missing file reads as no rows; any other open failure is an error.
    pub fn rows(&self) -> Result<Vec<Vec<String>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LibrisError::Io(e)),
        };

        Ok(content
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect())
    }

    /// Replace `target_col` of the first row whose `match_col` equals
    /// `match_value` (exact, trimmed), then write header and all rows back
    /// out, overwriting the file. Returns whether a row was updated.
    ///
    /// Only the first match is touched even when several rows share the
    /// match value.
    pub fn rewrite_field(
        &self,
        match_col: usize,
        match_value: &str,
        target_col: usize,
        new_value: &str,
    ) -> Result<bool> {
        let mut rows = self.rows()?;

        let mut updated = false;
        for row in rows.iter_mut() {
            if row.get(match_col).map(|f| f.trim()) == Some(match_value.trim()) {
                if let Some(field) = row.get_mut(target_col) {
                    *field = new_value.to_string();
                    updated = true;
                }
                break;
            }
        }

        if updated {
            let mut out = String::new();
            out.push_str(&self.header);
            out.push('\n');
            for row in &rows {
                out.push_str(&row.join(","));
                out.push('\n');
            }
            fs::write(&self.path, out).map_err(LibrisError::Io)?;
        }

        Ok(updated)
    }
}
