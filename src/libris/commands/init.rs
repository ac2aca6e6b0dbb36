use crate::commands::{CmdMessage, CmdResult, LibraryPaths};
use crate::error::Result;
use std::fs;

/// Create the data directory. The store files themselves appear lazily:
/// each one is written, header first, on its first append.
pub fn run(paths: &LibraryPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized library store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
