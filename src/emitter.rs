use std::fs;
use std::path::Path;

use crate::error::GenerateError;

/// Writes one rendered file below the project root.
pub trait Emit {
    fn emit(&mut self, base: &Path, relative: &str, content: &str) -> Result<(), GenerateError>;
}

/// Writes straight to disk, creating missing parent directories.
#[derive(Debug, Default)]
pub struct FsEmitter;

impl Emit for FsEmitter {
    fn emit(&mut self, base: &Path, relative: &str, content: &str) -> Result<(), GenerateError> {
        let relative = Path::new(relative);
        if let Some(dir) = relative.parent().filter(|d| !d.as_os_str().is_empty()) {
            let dir = base.join(dir);
            fs::create_dir_all(&dir).map_err(GenerateError::file_system(&dir))?;
        }
        let target = base.join(relative);
        fs::write(&target, content).map_err(GenerateError::file_system(&target))
    }
}
