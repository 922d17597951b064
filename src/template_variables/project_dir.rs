use std::{
    fmt::Display,
    fs, io,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::absolute_path::AbsolutePathExt;
use crate::error::GenerateError;
use crate::user_parsed_input::UserParsedInput;

/// What a stat of the target directory found.
#[derive(Debug)]
pub enum PathState {
    Free,
    Occupied,
    /// The stat failed for some other reason, e.g. permission denied on the parent.
    Unreadable(io::Error),
}

/// Absolute path of the project root to create.
#[derive(Debug, PartialEq, Clone)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl From<&UserParsedInput> for ProjectDir {
    fn from(user_parsed_input: &UserParsedInput) -> Self {
        let base_path = user_parsed_input.destination();
        Self(Path::new(user_parsed_input.name()).absolute_from(base_path))
    }
}

impl ProjectDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn into_path(self) -> PathBuf {
        self.0
    }

    /// Anything at the path, file, directory or dangling symlink, occupies it.
    pub fn state(&self) -> PathState {
        match fs::symlink_metadata(&self.0) {
            Ok(_) => PathState::Occupied,
            Err(e) if e.kind() == ErrorKind::NotFound => PathState::Free,
            Err(e) => PathState::Unreadable(e),
        }
    }

    /// Creates the root only, its parent has to exist already.
    pub fn create(&self) -> Result<(), GenerateError> {
        fs::create_dir(&self.0).map_err(GenerateError::file_system(&self.0))
    }
}
