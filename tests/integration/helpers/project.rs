use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.path().join(path);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("cannot read file {path:?}"))
            .replace("\r\n", "\n")
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }

    /// All files below `path`, relative to it, sorted and with `/` separators.
    pub fn files(&self, path: &str) -> Vec<String> {
        let root = self.path().join(path);
        let mut found = Vec::new();
        let mut dirs: Vec<PathBuf> = vec![root.clone()];
        while let Some(dir) = dirs.pop() {
            for entry in fs::read_dir(&dir).unwrap_or_else(|_| panic!("cannot list {dir:?}")) {
                let entry_path = entry.unwrap().path();
                if entry_path.is_dir() {
                    dirs.push(entry_path);
                } else {
                    let relative = entry_path.strip_prefix(&root).unwrap();
                    found.push(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        found.sort();
        found
    }
}
