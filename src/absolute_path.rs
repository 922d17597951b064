use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

pub trait AbsolutePathExt {
    /// Join onto `base` when relative and fold `.`/`..` away without touching the file system.
    fn absolute_from(&self, base: &Path) -> PathBuf;

    /// Same as [`absolute_from`](Self::absolute_from) with the current directory as base.
    fn as_absolute(&self) -> io::Result<PathBuf> {
        Ok(self.absolute_from(&env::current_dir()?))
    }
}

impl AbsolutePathExt for Path {
    fn absolute_from(&self, base: &Path) -> PathBuf {
        let joined = if self.is_absolute() {
            self.to_path_buf()
        } else {
            base.join(self)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }
}
