use std::fs;
use std::io::Write;

use crate::helpers::project::Project;
use tempfile::TempDir;

pub struct ProjectBuilder {
    files: Vec<(String, String)>,
    root: TempDir,
}

pub fn tempdir() -> ProjectBuilder {
    ProjectBuilder {
        files: Vec::new(),
        root: tempfile::Builder::new()
            .prefix("neon-new")
            .tempdir()
            .unwrap(),
    }
}

impl ProjectBuilder {
    pub fn file(mut self, name: &str, contents: impl AsRef<str>) -> Self {
        self.files.retain(|(f, _)| f != name);
        self.files
            .push((name.to_string(), contents.as_ref().to_string()));
        self
    }

    pub fn build(self) -> Project {
        let path = self.root.path();

        for (file, contents) in self.files.iter() {
            let path = path.join(file);
            let parent = path
                .parent()
                .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

            fs::File::create(&path)
                .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
                .write_all(contents.as_ref())
                .unwrap_or_else(|_| panic!("couldn't write to file {path:?}: {contents:?}"));
        }

        Project { root: self.root }
    }
}
