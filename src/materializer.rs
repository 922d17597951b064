use std::path::PathBuf;

use crate::emitter::Emit;
use crate::error::GenerateError;
use crate::progressbar;
use crate::project_properties::ProjectProperties;
use crate::template::Render;
use crate::template_variables::{PathState, ProjectDir};

/// Files of every new project, emitted in this order.
pub const MANIFEST: [&str; 7] = [
    "package.json",
    ".gitignore",
    "README.md",
    "lib/index.js",
    "native/build.rs",
    "native/Cargo.toml",
    "native/src/lib.rs",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Root directory and the whole manifest were written.
    Created(PathBuf),
    /// Something already exists at the target, nothing was touched.
    Rejected(PathBuf),
}

/// Creates the project root and writes the manifest into it.
///
/// There is no rollback: when rendering or writing file *k* fails, the root
/// and the files before *k* stay on disk and the error is returned.
pub struct Materializer<R, E> {
    renderer: R,
    emitter: E,
}

impl<R: Render, E: Emit> Materializer<R, E> {
    pub fn new(renderer: R, emitter: E) -> Self {
        Self { renderer, emitter }
    }

    pub fn materialize(&mut self, props: &ProjectProperties) -> Result<Outcome, GenerateError> {
        let destination = ProjectDir::new(&props.full_project_path);
        match destination.state() {
            PathState::Free => {}
            PathState::Occupied => return Ok(Outcome::Rejected(destination.into_path())),
            PathState::Unreadable(source) => {
                return Err(GenerateError::PathCheck {
                    path: destination.into_path(),
                    source,
                })
            }
        }

        destination.create()?;

        let pb = progressbar::new(MANIFEST.len());
        let total = MANIFEST.len().to_string();
        for (progress, filename) in MANIFEST.iter().enumerate() {
            pb.set_prefix(format!(
                "[{:width$}/{}]",
                progress + 1,
                total,
                width = total.len()
            ));
            pb.set_message(format!("Processing: {filename}"));
            let content = self.renderer.render(filename, props)?;
            self.emitter.emit(destination.as_ref(), filename, &content)?;
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(Outcome::Created(destination.into_path()))
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, E) {
        (self.renderer, self.emitter)
    }
}
