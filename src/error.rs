use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a project generation.
///
/// An already existing target is not one of them, see
/// [`Outcome::Rejected`](crate::materializer::Outcome::Rejected).
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to read the answer for `{question}`")]
    Prompt {
        question: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot inspect `{}`", path.display())]
    PathCheck {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write `{}`", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no template for `{key}`")]
    TemplateNotFound { key: String },
    #[error("template `{key}` failed to render")]
    Template {
        key: String,
        #[source]
        source: liquid_core::Error,
    },
}

impl GenerateError {
    pub(crate) fn file_system(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileSystem { path, source }
    }

    pub(crate) fn template(key: &str) -> impl FnOnce(liquid_core::Error) -> Self {
        let key = key.to_string();
        move |source| Self::Template { key, source }
    }
}
