mod project_dir;

pub use project_dir::{PathState, ProjectDir};
