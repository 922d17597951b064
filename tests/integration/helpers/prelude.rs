pub use crate::helpers::arg_builder::BinaryArgs;
pub use crate::helpers::project_builder::tempdir;
pub use crate::helpers::{binary, manifest, DEFAULT_ANSWERS};
pub use indoc::indoc;
pub use predicates::prelude::*;
