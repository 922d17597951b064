//! Input from user but after parse

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::args::NewArgs;

// Contains parsed information from user.
#[derive(Debug)]
pub struct UserParsedInput {
    name: String,

    // the current directory, the project is created in it
    destination: PathBuf,
}

impl UserParsedInput {
    pub fn try_from_args(args: &NewArgs) -> Result<Self> {
        let destination = env::current_dir().context("cannot read the current directory")?;
        Ok(Self {
            name: args.name.clone(),
            destination,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn destination(&self) -> &Path {
        self.destination.as_path()
    }
}
