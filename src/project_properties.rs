//! Everything the templates get to see about the project being generated.

use std::path::PathBuf;

use regex::Regex;
use serde::Serialize;

pub const NEON_CLI_VERSION: &str = "^0.4.0";
pub const NEON_BUILD_VERSION: &str = "0.4.0";

/// Answers collected from the user, one per question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answers {
    pub version: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub license: String,
}

/// Rendered into every template as `project`, field names in camelCase
/// (`{{ project.neonCliVersion }}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProperties {
    pub full_project_path: PathBuf,
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub neon_cli_version: String,
    pub neon_build_version: String,
}

impl ProjectProperties {
    pub fn new(full_project_path: PathBuf, name: impl Into<String>, answers: Answers) -> Self {
        let Answers {
            version,
            description,
            author,
            email,
            license,
        } = answers;

        Self {
            full_project_path,
            name: name.into(),
            version,
            description,
            author: format!("{author} <{email}>"),
            license,
            neon_cli_version: NEON_CLI_VERSION.to_string(),
            neon_build_version: NEON_BUILD_VERSION.to_string(),
        }
    }

    /// Things npm or cargo will complain about later. Generation goes on regardless.
    pub fn convention_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if semver::Version::parse(&self.version).is_err() {
            warnings.push(format!("version `{}` is not a valid semver version", self.version));
        }
        if !is_npm_package_name(&self.name) {
            warnings.push(format!("`{}` is not a valid npm package name", self.name));
        }
        warnings
    }
}

fn is_npm_package_name(name: &str) -> bool {
    let valid = Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .map(|re| re.is_match(name))
        .unwrap_or(true);
    valid && name.len() <= 214
}
