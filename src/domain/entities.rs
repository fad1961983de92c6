//! Domain entities: core data structures

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::domain::DomainError;

/// Identifier pattern a project name must match (JS identifier, ASCII only).
pub const PROJECT_NAME_PATTERN: &str = r"^[$A-Za-z_][0-9A-Za-z_$]*$";

/// Version every freshly initialized project starts at.
pub const INITIAL_VERSION: &str = "0.0.1";

/// Validated project name, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a candidate name against [`PROJECT_NAME_PATTERN`].
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if matches_pattern(PROJECT_NAME_PATTERN, raw)? {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::InvalidProjectName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute target directory for this project below `cwd`.
    pub fn target_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn matches_pattern(pattern: &str, raw: &str) -> Result<bool, DomainError> {
    let re = Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(re.is_match(raw))
}

/// The `package.json` written into a new project.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: BTreeMap<String, String>,
}

impl Manifest {
    /// Build the manifest for a project rooted at `root`.
    ///
    /// The name is the basename of `root`, not the raw argument.
    pub fn for_project(root: &Path, start_script: &str) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut scripts = BTreeMap::new();
        scripts.insert("start".to_string(), start_script.to_string());
        Self {
            name,
            version: INITIAL_VERSION.to_string(),
            private: true,
            scripts,
        }
    }

    /// Compact JSON, written in one go.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A command line split on whitespace into program and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(DomainError::EmptyCommandLine)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn args_ref(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Whether a prompt answer is an acceptable yes/no response.
///
/// First character `y` or `n` (any case), anything may follow.
pub fn is_yes_no(answer: &str) -> bool {
    matches!(
        answer.trim().chars().next().map(|c| c.to_ascii_lowercase()),
        Some('y') | Some('n')
    )
}

/// Whether an accepted answer means yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~`. Uses shellexpand.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
