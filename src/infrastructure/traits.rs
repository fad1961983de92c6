//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use crate::domain::is_yes_no;
use crate::exitcode;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory (parent must exist).
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Write string content to file, replacing any previous content.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// External command runner abstraction.
///
/// Children inherit stdin/stdout/stderr; nothing is captured.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments in `cwd` and wait for it.
    fn run(&self, cmd: &str, args: &[&str], cwd: &Path) -> io::Result<ExitStatus>;
}

/// Interactive question/answer abstraction.
pub trait Prompter: Send + Sync {
    /// Ask `message` and return an answer accepted as yes/no.
    /// An empty answer or end of input yields `default`.
    fn ask_yes_no(&self, message: &str, default: &str) -> io::Result<String>;
}

/// Handle to the full command module installed in a project.
pub trait DelegatedModule: Send + Sync {
    /// Location the module was resolved from.
    fn entry(&self) -> &Path;

    /// Hand the whole command surface over; returns the exit code.
    fn run(&self, args: &[String], cwd: &Path) -> io::Result<i32>;

    /// Scaffold a freshly installed project; returns the exit code.
    fn init(&self, root: &Path, project_name: &str) -> io::Result<i32>;
}

/// Outcome of looking up the delegated module.
pub enum Resolution {
    Present(Box<dyn DelegatedModule>),
    Absent,
}

impl Resolution {
    pub fn is_present(&self) -> bool {
        matches!(self, Resolution::Present(_))
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Present(m) => f.debug_tuple("Present").field(&m.entry()).finish(),
            Resolution::Absent => f.write_str("Absent"),
        }
    }
}

/// Lookup of the delegated module below a base directory.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, base: &Path) -> Resolution;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str], cwd: &Path) -> io::Result<ExitStatus> {
        debug!("run: {} {:?} in {}", cmd, args, cwd.display());
        std::process::Command::new(cmd)
            .args(args)
            .current_dir(cwd)
            .status()
    }
}

/// Real prompter reading answers line by line from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    /// Prompt on `out` and read answers from `input` until one is yes/no.
    pub fn ask_from(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
        message: &str,
        default: &str,
    ) -> io::Result<String> {
        loop {
            write!(out, "{} {} ", message.cyan(), format!("({default})").dimmed())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(default.to_string());
            }
            let answer = line.trim();
            if answer.is_empty() {
                return Ok(default.to_string());
            }
            if is_yes_no(answer) {
                return Ok(answer.to_string());
            }
            writeln!(out, "{}: Must respond yes or no", "Warning".yellow())?;
        }
    }
}

impl Prompter for StdinPrompter {
    fn ask_yes_no(&self, message: &str, default: &str) -> io::Result<String> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.ask_from(&mut stdin.lock(), &mut stdout.lock(), message, default)
    }
}

const RUN_SCRIPT: &str = "require(process.argv[1]).run()";
const INIT_SCRIPT: &str = "require(process.argv[1]).init(process.argv[2], process.argv[3])";

/// Resolves the react-native cli module from a project's `node_modules`.
pub struct NodeModuleResolver {
    node: String,
    module_path: PathBuf,
    cmd: Arc<dyn CommandRunner>,
}

impl NodeModuleResolver {
    pub fn new(
        node: impl Into<String>,
        module_path: impl Into<PathBuf>,
        cmd: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            node: node.into(),
            module_path: module_path.into(),
            cmd,
        }
    }

    /// Candidate entry files for `base`, in resolution order.
    pub fn candidates(&self, base: &Path) -> Vec<PathBuf> {
        let module = base.join(&self.module_path);
        let mut file = module.clone().into_os_string();
        file.push(".js");
        vec![PathBuf::from(file), module.join("index.js")]
    }
}

impl ModuleResolver for NodeModuleResolver {
    fn resolve(&self, base: &Path) -> Resolution {
        match self.candidates(base).into_iter().find(|p| p.is_file()) {
            Some(entry) => {
                debug!("resolve: found {}", entry.display());
                Resolution::Present(Box::new(NodeModule {
                    node: self.node.clone(),
                    entry,
                    cmd: Arc::clone(&self.cmd),
                }))
            }
            None => {
                debug!("resolve: no cli module below {}", base.display());
                Resolution::Absent
            }
        }
    }
}

/// The react-native cli module, driven through `node -e`.
pub struct NodeModule {
    node: String,
    entry: PathBuf,
    cmd: Arc<dyn CommandRunner>,
}

impl NodeModule {
    fn exec(&self, script: &str, extra: &[&str], cwd: &Path) -> io::Result<i32> {
        let entry = self.entry.to_string_lossy();
        let mut args = vec!["-e", script, "--", entry.as_ref()];
        args.extend_from_slice(extra);
        let status = self.cmd.run(&self.node, &args, cwd)?;
        Ok(status.code().unwrap_or(exitcode::FAILURE))
    }
}

impl DelegatedModule for NodeModule {
    fn entry(&self) -> &Path {
        &self.entry
    }

    fn run(&self, args: &[String], cwd: &Path) -> io::Result<i32> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.exec(RUN_SCRIPT, &args, cwd)
    }

    fn init(&self, root: &Path, project_name: &str) -> io::Result<i32> {
        let root_str = root.to_string_lossy();
        self.exec(INIT_SCRIPT, &[root_str.as_ref(), project_name], root)
    }
}
