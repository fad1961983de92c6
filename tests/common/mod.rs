//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

use rnboot::config::Settings;
use rnboot::infrastructure::di::ServiceContainer;
use rnboot::infrastructure::traits::{
    CommandRunner, NodeModuleResolver, Prompter, RealFileSystem,
};

/// Build an `ExitStatus` carrying `code`.
pub fn exit_status(code: i32) -> ExitStatus {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }
}

/// One recorded child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Whether `package.json` existed in `cwd` when the child started
    pub manifest_present: bool,
}

/// Command runner that pretends to be npm and node.
///
/// A successful `npm` run drops `node_modules/react-native/cli.js` into its
/// working directory, like a real install would. Unknown programs fail to spawn.
pub struct FakeRunner {
    pub install_exit: i32,
    pub install_creates_module: bool,
    pub node_exit: i32,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            install_exit: 0,
            install_creates_module: true,
            node_exit: 0,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, cmd: &str, args: &[&str], cwd: &Path) -> io::Result<ExitStatus> {
        self.calls.lock().unwrap().push(Call {
            program: cmd.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
            manifest_present: cwd.join("package.json").is_file(),
        });
        match cmd {
            "npm" => {
                if self.install_exit == 0 && self.install_creates_module {
                    install_cli_module(cwd);
                }
                Ok(exit_status(self.install_exit))
            }
            "node" => Ok(exit_status(self.node_exit)),
            other => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{other}: not found"),
            )),
        }
    }
}

/// Prompter answering every question the same way.
pub struct ScriptedPrompter {
    pub answer: String,
    pub questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_yes_no(&self, message: &str, _default: &str) -> io::Result<String> {
        self.questions.lock().unwrap().push(message.to_string());
        Ok(self.answer.clone())
    }
}

/// Place a react-native cli entry point below `base`.
pub fn install_cli_module(base: &Path) -> PathBuf {
    let dir = base.join("node_modules/react-native");
    std::fs::create_dir_all(&dir).expect("create node_modules");
    let entry = dir.join("cli.js");
    std::fs::write(&entry, "module.exports = {};\n").expect("write cli.js");
    entry
}

/// Container using the real filesystem and node module lookup, fake processes.
pub fn container(
    settings: Settings,
    runner: Arc<FakeRunner>,
    prompter: Arc<ScriptedPrompter>,
) -> ServiceContainer {
    let resolver = Arc::new(NodeModuleResolver::new(
        settings.node.clone(),
        settings.module_path.clone(),
        runner.clone(),
    ));
    ServiceContainer::with_deps(
        settings,
        Arc::new(RealFileSystem),
        runner,
        prompter,
        resolver,
    )
}

pub fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Names of the entries directly inside `dir`, sorted.
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
