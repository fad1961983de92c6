//! Project initialization service
//!
//! Creates the project directory, writes `package.json`, installs
//! react-native and hands over to its own initializer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::services::ConfirmationGate;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{CommandLine, Manifest, ProjectName};
use crate::infrastructure::traits::{CommandRunner, FileSystem, ModuleResolver, Resolution};

/// How an `init` run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Operator declined to reuse an existing directory.
    Cancelled,
    /// Downstream initializer ran; its exit code decides ours.
    Initialized { root: PathBuf, exit_code: i32 },
}

/// Project initialization service.
pub struct ProjectService {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    resolver: Arc<dyn ModuleResolver>,
    gate: ConfirmationGate,
    settings: Arc<Settings>,
}

impl ProjectService {
    /// Create a new project service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        resolver: Arc<dyn ModuleResolver>,
        gate: ConfirmationGate,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            cmd,
            resolver,
            gate,
            settings,
        }
    }

    /// Initialize project `raw_name` below `cwd`.
    ///
    /// Nothing touches the filesystem before the name is validated and,
    /// for an existing directory, the operator has agreed. `on_start` is
    /// called with the project root right after that. Once the install
    /// starts nothing is rolled back.
    #[instrument(skip(self, on_start))]
    pub fn init<F>(&self, raw_name: &str, cwd: &Path, on_start: F) -> ApplicationResult<InitOutcome>
    where
        F: FnOnce(&Path),
    {
        let name = ProjectName::parse(raw_name)?;
        let root = name.target_dir(cwd);
        let existed = self.fs.exists(&root);
        debug!("init: root={} existed={}", root.display(), existed);

        if existed && !self.gate.confirm_existing(name.as_str())? {
            info!("init: cancelled by operator");
            return Ok(InitOutcome::Cancelled);
        }

        on_start(&root);

        if !existed {
            self.fs
                .create_dir(&root)
                .with_path_context("create project directory", &root)?;
        }

        let manifest = self.write_manifest(&root)?;
        self.install(&root)?;
        let exit_code = self.scaffold(&root, &manifest.name)?;

        Ok(InitOutcome::Initialized { root, exit_code })
    }

    /// Write `package.json` into `root`, overwriting any previous one.
    fn write_manifest(&self, root: &Path) -> ApplicationResult<Manifest> {
        let manifest = Manifest::for_project(root, &self.settings.start_script);
        let path = root.join(&self.settings.manifest_file);
        let json = manifest
            .to_json()
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("serialize manifest: {}", path.display()),
                source: Box::new(e),
            })?;
        self.fs
            .write(&path, &json)
            .with_path_context("write manifest", &path)?;
        debug!("write_manifest: {}", path.display());
        Ok(manifest)
    }

    /// Run the install command inside `root`.
    fn install(&self, root: &Path) -> ApplicationResult<()> {
        let line = CommandLine::parse(&self.settings.install_command)?;
        let command = line.to_string();
        info!("install: {} in {}", command, root.display());

        let status = self
            .cmd
            .run(&line.program, &line.args_ref(), root)
            .map_err(|e| {
                debug!("install: spawn failed: {}", e);
                ApplicationError::InstallFailed {
                    command: command.clone(),
                    exit_code: None,
                }
            })?;

        if !status.success() {
            return Err(ApplicationError::InstallFailed {
                command,
                exit_code: status.code(),
            });
        }
        Ok(())
    }

    /// Hand over to the freshly installed module's initializer.
    fn scaffold(&self, root: &Path, project_name: &str) -> ApplicationResult<i32> {
        match self.resolver.resolve(root) {
            Resolution::Present(module) => {
                debug!("scaffold: using {}", module.entry().display());
                module
                    .init(root, project_name)
                    .with_path_context("run react-native init", module.entry())
            }
            Resolution::Absent => Err(ApplicationError::DelegateUnavailable(root.to_path_buf())),
        }
    }
}
