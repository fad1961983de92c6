//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ConfirmationGate, ProjectService};
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, FileSystem, ModuleResolver, NodeModuleResolver, Prompter, RealCommandRunner,
    RealFileSystem, StdinPrompter,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Operator prompt abstraction
    pub prompter: Arc<dyn Prompter>,

    /// Delegated module lookup
    pub resolver: Arc<dyn ModuleResolver>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let cmd: Arc<dyn CommandRunner> = Arc::new(RealCommandRunner);
        let resolver = Arc::new(NodeModuleResolver::new(
            settings.node.clone(),
            settings.module_path.clone(),
            Arc::clone(&cmd),
        ));
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            cmd,
            Arc::new(StdinPrompter),
            resolver,
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        prompter: Arc<dyn Prompter>,
        resolver: Arc<dyn ModuleResolver>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            prompter,
            resolver,
        }
    }

    /// Project initializer wired to this container's dependencies.
    pub fn project_service(&self) -> ProjectService {
        ProjectService::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.cmd),
            Arc::clone(&self.resolver),
            ConfirmationGate::new(Arc::clone(&self.prompter)),
            Arc::clone(&self.settings),
        )
    }
}
