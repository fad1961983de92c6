//! rnboot: bootstrap launcher for the React Native command line.
//!
//! Delegates every invocation to a locally installed react-native cli when
//! one is present; otherwise supports `init <ProjectName>`, which creates
//! the project, installs react-native and hands over to its initializer.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
