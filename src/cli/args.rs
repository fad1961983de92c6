//! CLI argument definitions using clap
//!
//! Only used when no react-native cli is installed locally. The surface is
//! deliberately tiny: `init <ProjectName>`, nothing else, no help or version.

use clap::{Parser, Subcommand};

/// Bootstrap launcher for the React Native command line
#[derive(Parser, Debug)]
#[command(name = "react-native")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new React Native project
    #[command(disable_help_flag = true)]
    Init {
        /// Project name (a valid identifier)
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,

        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },

    /// Anything else
    #[command(external_subcommand)]
    Other(Vec<String>),
}
