use std::{env, path::PathBuf};

use clap::{Parser, ValueEnum};

pub const ENV_FILE_VAR: &str = "HELLO_SCAFFOLD_ENV_FILE";

/// Command-line arguments for the example app.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hello-scaffold",
    version,
    about = "Hello world example app for freshly generated projects.",
    long_about = None
)]
pub struct Args {
    /// Output format for the greeting.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Dotenv file loaded before reading the environment (default: ./.env if present).
    #[arg(long, value_name = "PATH", env = ENV_FILE_VAR)]
    pub env_file: Option<PathBuf>,
}

impl Args {
    /// Arguments used when the command line cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            format: OutputFormat::Text,
            env_file: env_file_from_env(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for the management-command stub.
///
/// `--help` and `--version` are not flags here: like any other unknown
/// command they print the command menu.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "manage",
    about = "Management command stub for freshly generated projects.",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ManageArgs {
    /// Dotenv file loaded before reading the environment (default: ./.env if present).
    #[arg(long, value_name = "PATH", env = ENV_FILE_VAR)]
    pub env_file: Option<PathBuf>,

    /// Command to run, followed by its arguments (`runserver` takes an optional host:port).
    ///
    /// Everything from the command onwards is positional, so `--env-file` has
    /// to come before it.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl ManageArgs {
    /// Arguments used when the command line cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            env_file: env_file_from_env(),
            command: Vec::new(),
        }
    }
}

fn env_file_from_env() -> Option<PathBuf> {
    env::var_os(ENV_FILE_VAR)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}
