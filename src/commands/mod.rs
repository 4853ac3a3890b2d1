pub mod hello;
pub mod menu;
pub mod runserver;

use chrono::{DateTime, Local};

use crate::environment::EnvironmentSnapshot;

/// Management command selected by the first positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    RunServer { host: Option<String> },
    Unknown,
}

impl Command {
    /// Exact, case-sensitive match on the first argument. Anything that is
    /// not a known command, including no argument at all, falls back to
    /// [`Command::Unknown`].
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args.first().map(AsRef::as_ref) {
            Some("hello") => Self::Hello,
            Some("runserver") => Self::RunServer {
                host: args.get(1).map(|host| host.as_ref().to_string()),
            },
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::RunServer { .. } => "runserver",
            Self::Unknown => "help",
        }
    }
}

/// Dispatches execution to the appropriate command handler.
pub fn execute(
    command: &Command,
    env: &EnvironmentSnapshot,
    now: DateTime<Local>,
) -> Vec<String> {
    tracing::debug!(command = command.name(), "dispatching management command");

    match command {
        Command::Hello => hello::lines(env, &now),
        Command::RunServer { host } => runserver::lines(host.as_deref(), env),
        Command::Unknown => menu::lines(),
    }
}
