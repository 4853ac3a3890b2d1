use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;
use clap::{error::ErrorKind, Parser};

pub mod banner;
pub mod cli;
pub mod commands;
pub mod environment;
pub mod error;
pub mod greeter;
pub mod masking;

use crate::{
    cli::{Args, ManageArgs, OutputFormat},
    commands::Command,
    environment::EnvironmentSnapshot,
    error::CommandResult,
    greeter::Greeter,
};

pub type Result<T> = anyhow::Result<T>;

/// Entry point of the example app binary.
///
/// Only `--help` and `--version` stop early; any other argument error prints
/// the text greeting.
pub fn run() -> Result<()> {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().context("failed to print usage")?;
            return Ok(());
        }
        Err(err) => {
            tracing::warn!(kind = ?err.kind(), "unusable arguments, printing plain greeting");
            Args::fallback()
        }
    };

    environment::load_env_file(args.env_file.as_deref());
    let env = EnvironmentSnapshot::capture();
    let greeter = Greeter::new(&env, Local::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match args.format {
        OutputFormat::Text => write_lines(&mut out, greeter.lines()),
        OutputFormat::Json => write_json(&mut out, &greeter),
    };
    written.context("failed to print greeting")
}

/// Entry point of the management-command binary.
///
/// Argument errors never fail the process: they fall back to the command
/// menu, the same as an unrecognized command.
pub fn run_manage() -> Result<()> {
    init_tracing();

    let args = ManageArgs::try_parse().unwrap_or_else(|err| {
        tracing::warn!(kind = ?err.kind(), "unusable arguments, showing command menu");
        ManageArgs::fallback()
    });

    environment::load_env_file(args.env_file.as_deref());
    let env = EnvironmentSnapshot::capture();
    let command = Command::from_args(args.command.as_slice());
    let lines = commands::execute(&command, &env, Local::now());

    write_lines(&mut io::stdout().lock(), lines).context("failed to execute command")
}

pub fn write_lines<W, I>(out: &mut W, lines: I) -> CommandResult<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, greeter: &Greeter<'_>) -> CommandResult<()> {
    serde_json::to_writer_pretty(&mut *out, &greeter.report())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
