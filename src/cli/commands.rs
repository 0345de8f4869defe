//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{render_file, render_sample};
use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { render }) => cmd_demo(cli, render),
        Some(Commands::Render { file, render }) => cmd_render(cli, file, render),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, try `treedraw demo` or --help".into(),
        )),
    }
}

fn local_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().map_err(|e| CliError::Io {
            context: "determine current directory".into(),
            source: e,
        }),
    }
}

/// Loaded settings with command-line overrides on top.
fn effective_settings(cli: &Cli, args: &RenderArgs) -> CliResult<Settings> {
    let dir = local_dir(cli)?;
    let mut settings = Settings::load(Some(dir.as_path()))?;
    if let Some(style) = args.style {
        settings.style = style.into();
    }
    if args.max_width.is_some() {
        settings.max_width = args.max_width;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

#[instrument(skip(cli))]
fn cmd_demo(cli: &Cli, args: &RenderArgs) -> CliResult<()> {
    let settings = effective_settings(cli, args)?;
    output::info(&render_sample(&settings)?);
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_render(cli: &Cli, file: &Path, args: &RenderArgs) -> CliResult<()> {
    let settings = effective_settings(cli, args)?;
    output::info(&render_file(file, &settings)?);
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    let dir = local_dir(cli)?;
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(dir.as_path()))?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::warning("no home directory, global config disabled"),
            }
            output::detail(&format!("local:  {}", local_config_path(&dir).display()));
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
