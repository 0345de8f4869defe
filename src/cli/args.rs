//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::Style;

/// Render labeled trees as indented text with box-drawing or ASCII connectors
#[derive(Parser, Debug)]
#[command(name = "treedraw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .treedraw.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the built-in sample tree
    Demo {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a tree described in a TOML file
    Render {
        /// Tree file (name, icon, [[children]])
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Per-invocation overrides on top of the loaded settings.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Connector preset
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Truncate labels so that prefix + label fit this width
    #[arg(short = 'w', long)]
    pub max_width: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file locations
    Path,
    /// Print a commented config template
    Template,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Unicode,
    Ascii,
    Depth,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Unicode => Style::Unicode,
            StyleArg::Ascii => Style::Ascii,
            StyleArg::Depth => Style::Depth,
        }
    }
}
