use clap::{CommandFactory, Parser};

use treedraw::cli::args::{Cli, Commands, StyleArg};

#[test]
fn given_cli_definition_when_asserted_then_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_render_args_when_parsing_then_fills_overrides() {
    let cli = Cli::try_parse_from(["treedraw", "-d", "-d", "render", "tree.toml", "-s", "depth", "-w", "40"])
        .expect("parse");
    assert_eq!(cli.debug, 2);
    match cli.command {
        Some(Commands::Render { file, render }) => {
            assert_eq!(file.to_str(), Some("tree.toml"));
            assert_eq!(render.style, Some(StyleArg::Depth));
            assert_eq!(render.max_width, Some(40));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
