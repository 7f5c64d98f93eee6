//! Defines the reanchor CLI through clap types.

mod completions;
mod locate;

use std::{borrow::Cow, env, path::Path, str::FromStr};

use clap::Parser;
use thiserror::Error;

pub use self::completions::CompletionsCommand;
pub use self::locate::{LocateCommand, DEFAULT_ELEMENT_ID};

/// Command line options that reanchor accepts, defined using the clap crate.
#[derive(Debug, Parser)]
#[clap(name = "reanchor", version, about)]
pub struct Options {
    #[clap(flatten)]
    pub global: GlobalOptions,

    /// Subcommand to run in this invocation.
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Options {
    pub fn run(self) -> anyhow::Result<()> {
        match self.subcommand {
            Subcommand::Locate(subcommand) => subcommand.run(),
            Subcommand::Completions(subcommand) => subcommand.run(),
        }
    }
}

#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Sets verbosity level. Can be specified multiple times.
    #[clap(long("verbose"), short, global(true), action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Set color behavior. Valid values are auto, always, and never.
    #[clap(long("color"), global(true), default_value("auto"))]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ColorChoiceParseError {
                attempted: source.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid color choice '{attempted}'. Valid values are: auto, always, never")]
pub struct ColorChoiceParseError {
    attempted: String,
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    Locate(LocateCommand),
    Completions(CompletionsCommand),
}

pub fn resolve_path(path: &Path) -> Cow<'_, Path> {
    if path.is_absolute() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(env::current_dir().unwrap().join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_requires_both_documents() {
        let result = Options::try_parse_from(["reanchor", "locate", "origin.html"]);
        assert!(result.is_err());
    }

    #[test]
    fn locate_element_id_defaults() {
        let options =
            Options::try_parse_from(["reanchor", "locate", "origin.html", "modified.html"])
                .unwrap();
        match options.subcommand {
            Subcommand::Locate(command) => {
                assert_eq!(command.element_id, DEFAULT_ELEMENT_ID);
                assert_eq!(command.depth, 2);
            }
            _ => panic!("expected locate subcommand"),
        }
    }

    #[test]
    fn locate_accepts_explicit_id_and_depth() {
        let options = Options::try_parse_from([
            "reanchor",
            "locate",
            "origin.html",
            "modified.html",
            "some-other-id",
            "--depth",
            "1",
        ])
        .unwrap();
        match options.subcommand {
            Subcommand::Locate(command) => {
                assert_eq!(command.element_id, "some-other-id");
                assert_eq!(command.depth, 1);
            }
            _ => panic!("expected locate subcommand"),
        }
    }

    #[test]
    fn color_choice_rejects_unknown_value() {
        let err = ColorChoice::from_str("sometimes").unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }
}
