// ============================================================================
// File: src/cli.rs
// ----------------------------------------------------------------------------
// Command line surface: the command-word table, single-command resolution
// of the raw argument vector, and the help/version text.
// ============================================================================

use std::ffi::OsString;
use std::io::{self, Write};

use clap::ValueEnum;

use crate::config::RamdiskConfig;
use crate::error::{RamdiskError, Result};

pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);
pub const AUTHOR_NAME: &str = "Nigel Mpofu";
pub const AUTHOR_EMAIL: &str = "nvmpofu@gmail.com";

/// Recognized command words.
///
/// The words are single-dash (`-mount`), so they are matched as whole
/// values rather than declared as clap flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommandWord {
    #[value(name = "-mount")]
    Mount,
    #[value(name = "-unmount")]
    Unmount,
    #[value(name = "-version")]
    Version,
    #[value(name = "-help")]
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mount,
    Unmount,
    Version,
    Help,
    Invalid(String),
}

impl From<CommandWord> for Command {
    fn from(word: CommandWord) -> Self {
        match word {
            CommandWord::Mount => Command::Mount,
            CommandWord::Unmount => Command::Unmount,
            CommandWord::Version => Command::Version,
            CommandWord::Help => Command::Help,
        }
    }
}

/// Resolve the argument vector (program name excluded) to a single command.
///
/// Every word counts, `--` included. Unknown words, including ones that are
/// not valid UTF-8, become [`Command::Invalid`] rather than an error.
pub fn parse_command(args: &[OsString]) -> Result<Command> {
    match args {
        [] => Err(RamdiskError::TooFewArguments),
        [arg] => {
            let word = arg.to_string_lossy();
            Ok(CommandWord::from_str(&word, false)
                .map(Command::from)
                .unwrap_or_else(|_| Command::Invalid(word.into_owned())))
        }
        _ => Err(RamdiskError::TooManyArguments),
    }
}

pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "RamDisk Version: {VERSION}")?;
    writeln!(out, "By: {AUTHOR_NAME} ({AUTHOR_EMAIL})")
}

pub fn write_help<W: Write>(out: &mut W, config: &RamdiskConfig) -> io::Result<()> {
    writeln!(out, "*** RamDisk Available Commands ***")?;
    writeln!(
        out,
        "-mount   - Mounts the {} Ram Disk to '{}'",
        config.size_label(),
        config.mount_point.display()
    )?;
    writeln!(out, "-unmount - Unmounts the Ram Disk")?;
    writeln!(out, "Note: Data is lost on unmount and system power loss.")?;
    writeln!(out)?;
    write_version(out)
}
