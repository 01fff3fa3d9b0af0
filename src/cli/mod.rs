// CLI module
// Command-line arguments, prompts and the interactive session

mod args;
pub mod menu;

pub use args::{CliArgs, MenuConfig, DEFAULT_DISPLAY_LIMIT};
pub use menu::{prompt_line, prompt_store_kind, Menu};

use crate::io::import_csv;
use crate::types::LedgerError;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an interactive session ends with a failure exit code
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid implementation choice")]
    InvalidStoreChoice,

    #[error("No input file given")]
    NoInputFile,

    #[error(transparent)]
    Import(#[from] LedgerError),

    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints its message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run one interactive session
///
/// Settings missing from `args` are prompted for on `input`. The CSV is then
/// imported, the load report printed and the main menu run until the user
/// exits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    args: &CliArgs,
    mut input: R,
    mut output: W,
) -> Result<(), SessionError> {
    let kind = match args.store {
        Some(kind) => kind,
        None => prompt_store_kind(&mut input, &mut output)?
            .ok_or(SessionError::InvalidStoreChoice)?,
    };

    let path = match &args.input_file {
        Some(path) => path.clone(),
        None => prompt_line(&mut input, &mut output, "Enter CSV filename: ")?
            .filter(|name| !name.is_empty())
            .map(PathBuf::from)
            .ok_or(SessionError::NoInputFile)?,
    };

    let (stores, report) = import_csv(&path, kind)?;
    write!(output, "\n{}", report)?;

    let mut menu = Menu::new(input, output, stores, args.to_menu_config());
    menu.run()?;
    Ok(())
}
