use clap::Parser;
use log::debug;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

use crate::{error::Error, setup_error};

/// Parses the command line, exiting directly on parse failure. Usage
/// errors exit with code 1 (clap's default of 2 does not match the
/// program's contract); help and version displays exit with code 0.
pub fn parse_from_cli() -> Runtime {
    match Runtime::try_parse() {
        Ok(runtime) => runtime,
        Err(err) => {
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "prd-dist",
    version = "0.1.0",
    about = "Copies the bundled PRD workflow files into per-file directories under a destination"
)]
pub struct Runtime {
    /// Directory the workflow files are copied into
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub destination: PathBuf,

    /// Directory holding the bundled files (defaults to the executable's directory)
    #[arg(
        short = 's',
        long,
        value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Print what would be copied without touching the filesystem
    #[arg(short = 'd', long = "dry", default_value = "false")]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes", default_value = "false")]
    pub assume_yes: bool,
}

impl Runtime {
    /// The directory the bundled files are read from: `--source` when
    /// given, otherwise the directory containing the running executable.
    pub fn source_root(&self) -> Result<PathBuf, Error> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }
        let exe = env::current_exe()?;
        debug!("Executable path: {}", exe.to_string_lossy());
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or(setup_error!("Could not determine the executable's directory"))
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            destination: PathBuf::new(),
            source: None,
            dry_run: false,
            assume_yes: false,
        }
    }
}
