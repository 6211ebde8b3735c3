mod copy;
pub mod distributor;
pub mod error;
pub mod manifest;
pub mod prompt;
pub mod runtime;

use std::io;

use log::debug;

use crate::{distributor::Report, error::Error, prompt::Confirmation, runtime::Runtime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(Report),
    Cancelled,
}

/// The whole run: resolve the source root, validate the destination,
/// print the plan, confirm, and execute the copy pass. Declining at the
/// prompt is a clean outcome; a closed prompt channel is an interrupt.
pub fn run(runtime: &Runtime) -> Result<RunOutcome, Error> {
    let source_root = runtime.source_root()?;
    debug!("Source root: {}", source_root.to_string_lossy());
    debug!("Destination root: {}", runtime.destination.to_string_lossy());

    if runtime.destination.exists() && !runtime.destination.is_dir() {
        return Err(crate::setup_error!(
            "'{}' exists but is not a directory",
            runtime.destination.display()
        ));
    }

    println!();
    println!("About to copy files to: {}", runtime.destination.display());
    println!("This will create the following structure:");
    for entry in &manifest::MANIFEST {
        println!("  - {}/{}", entry.directory, entry.file_name);
    }

    if !(runtime.assume_yes || runtime.dry_run) {
        let stdin = io::stdin();
        if prompt::confirm(&mut stdin.lock(), &mut io::stdout())? == Confirmation::Declined {
            println!("Operation cancelled.");
            return Ok(RunOutcome::Cancelled);
        }
    }

    let report = distributor::distribute(&source_root, &runtime.destination, runtime.dry_run)?;
    Ok(RunOutcome::Completed(report))
}
