use std::{fs, path::Path};

use log::info;

use crate::{copy, error::Error, manifest::{ManifestEntry, MANIFEST}};

/// What happened to a single manifest entry during the copy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Copied,
    MissingSource,
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub copied: usize,
    pub missing: usize,
    pub failed: usize,
}

impl Report {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Copied => self.copied += 1,
            Outcome::MissingSource => self.missing += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Runs the copy pass: ensures the destination root exists, then walks the
/// manifest in fixed order. Per-entry problems (missing source, copy
/// failure, subdirectory creation failure) are recorded and reported but
/// never abort the batch. A dry run performs no writes at all.
pub fn distribute(
    source_root: &Path,
    destination_root: &Path,
    dry_run: bool,
) -> Result<Report, Error> {
    if !dry_run {
        fs::create_dir_all(destination_root)?;
    }
    println!(
        "Copying files from {} to {}",
        source_root.display(),
        destination_root.display()
    );
    let mut report = Report::default();
    for entry in &MANIFEST {
        report.record(copy_entry(entry, source_root, destination_root, dry_run));
    }
    println!();
    if dry_run {
        println!(
            "Dry run complete! {} file(s) would be copied to {}",
            report.copied,
            destination_root.display()
        );
    } else {
        println!(
            "Copy operation complete! {} file(s) copied to {}",
            report.copied,
            destination_root.display()
        );
    }
    Ok(report)
}

fn copy_entry(
    entry: &ManifestEntry,
    source_root: &Path,
    destination_root: &Path,
    dry_run: bool,
) -> Outcome {
    let source = entry.source_path(source_root);
    if !dry_run {
        if let Err(err) = fs::create_dir_all(entry.target_directory(destination_root)) {
            println!("✗ Error copying {}: {}", entry.file_name, err);
            return Outcome::Failed;
        }
    }
    if !source.exists() {
        println!(
            "⚠ Warning: {} not found in {}",
            entry.file_name,
            source_root.display()
        );
        return Outcome::MissingSource;
    }
    let target = entry.target_path(destination_root);
    info!(
        "Copy {} -> {}",
        source.to_string_lossy(),
        target.to_string_lossy()
    );
    if dry_run {
        println!("✓ Would copy: {} to {}/", entry.file_name, entry.directory);
        return Outcome::Copied;
    }
    match copy::copy_with_metadata(&source, &target) {
        Ok(_) => {
            println!("✓ Copied: {} to {}/", entry.file_name, entry.directory);
            Outcome::Copied
        }
        Err(err) => {
            println!("✗ Error copying {}: {}", entry.file_name, err.message);
            Outcome::Failed
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use crate::manifest::MANIFEST;

    use super::{copy_entry, Outcome, Report};

    #[test]
    fn report_tallies_each_outcome() {
        let mut report = Report::default();
        report.record(Outcome::Copied);
        report.record(Outcome::Copied);
        report.record(Outcome::MissingSource);
        report.record(Outcome::Failed);
        assert_eq!(report.copied, 2);
        assert_eq!(report.missing, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn copy_entry_places_the_file_in_its_directory() {
        let entry = MANIFEST[0];
        let source_root = TempDir::new().unwrap();
        fs::write(entry.source_path(source_root.path()), "# create a PRD\n").unwrap();
        let destination_root = TempDir::new().unwrap();
        let outcome = copy_entry(&entry, source_root.path(), destination_root.path(), false);
        assert!(matches!(outcome, Outcome::Copied));
        let target = entry.target_path(destination_root.path());
        assert_eq!(fs::read_to_string(target).unwrap(), "# create a PRD\n");
    }

    #[test]
    fn missing_source_still_creates_the_directory() {
        let entry = MANIFEST[1];
        let source_root = TempDir::new().unwrap();
        let destination_root = TempDir::new().unwrap();
        let outcome = copy_entry(&entry, source_root.path(), destination_root.path(), false);
        assert!(matches!(outcome, Outcome::MissingSource));
        assert!(entry.target_directory(destination_root.path()).is_dir());
        assert!(!entry.target_path(destination_root.path()).exists());
    }

    #[test]
    fn blocked_subdirectory_is_a_per_entry_failure() {
        let entry = MANIFEST[2];
        let source_root = TempDir::new().unwrap();
        fs::write(entry.source_path(source_root.path()), "contents").unwrap();
        let destination_root = TempDir::new().unwrap();
        // A file squatting on the subdirectory path makes create_dir_all fail.
        fs::write(entry.target_directory(destination_root.path()), "squatter").unwrap();
        let outcome = copy_entry(&entry, source_root.path(), destination_root.path(), false);
        assert!(matches!(outcome, Outcome::Failed));
    }

    #[test]
    fn blocked_target_file_is_a_per_entry_failure() {
        let entry = MANIFEST[0];
        let source_root = TempDir::new().unwrap();
        fs::write(entry.source_path(source_root.path()), "contents").unwrap();
        let destination_root = TempDir::new().unwrap();
        // A directory squatting on the target file path makes the copy fail.
        fs::create_dir_all(entry.target_path(destination_root.path())).unwrap();
        let outcome = copy_entry(&entry, source_root.path(), destination_root.path(), false);
        assert!(matches!(outcome, Outcome::Failed));
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let entry = MANIFEST[0];
        let source_root = TempDir::new().unwrap();
        fs::write(entry.source_path(source_root.path()), "contents").unwrap();
        let destination_root = TempDir::new().unwrap();
        let outcome = copy_entry(&entry, source_root.path(), destination_root.path(), true);
        assert!(matches!(outcome, Outcome::Copied));
        assert!(!entry.target_directory(destination_root.path()).exists());
    }
}
