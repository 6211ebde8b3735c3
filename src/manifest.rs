use std::path::{Path, PathBuf};

/// One bundled workflow file and the per-file directory it is copied into.
/// The set is fixed at build time and not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub file_name: &'static str,
    pub directory: &'static str,
}

pub const MANIFEST: [ManifestEntry; 3] = [
    ManifestEntry {
        file_name: "create-prd.md",
        directory: "create-prd",
    },
    ManifestEntry {
        file_name: "generate-tasks.md",
        directory: "generate-tasks",
    },
    ManifestEntry {
        file_name: "process-task-list.md",
        directory: "process-task-list",
    },
];

impl ManifestEntry {
    pub fn source_path(&self, source_root: &Path) -> PathBuf {
        source_root.join(self.file_name)
    }

    pub fn target_directory(&self, destination_root: &Path) -> PathBuf {
        destination_root.join(self.directory)
    }

    pub fn target_path(&self, destination_root: &Path) -> PathBuf {
        self.target_directory(destination_root).join(self.file_name)
    }
}
