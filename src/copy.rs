use std::{fs, path::Path};

use filetime::FileTime;

use crate::error::Error;

/// Copies `source` over `destination`, carrying permission bits (via
/// `fs::copy`) and the access/modification timestamps along with the
/// contents. The destination's parent directory must already exist.
pub fn copy_with_metadata(source: &Path, destination: &Path) -> Result<(), Error> {
    fs::copy(source, destination)?;
    let metadata = fs::metadata(source)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(destination, atime, mtime)?;
    Ok(())
}
