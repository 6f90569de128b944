use crate::error::{RamdiskError, Result};
use log::{error, info, warn};
use std::fs::{self, DirBuilder};
use std::io::ErrorKind;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

/// Mount point directory setup and cleanup.
pub struct DirectoryManager;

impl DirectoryManager {
    /// Make sure `mount_point` exists as a directory.
    ///
    /// A missing directory is created with mode 0777 (parents included). A
    /// path that exists but is not a directory is rejected.
    pub fn ensure_mount_point(mount_point: &Path) -> Result<()> {
        match fs::metadata(mount_point) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => {
                error!("{} exists but is not a directory", mount_point.display());
                Err(RamdiskError::MountPointCheck {
                    path: mount_point.to_path_buf(),
                    reason: "not a directory".to_string(),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Self::create_mount_point(mount_point),
            Err(e) => {
                error!("Failed to stat {}: {}", mount_point.display(), e);
                Err(RamdiskError::MountPointCheck {
                    path: mount_point.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn create_mount_point(mount_point: &Path) -> Result<()> {
        info!("Creating mount point at {}", mount_point.display());
        DirBuilder::new()
            .recursive(true)
            .mode(0o777)
            .create(mount_point)
            .map_err(|e| {
                error!("Failed to create mount point directory: {}", e);
                RamdiskError::MountPointCreate {
                    path: mount_point.to_path_buf(),
                    source: e,
                }
            })
    }

    /// Remove everything beneath `mount_point`, keeping the directory.
    ///
    /// An absent mount point has nothing to remove and succeeds.
    pub fn clear_contents(mount_point: &Path) -> Result<()> {
        let not_empty = |e: std::io::Error| RamdiskError::DriveNotEmpty {
            path: mount_point.to_path_buf(),
            source: e,
        };

        let entries = match fs::read_dir(mount_point) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} does not exist, nothing to wipe", mount_point.display());
                return Ok(());
            }
            Err(e) => return Err(not_empty(e)),
        };

        let mut removed = 0usize;
        for entry in entries {
            let entry = entry.map_err(not_empty)?;
            let path = entry.path();
            // file_type does not follow symlinks, so links are unlinked, never traversed
            let result = match entry.file_type() {
                Ok(ft) if ft.is_dir() => fs::remove_dir_all(&path),
                Ok(_) => fs::remove_file(&path),
                Err(e) => Err(e),
            };
            result.map_err(|e| {
                error!("Failed to remove {}: {}", path.display(), e);
                not_empty(e)
            })?;
            removed += 1;
        }

        info!(
            "Wiped {} entries from {}",
            removed,
            mount_point.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn existing_directory_is_accepted() {
        let dir = TempDir::new().unwrap();
        assert!(DirectoryManager::ensure_mount_point(dir.path()).is_ok());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let mount_point = dir.child("media").child("ramdisk");

        DirectoryManager::ensure_mount_point(mount_point.path()).unwrap();
        mount_point.assert(predicate::path::is_dir());
    }

    #[test]
    fn regular_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("ramdisk");
        file.touch().unwrap();

        let err = DirectoryManager::ensure_mount_point(file.path()).unwrap_err();
        assert!(matches!(err, RamdiskError::MountPointCheck { .. }));
    }

    #[test]
    fn clear_contents_keeps_directory() {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("nested/deeper/b.txt").write_str("b").unwrap();

        DirectoryManager::clear_contents(dir.path()).unwrap();

        dir.assert(predicate::path::is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn clear_contents_of_missing_directory_is_noop() {
        let dir = TempDir::new().unwrap();
        assert!(DirectoryManager::clear_contents(&dir.path().join("gone")).is_ok());
    }

    #[test]
    fn clear_contents_of_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("not-a-dir");
        file.touch().unwrap();

        let err = DirectoryManager::clear_contents(file.path()).unwrap_err();
        assert!(matches!(err, RamdiskError::DriveNotEmpty { .. }));
    }
}
