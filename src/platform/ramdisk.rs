// ============================================================================
// File: src/platform/ramdisk.rs
// ----------------------------------------------------------------------------
// OS mount backend trait for the ramdisk controller.
//
// Implementations carry out the two privileged operations the controller
// cannot do itself: mounting a tmpfs and unmounting it again. Everything
// else (mount table scan, directory checks, wiping) stays in the controller.
// ============================================================================

use std::path::{Path, PathBuf};

use crate::config::RamdiskConfig;
use crate::error::Result;

/// Filesystem type requested from the OS
pub const TMPFS: &str = "tmpfs";

/// A tmpfs mount request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmpfsSpec {
    /// Size in megabytes
    pub size_mb: u32,
    /// Directory the tmpfs is mounted on
    pub mount_point: PathBuf,
}

impl TmpfsSpec {
    /// Mount options string passed with `-o`, e.g. `size=1024m`.
    pub fn options(&self) -> String {
        format!("size={}m", self.size_mb)
    }
}

impl From<&RamdiskConfig> for TmpfsSpec {
    fn from(config: &RamdiskConfig) -> Self {
        Self {
            size_mb: config.size_mb,
            mount_point: config.mount_point.clone(),
        }
    }
}

/// OS mount backend
///
/// Both operations block until the OS reports a result.
pub trait RamdiskPlatform {
    /// Mount a tmpfs described by `spec`
    ///
    /// # Returns
    /// Ok if the OS accepted the mount, `CommandFailed` otherwise
    fn mount(&self, spec: &TmpfsSpec) -> Result<()>;

    /// Unmount whatever is mounted at `mount_point`
    fn unmount(&self, mount_point: &Path) -> Result<()>;
}
