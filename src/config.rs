use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the ramdisk
pub const DEFAULT_MOUNT_POINT: &str = "/media/ramdisk";

/// Default ramdisk size in megabytes
pub const DEFAULT_SIZE_MB: u32 = 1024;

/// Mount table consulted to detect an existing mount
pub const DEFAULT_MOUNT_TABLE: &str = "/etc/mtab";

/// Fixed settings for the ramdisk.
///
/// Only the compiled-in defaults are used by the binary; the fields exist so
/// the controller can be pointed at scratch directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamdiskConfig {
    pub mount_point: PathBuf,
    pub size_mb: u32,
    pub mount_table: PathBuf,
}

impl RamdiskConfig {
    /// Human readable size, e.g. `1GB (1024MB)`.
    pub fn size_label(&self) -> String {
        if self.size_mb >= 1024 && self.size_mb % 1024 == 0 {
            format!("{}GB ({}MB)", self.size_mb / 1024, self.size_mb)
        } else {
            format!("{}MB", self.size_mb)
        }
    }
}

impl Default for RamdiskConfig {
    fn default() -> Self {
        Self {
            mount_point: PathBuf::from(DEFAULT_MOUNT_POINT),
            size_mb: DEFAULT_SIZE_MB,
            mount_table: PathBuf::from(DEFAULT_MOUNT_TABLE),
        }
    }
}
