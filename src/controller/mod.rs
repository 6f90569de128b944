// ============================================================================
// File: src/controller/mod.rs
// ----------------------------------------------------------------------------
// Ramdisk controller.
//
// Performs the state checks around the OS mount backend. The mounted state
// is never stored; it is re-read from the mount table on every call.
// ============================================================================

use log::{error, info};

use crate::config::RamdiskConfig;
use crate::error::{RamdiskError, Result};
use crate::linux::{DirectoryManager, MountDetector};
use crate::platform::{RamdiskPlatform, TmpfsSpec};

/// Mounts and unmounts the ramdisk described by a [`RamdiskConfig`].
#[derive(Debug)]
pub struct RamdiskController<P: RamdiskPlatform> {
    config: RamdiskConfig,
    platform: P,
}

impl<P: RamdiskPlatform> RamdiskController<P> {
    pub fn new(config: RamdiskConfig, platform: P) -> Self {
        Self { config, platform }
    }

    pub fn config(&self) -> &RamdiskConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Whether the mount table lists the configured mount point.
    pub fn is_mounted(&self) -> bool {
        MountDetector::is_listed(&self.config.mount_table, &self.config.mount_point)
    }

    /// Prepare the mount point and mount the tmpfs on it.
    ///
    /// Fails without touching the backend if the mount point cannot be
    /// prepared or is already mounted.
    pub fn mount(&self) -> Result<()> {
        let mount_point = &self.config.mount_point;
        DirectoryManager::ensure_mount_point(mount_point)?;

        if self.is_mounted() {
            error!("{} is already mounted", mount_point.display());
            return Err(RamdiskError::AlreadyMounted(mount_point.clone()));
        }

        let spec = TmpfsSpec::from(&self.config);
        info!(
            "Mounting tmpfs with {} at {}",
            spec.options(),
            mount_point.display()
        );
        self.platform.mount(&spec)?;

        info!("Ramdisk mounted at {}", mount_point.display());
        Ok(())
    }

    /// Wipe the mount point and unmount it.
    ///
    /// If the wipe fails the unmount is not attempted and the ramdisk stays
    /// mounted.
    pub fn unmount(&self) -> Result<()> {
        let mount_point = &self.config.mount_point;
        info!("Wiping {} before unmount", mount_point.display());
        DirectoryManager::clear_contents(mount_point)?;

        self.platform.unmount(mount_point)?;

        info!("Ramdisk unmounted from {}", mount_point.display());
        Ok(())
    }
}
