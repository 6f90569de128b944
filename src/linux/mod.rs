use crate::error::{RamdiskError, Result};
use crate::platform::{RamdiskPlatform, TMPFS, TmpfsSpec};
use log::{error, info};
use std::path::Path;
use std::process::Command;

mod directory;
mod mount;
mod privilege;

pub use directory::DirectoryManager;
pub use mount::MountDetector;
pub use privilege::RootPrivilege;

/// Linux mount backend.
///
/// Runs the system `mount` and `umount` utilities and reports their exit
/// status. Requires root; the caller checks that beforehand.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxRamdisk;

impl LinuxRamdisk {
    /// Create a new LinuxRamdisk instance.
    pub fn new() -> Self {
        Self
    }

    fn run(program: &str, args: &[&str]) -> Result<()> {
        let full_cmd = format!("{} {}", program, args.join(" "));
        info!("Running: {}", full_cmd);

        let output = Command::new(program).args(args).output().map_err(|e| {
            error!("Failed to execute {}: {}", program, e);
            RamdiskError::CommandFailed {
                command: full_cmd.clone(),
                details: e.to_string(),
            }
        })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("{} exited with {}: {}", program, output.status, stderr);
            Err(RamdiskError::CommandFailed {
                command: full_cmd,
                details: format!("{}: {}", output.status, stderr),
            })
        }
    }
}

impl RamdiskPlatform for LinuxRamdisk {
    fn mount(&self, spec: &TmpfsSpec) -> Result<()> {
        let options = spec.options();
        let mount_point = spec.mount_point.to_string_lossy().into_owned();
        Self::run(
            "mount",
            &["-t", TMPFS, "-o", options.as_str(), TMPFS, mount_point.as_str()],
        )
    }

    fn unmount(&self, mount_point: &Path) -> Result<()> {
        let mount_point = mount_point.to_string_lossy().into_owned();
        Self::run("umount", &[mount_point.as_str()])
    }
}
