// ============================================================================
// File: src/platform/mod.rs
// ----------------------------------------------------------------------------
// Seams between the ramdisk controller and the operating system:
// - the OS mount backend (tmpfs mount/unmount)
// - the privilege check
// ============================================================================

mod privilege;
mod ramdisk;

pub use privilege::{PrivilegeCheck, StaticPrivilege};
pub use ramdisk::{RamdiskPlatform, TMPFS, TmpfsSpec};
