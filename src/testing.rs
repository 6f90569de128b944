// ============================================================================
// File: src/testing.rs
// ----------------------------------------------------------------------------
// Test doubles: a fake mount backend that edits a scratch mount table, and a
// fixture laying out a mount point plus mount table in a temp directory.
// ============================================================================

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::TempDir;

use crate::config::RamdiskConfig;
use crate::error::{RamdiskError, Result};
use crate::platform::{RamdiskPlatform, TMPFS, TmpfsSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Mount(TmpfsSpec),
    Unmount(PathBuf),
}

/// Records calls and mirrors successful mounts into `mount_table`.
#[derive(Debug)]
pub struct FakePlatform {
    mount_table: PathBuf,
    pub fail_mount: bool,
    pub fail_unmount: bool,
    calls: RefCell<Vec<Call>>,
}

impl FakePlatform {
    pub fn new(mount_table: &Path) -> Self {
        Self {
            mount_table: mount_table.to_path_buf(),
            fail_mount: false,
            fail_unmount: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn table_lines(&self) -> Vec<String> {
        fs::read_to_string(&self.mount_table)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn write_table(&self, lines: &[String]) {
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&self.mount_table, contents).expect("write fake mount table");
    }
}

impl RamdiskPlatform for FakePlatform {
    fn mount(&self, spec: &TmpfsSpec) -> Result<()> {
        self.calls.borrow_mut().push(Call::Mount(spec.clone()));
        if self.fail_mount {
            return Err(RamdiskError::CommandFailed {
                command: "mount".into(),
                details: "simulated failure".into(),
            });
        }
        let mut lines = self.table_lines();
        lines.push(format!(
            "{TMPFS} {} {TMPFS} rw,relatime,{} 0 0",
            spec.mount_point.display(),
            spec.options()
        ));
        self.write_table(&lines);
        Ok(())
    }

    fn unmount(&self, mount_point: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Unmount(mount_point.to_path_buf()));
        let needle = mount_point.to_string_lossy().into_owned();
        let lines = self.table_lines();
        if self.fail_unmount || !lines.iter().any(|l| l.contains(&needle)) {
            return Err(RamdiskError::CommandFailed {
                command: "umount".into(),
                details: format!("{needle}: not mounted"),
            });
        }
        let remaining: Vec<String> = lines.into_iter().filter(|l| !l.contains(&needle)).collect();
        self.write_table(&remaining);
        Ok(())
    }
}

/// Scratch layout: `<tmp>/media/ramdisk` and `<tmp>/mtab`.
pub struct Fixture {
    pub dir: TempDir,
    pub config: RamdiskConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let mount_table = dir.path().join("mtab");
        fs::write(
            &mount_table,
            "proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0\n",
        )
        .expect("seed mount table");
        let config = RamdiskConfig {
            mount_point: dir.path().join("media").join("ramdisk"),
            mount_table,
            ..RamdiskConfig::default()
        };
        Self { dir, config }
    }

    pub fn platform(&self) -> FakePlatform {
        FakePlatform::new(&self.config.mount_table)
    }
}
