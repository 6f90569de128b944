use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Mount table inspection.
pub struct MountDetector;

impl MountDetector {
    /// Check whether `mount_point` appears in the mount table at `table`.
    ///
    /// Matches on substring, line by line, stopping at the first hit. An
    /// unreadable table counts as "not mounted".
    pub fn is_listed(table: &Path, mount_point: &Path) -> bool {
        let file = match File::open(table) {
            Ok(file) => file,
            Err(e) => {
                warn!(
                    "Could not read mount table {}: {}; assuming not mounted",
                    table.display(),
                    e
                );
                return false;
            }
        };

        let needle = mount_point.to_string_lossy().into_owned();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading {}: {}", table.display(), e);
                    return false;
                }
            };
            if line.contains(needle.as_str()) {
                debug!("Mount table entry matches {}: {}", needle, line);
                return true;
            }
        }

        debug!("{} not found in {}", needle, table.display());
        false
    }
}
