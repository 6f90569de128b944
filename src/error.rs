// ============================================================================
// File: src/error.rs
// ----------------------------------------------------------------------------
// Error taxonomy for ramdisk operations.
//
// Every variant is terminal for the invocation. Each one renders to exactly
// one user-facing line and maps to a process exit code.
// ============================================================================

use std::path::PathBuf;

/// Errors raised while dispatching a command or managing the ramdisk.
#[derive(Debug, thiserror::Error)]
pub enum RamdiskError {
    /// The effective user is not root
    #[error("Root Access Required")]
    InsufficientPrivileges,

    /// No command word was given
    #[error("Too few arguments")]
    TooFewArguments,

    /// More than one command word was given
    #[error("Too many arguments")]
    TooManyArguments,

    /// The command word is not in the command table
    #[error("Invalid Command: {0}")]
    InvalidCommand(String),

    /// The mount point exists but is not a usable directory
    #[error("Mount Point Check Failure: {path}: {reason}")]
    MountPointCheck { path: PathBuf, reason: String },

    /// The mount point directory could not be created
    #[error("Could not create mount point {path}: {source}")]
    MountPointCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mount table already lists the mount point
    #[error("Mount point already in use: {0}")]
    AlreadyMounted(PathBuf),

    /// Clearing the mount point before unmount failed
    #[error("Drive not empty: {path}: {source}")]
    DriveNotEmpty {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external mount/umount invocation failed or exited non-zero
    #[error("Command `{command}` failed: {details}")]
    CommandFailed { command: String, details: String },
}

impl RamdiskError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RamdiskError::InsufficientPrivileges => 2,
            _ => 1,
        }
    }

    /// The single line shown to the user on stdout.
    ///
    /// Details such as io errors and command stderr stay in the log.
    pub fn report(&self) -> String {
        match self {
            RamdiskError::InsufficientPrivileges => "Error: Root Access Required".to_string(),
            RamdiskError::TooFewArguments => "Error: Too few arguments".to_string(),
            RamdiskError::TooManyArguments => "Error: Too many arguments".to_string(),
            RamdiskError::InvalidCommand(arg) => format!("Invalid Command: {arg}"),
            RamdiskError::MountPointCheck { .. } => "Error: Mount Point Check Failure".to_string(),
            RamdiskError::MountPointCreate { .. } => {
                "Error: Could not create mount point".to_string()
            }
            RamdiskError::AlreadyMounted(_) => "Error: Mount point already in use".to_string(),
            RamdiskError::DriveNotEmpty { .. } => "Aborting: Drive not empty".to_string(),
            RamdiskError::CommandFailed { command, .. } => {
                format!("Error: `{command}` returned a failure status")
            }
        }
    }
}

/// Result alias for ramdisk operations
pub type Result<T> = std::result::Result<T, RamdiskError>;
