// ============================================================================
// File: src/app.rs
// ----------------------------------------------------------------------------
// Top-level dispatch: privilege gate, argument check, then one command.
// ============================================================================

use std::ffi::OsString;
use std::io::{self, Write};

use log::{error, info};

use crate::cli::{self, Command};
use crate::controller::RamdiskController;
use crate::error::RamdiskError;
use crate::platform::{PrivilegeCheck, RamdiskPlatform};

/// Run one invocation and return the process exit code.
///
/// `args` is the raw argument vector without the program name. The
/// privilege check comes first, so an unprivileged caller gets exit code 2
/// whatever the arguments are. User-facing lines go to `out`.
pub fn run<P, W>(
    args: &[OsString],
    privilege: &dyn PrivilegeCheck,
    controller: &RamdiskController<P>,
    out: &mut W,
) -> io::Result<u8>
where
    P: RamdiskPlatform,
    W: Write,
{
    if !privilege.is_privileged() {
        return report(out, &RamdiskError::InsufficientPrivileges);
    }

    let command = match cli::parse_command(args) {
        Ok(command) => command,
        Err(e) => return report(out, &e),
    };

    match command {
        Command::Mount => {
            writeln!(out, "Mounting...")?;
            match controller.mount() {
                Ok(()) => {
                    writeln!(out, "Successfully Mounted")?;
                    Ok(0)
                }
                Err(e) => {
                    let code = report(out, &e)?;
                    writeln!(out, "Error: Mounting Failed")?;
                    Ok(code)
                }
            }
        }
        Command::Unmount => {
            writeln!(out, "Unmounting...")?;
            match controller.unmount() {
                Ok(()) => {
                    writeln!(out, "Successfully Unmounted")?;
                    Ok(0)
                }
                Err(e) => {
                    let code = report(out, &e)?;
                    writeln!(out, "Error: Unmounting Failed")?;
                    Ok(code)
                }
            }
        }
        Command::Version => {
            cli::write_version(out)?;
            Ok(0)
        }
        Command::Help => {
            cli::write_help(out, controller.config())?;
            Ok(0)
        }
        Command::Invalid(arg) => report(out, &RamdiskError::InvalidCommand(arg)),
    }
}

fn report<W: Write>(out: &mut W, err: &RamdiskError) -> io::Result<u8> {
    match err {
        RamdiskError::InsufficientPrivileges
        | RamdiskError::TooFewArguments
        | RamdiskError::TooManyArguments
        | RamdiskError::InvalidCommand(_) => info!("Rejected invocation: {}", err),
        _ => error!("{}", err),
    }
    writeln!(out, "{}", err.report())?;
    Ok(err.exit_code())
}
