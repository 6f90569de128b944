use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use env_logger::Env;
use log::error;

use ramdisk::linux::{LinuxRamdisk, RootPrivilege};
use ramdisk::{RamdiskConfig, RamdiskController};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("RAMDISK_LOG", "warn")).init();

    match try_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn try_main() -> anyhow::Result<u8> {
    // every word is handed over untouched, `--` and non-UTF-8 included
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let controller = RamdiskController::new(RamdiskConfig::default(), LinuxRamdisk::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = ramdisk::run(&args, &RootPrivilege, &controller, &mut out)
        .context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(code)
}
