// ============================================================================
// File: src/lib.rs
// ----------------------------------------------------------------------------
// Mount and unmount a fixed-size tmpfs ramdisk at a well-known location.
//
// Contents are lost on unmount and on power loss. Mounting requires root.
// ============================================================================

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod linux;
pub mod platform;

#[cfg(test)]
mod testing;

pub use app::run;
pub use config::RamdiskConfig;
pub use controller::RamdiskController;
pub use error::{RamdiskError, Result};
