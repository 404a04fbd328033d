//! Registration entry points of the SoC subsystems
//!
//! The subsystems themselves live outside this workspace. [`Platform`] is
//! the boundary the bring-up sequencer calls through; [`sim::SimPlatform`]
//! stands in for real hardware on a host.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod platform;
pub mod sim;

pub use platform::Platform;
