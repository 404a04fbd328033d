//! Peripheral descriptors and the error vocabulary shared by subsystems
//!
//! Descriptors are validated against the SoC's [`PlatformLimits`] when they
//! are constructed and cannot be changed afterwards.
#![cfg_attr(not(test), no_std)]

mod descriptor;
mod error;
pub mod eth;
pub mod gpio;
pub mod limits;
pub mod spi;
mod subsystem;

pub use self::{
    descriptor::PeripheralDescriptor,
    error::{ConfigError, Error, ErrorKind, ErrorType},
    eth::{Duplex, EthernetPort, PhyMode, Speed},
    gpio::{GpioButton, Polarity},
    limits::PlatformLimits,
    spi::{ChipSelectType, SpiBusConfig, SpiControllerData, SpiDevice, SpiDevices},
    subsystem::{ParseSubsystemError, Subsystem},
};
