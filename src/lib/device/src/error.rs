use core::fmt::Debug;

use thiserror::Error as ThisError;

pub trait Error: Debug {
    fn kind(&self) -> ErrorKind;
}

/// Subsystem error kind that can be used across board implementations
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The function is unimplemented
    Unimplemented,
    /// The peripheral or a bus it depends on is not present
    NoDevice,
    /// The peripheral was already registered
    AlreadyRegistered,
    /// The subsystem rejected the supplied parameters
    InvalidArgument,
    /// The subsystem is busy
    Busy,
    /// The subsystem could not allocate resources
    NoMemory,
    /// The subsystem did not respond in time
    Timeout,
    /// Any other subsystem-specific failure
    Other,
}

impl Error for core::convert::Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unimplemented => write!(f, "The function is unimplemented"),
            Self::NoDevice => write!(f, "No such device"),
            Self::AlreadyRegistered => write!(f, "Device already registered"),
            Self::InvalidArgument => write!(f, "Invalid argument"),
            Self::Busy => write!(f, "Device or resource busy"),
            Self::NoMemory => write!(f, "Out of memory"),
            Self::Timeout => write!(f, "Timed out"),
            Self::Other => write!(f, "Subsystem failure"),
        }
    }
}

pub trait ErrorType {
    /// Error type
    type Error: Error;
}

impl<T: ErrorType> ErrorType for &mut T {
    type Error = T::Error;
}

/// A peripheral descriptor field is out of range for the platform.
///
/// Raised while a descriptor is being constructed, so no descriptor holding
/// an invalid value ever exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("bus_num {bus} is out of range (SoC has {count} SPI buses)")]
    SpiBus { bus: u8, count: u8 },
    #[error("num_chipselect {count} is out of range 1..={max}")]
    NumChipselect { count: u8, max: u8 },
    #[error("chip_select {cs} is out of range (spi{bus} has {num_chipselect} chip selects)")]
    ChipSelect { bus: u8, cs: u8, num_chipselect: u8 },
    #[error("chip_select {cs} is used more than once on spi{bus}")]
    DuplicateChipSelect { bus: u8, cs: u8 },
    #[error("max_speed_hz {hz} is out of range 1..={max}")]
    MaxSpeed { hz: u32, max: u32 },
    #[error("modalias must not be empty")]
    Modalias,
    #[error("gpio {gpio} is out of range (SoC has {count} GPIO lines)")]
    Gpio { gpio: u32, count: u32 },
    #[error("poll_interval must not be zero")]
    PollInterval,
    #[error("mdio bus {bus} is out of range (SoC has {count} MDIO buses)")]
    MdioBus { bus: u8, count: u8 },
    #[error("mac index {index} is out of range (SoC has {count} MACs)")]
    MacIndex { index: u8, count: u8 },
    #[error("phy_mask of eth{mac} must not be empty")]
    EmptyPhyMask { mac: u8 },
    #[error("phy_mask {mask:#x} of eth{mac} overlaps PHYs owned by eth{other}")]
    PhyMaskOverlap { mac: u8, other: u8, mask: u32 },
}

impl ConfigError {
    /// Name of the descriptor field that holds the offending value
    pub fn field(&self) -> &'static str {
        match self {
            Self::SpiBus { .. } => "bus_num",
            Self::NumChipselect { .. } => "num_chipselect",
            Self::ChipSelect { .. } | Self::DuplicateChipSelect { .. } => "chip_select",
            Self::MaxSpeed { .. } => "max_speed_hz",
            Self::Modalias => "modalias",
            Self::Gpio { .. } => "gpio",
            Self::PollInterval => "poll_interval",
            Self::MdioBus { .. } => "mdio_bus",
            Self::MacIndex { .. } => "mac_index",
            Self::EmptyPhyMask { .. } | Self::PhyMaskOverlap { .. } => "phy_mask",
        }
    }
}
