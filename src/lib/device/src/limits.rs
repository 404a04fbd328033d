/// Upper bound on chip selects of any supported SPI controller. Sizes the
/// per-bus device list.
pub const SPI_MAX_CHIPSELECT: usize = 8;

/// Upper bound on MACs of any supported SoC
pub const MAX_MACS: u8 = 4;

/// Hardware limits a SoC imposes on peripheral descriptors
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlatformLimits {
    /// Number of SPI controllers
    pub spi_buses: u8,
    /// Chip-select lines per SPI controller
    pub spi_chipselects: u8,
    /// Highest SPI clock the controller can generate
    pub spi_max_hz: u32,
    /// Number of GPIO lines
    pub gpio_count: u32,
    /// Number of Ethernet MACs
    pub macs: u8,
    /// Number of MDIO buses
    pub mdio_buses: u8,
}
