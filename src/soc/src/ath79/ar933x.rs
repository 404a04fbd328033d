use device::PlatformLimits;

use super::AHB_CLK_HZ;

pub const GPIO_COUNT: u32 = 30;

/// SCK runs at AHB / (2 * (div + 1)) and the divider is at least 1
pub const SPI_MAX_HZ: u32 = AHB_CLK_HZ / 4;

pub const LIMITS: PlatformLimits = PlatformLimits {
    spi_buses: 1,
    spi_chipselects: 3,
    spi_max_hz: SPI_MAX_HZ,
    gpio_count: GPIO_COUNT,
    macs: 2,
    mdio_buses: 2,
};
