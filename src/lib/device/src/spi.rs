use log::error;

use crate::{limits::SPI_MAX_CHIPSELECT, ConfigError, PlatformLimits};

/// Devices attached to one SPI controller, at most one per chip select
pub type SpiDevices = heapless::Vec<SpiDevice, SPI_MAX_CHIPSELECT>;

/// How the controller drives a chip-select line
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChipSelectType {
    /// One of the controller's own CS pins
    Internal,
    /// A GPIO line driven by software
    External,
}

/// Controller-specific parameters of a single chip select
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpiControllerData {
    pub cs_type: ChipSelectType,
    /// CS pin for [`ChipSelectType::Internal`], GPIO line for
    /// [`ChipSelectType::External`]
    pub cs_line: u32,
}

impl SpiControllerData {
    pub const fn internal(cs_line: u32) -> Self {
        Self {
            cs_type: ChipSelectType::Internal,
            cs_line,
        }
    }
}

/// Platform data of an SPI controller
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpiBusConfig {
    bus_num: u8,
    num_chipselect: u8,
    use_hw_shiftreg: bool,
    max_hz: u32,
}

impl SpiBusConfig {
    pub fn new(
        limits: &PlatformLimits,
        bus_num: u8,
        num_chipselect: u8,
        use_hw_shiftreg: bool,
    ) -> Result<Self, ConfigError> {
        if bus_num >= limits.spi_buses {
            return Err(ConfigError::SpiBus {
                bus: bus_num,
                count: limits.spi_buses,
            });
        }
        let max = limits.spi_chipselects.min(SPI_MAX_CHIPSELECT as u8);
        if num_chipselect == 0 || num_chipselect > max {
            return Err(ConfigError::NumChipselect {
                count: num_chipselect,
                max,
            });
        }

        Ok(Self {
            bus_num,
            num_chipselect,
            use_hw_shiftreg,
            max_hz: limits.spi_max_hz,
        })
    }

    pub fn bus_num(&self) -> u8 {
        self.bus_num
    }

    pub fn num_chipselect(&self) -> u8 {
        self.num_chipselect
    }

    pub fn use_hw_shiftreg(&self) -> bool {
        self.use_hw_shiftreg
    }

    /// Highest clock a device on this bus may request
    pub fn max_hz(&self) -> u32 {
        self.max_hz
    }
}

/// A chip attached to an SPI controller
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpiDevice {
    bus_num: u8,
    chip_select: u8,
    max_speed_hz: u32,
    modalias: &'static str,
    controller_data: SpiControllerData,
}

impl SpiDevice {
    pub fn new(
        bus: &SpiBusConfig,
        chip_select: u8,
        max_speed_hz: u32,
        modalias: &'static str,
        controller_data: SpiControllerData,
    ) -> Result<Self, ConfigError> {
        if chip_select >= bus.num_chipselect {
            error!(
                "{}: chip select {} should be smaller than {}",
                modalias, chip_select, bus.num_chipselect
            );
            return Err(ConfigError::ChipSelect {
                bus: bus.bus_num,
                cs: chip_select,
                num_chipselect: bus.num_chipselect,
            });
        }
        if max_speed_hz == 0 || max_speed_hz > bus.max_hz {
            return Err(ConfigError::MaxSpeed {
                hz: max_speed_hz,
                max: bus.max_hz,
            });
        }
        if modalias.is_empty() {
            return Err(ConfigError::Modalias);
        }

        Ok(Self {
            bus_num: bus.bus_num,
            chip_select,
            max_speed_hz,
            modalias,
            controller_data,
        })
    }

    pub fn bus_num(&self) -> u8 {
        self.bus_num
    }

    pub fn chip_select(&self) -> u8 {
        self.chip_select
    }

    pub fn max_speed_hz(&self) -> u32 {
        self.max_speed_hz
    }

    /// Driver the device binds to, e.g. `m25p80`
    pub fn modalias(&self) -> &'static str {
        self.modalias
    }

    pub fn controller_data(&self) -> SpiControllerData {
        self.controller_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: PlatformLimits = PlatformLimits {
        spi_buses: 1,
        spi_chipselects: 3,
        spi_max_hz: 50_000_000,
        gpio_count: 30,
        macs: 2,
        mdio_buses: 2,
    };

    #[test]
    fn bus_is_bounded_by_the_soc() {
        assert!(SpiBusConfig::new(&LIMITS, 0, 3, true).is_ok());
        assert_eq!(
            SpiBusConfig::new(&LIMITS, 1, 3, true),
            Err(ConfigError::SpiBus { bus: 1, count: 1 })
        );
        assert_eq!(
            SpiBusConfig::new(&LIMITS, 0, 4, true),
            Err(ConfigError::NumChipselect { count: 4, max: 3 })
        );
        assert_eq!(
            SpiBusConfig::new(&LIMITS, 0, 0, true).unwrap_err().field(),
            "num_chipselect"
        );
    }

    #[test]
    fn chip_select_beyond_num_chipselect_is_rejected() {
        let bus = SpiBusConfig::new(&LIMITS, 0, 2, false).unwrap();
        let err = SpiDevice::new(&bus, 2, 25_000_000, "spidev", SpiControllerData::internal(2))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ChipSelect {
                bus: 0,
                cs: 2,
                num_chipselect: 2
            }
        );
        assert_eq!(err.field(), "chip_select");
    }

    #[test]
    fn clock_and_modalias_are_checked() {
        let bus = SpiBusConfig::new(&LIMITS, 0, 3, true).unwrap();
        assert_eq!(
            SpiDevice::new(&bus, 0, 80_000_000, "m25p80", SpiControllerData::internal(0)),
            Err(ConfigError::MaxSpeed {
                hz: 80_000_000,
                max: 50_000_000
            })
        );
        assert_eq!(
            SpiDevice::new(&bus, 0, 0, "m25p80", SpiControllerData::internal(0)),
            Err(ConfigError::MaxSpeed {
                hz: 0,
                max: 50_000_000
            })
        );
        assert_eq!(
            SpiDevice::new(&bus, 0, 25_000_000, "", SpiControllerData::internal(0)),
            Err(ConfigError::Modalias)
        );

        let flash =
            SpiDevice::new(&bus, 0, 25_000_000, "m25p80", SpiControllerData::internal(0)).unwrap();
        assert_eq!(flash.bus_num(), 0);
        assert_eq!(flash.modalias(), "m25p80");
        assert_eq!(flash.controller_data().cs_type, ChipSelectType::Internal);
    }
}
