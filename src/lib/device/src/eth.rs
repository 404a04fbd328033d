use crate::{ConfigError, PlatformLimits};

/// MAC to PHY interface
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhyMode {
    Mii,
    Gmii,
    Rmii,
    Rgmii,
    Sgmii,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Duplex {
    Half,
    Full,
}

/// Link speed, either forced or negotiated by the PHY
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Speed {
    Auto,
    Mbps10,
    Mbps100,
    Mbps1000,
}

/// An Ethernet MAC together with the PHYs it owns on the MDIO bus
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EthernetPort {
    mac: u8,
    phy_if_mode: PhyMode,
    duplex: Duplex,
    speed: Speed,
    phy_mask: u32,
}

impl EthernetPort {
    pub fn new(
        limits: &PlatformLimits,
        mac: u8,
        phy_if_mode: PhyMode,
        duplex: Duplex,
        speed: Speed,
        phy_mask: u32,
    ) -> Result<Self, ConfigError> {
        if mac >= limits.macs {
            return Err(ConfigError::MacIndex {
                index: mac,
                count: limits.macs,
            });
        }
        if phy_mask == 0 {
            return Err(ConfigError::EmptyPhyMask { mac });
        }

        Ok(Self {
            mac,
            phy_if_mode,
            duplex,
            speed,
            phy_mask,
        })
    }

    pub fn mac(&self) -> u8 {
        self.mac
    }

    pub fn phy_if_mode(&self) -> PhyMode {
        self.phy_if_mode
    }

    pub fn duplex(&self) -> Duplex {
        self.duplex
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// One bit per MDIO address owned by this MAC
    pub fn phy_mask(&self) -> u32 {
        self.phy_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use util::bit;

    const LIMITS: PlatformLimits = PlatformLimits {
        spi_buses: 1,
        spi_chipselects: 3,
        spi_max_hz: 50_000_000,
        gpio_count: 30,
        macs: 2,
        mdio_buses: 2,
    };

    #[test]
    fn rejects_missing_phys_and_unknown_macs() {
        assert_eq!(
            EthernetPort::new(&LIMITS, 0, PhyMode::Mii, Duplex::Full, Speed::Mbps100, 0),
            Err(ConfigError::EmptyPhyMask { mac: 0 })
        );
        assert_eq!(
            EthernetPort::new(&LIMITS, 2, PhyMode::Gmii, Duplex::Full, Speed::Auto, bit(1)),
            Err(ConfigError::MacIndex { index: 2, count: 2 })
        );
    }

    #[test]
    fn keeps_the_requested_link() {
        let wan =
            EthernetPort::new(&LIMITS, 0, PhyMode::Mii, Duplex::Full, Speed::Mbps100, bit(0))
                .unwrap();
        assert_eq!(wan.mac(), 0);
        assert_eq!(wan.speed(), Speed::Mbps100);
        assert_eq!(wan.phy_mask(), 0b01);
    }
}
