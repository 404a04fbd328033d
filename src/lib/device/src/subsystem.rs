use core::{fmt, str::FromStr};

use thiserror::Error;

/// Identifies the subsystem a registration call is addressed to
///
/// The `Display` form is the name the subsystem is known by in logs and
/// errors, e.g. `spi0`, `eth1` or `gpio-keys-polled`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Subsystem {
    /// SPI controller and its chip selects
    SpiBus(u8),
    /// Software-polled GPIO button input device
    GpioKeysPolled,
    /// Integrated PHY switch and its MII interconnect
    PhySwitch,
    /// MDIO management bus
    MdioBus(u8),
    /// Ethernet MAC
    Ethernet(u8),
    /// Wireless MAC
    WirelessMac,
    /// USB host controller
    UsbHost,
    /// PCI host bridge
    PciHost,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpiBus(bus) => write!(f, "spi{bus}"),
            Self::GpioKeysPolled => write!(f, "gpio-keys-polled"),
            Self::PhySwitch => write!(f, "phy-switch"),
            Self::MdioBus(bus) => write!(f, "mdio{bus}"),
            Self::Ethernet(mac) => write!(f, "eth{mac}"),
            Self::WirelessMac => write!(f, "wmac"),
            Self::UsbHost => write!(f, "usb"),
            Self::PciHost => write!(f, "pci"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unknown subsystem name")]
pub struct ParseSubsystemError;

impl FromStr for Subsystem {
    type Err = ParseSubsystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpio-keys-polled" => return Ok(Self::GpioKeysPolled),
            "phy-switch" => return Ok(Self::PhySwitch),
            "wmac" => return Ok(Self::WirelessMac),
            "usb" => return Ok(Self::UsbHost),
            "pci" => return Ok(Self::PciHost),
            _ => {}
        }

        let indexed: [(&str, fn(u8) -> Self); 3] = [
            ("spi", Self::SpiBus),
            ("mdio", Self::MdioBus),
            ("eth", Self::Ethernet),
        ];
        for (prefix, ctor) in indexed {
            if let Some(index) = s.strip_prefix(prefix) {
                return index.parse().map(ctor).map_err(|_| ParseSubsystemError);
            }
        }
        Err(ParseSubsystemError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for subsystem in [
            Subsystem::SpiBus(0),
            Subsystem::GpioKeysPolled,
            Subsystem::PhySwitch,
            Subsystem::MdioBus(1),
            Subsystem::Ethernet(1),
            Subsystem::WirelessMac,
            Subsystem::UsbHost,
            Subsystem::PciHost,
        ] {
            assert_eq!(subsystem.to_string().parse(), Ok(subsystem));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!("eth".parse::<Subsystem>(), Err(ParseSubsystemError));
        assert_eq!("ethx".parse::<Subsystem>(), Err(ParseSubsystemError));
        assert_eq!("leds".parse::<Subsystem>(), Err(ParseSubsystemError));
    }
}
