use alloc::vec::Vec;
use core::time::Duration;

use device::{EthernetPort, GpioButton, PeripheralDescriptor, SpiBusConfig, SpiDevices, Subsystem};
use global_data::Field;

/// One configure or register action of a board's bring-up sequence
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationStep {
    /// Merge `fields` into a shared configuration domain
    ApplyOverlay {
        domain: &'static str,
        fields: Vec<Field>,
    },
    RegisterSpiBus {
        bus: SpiBusConfig,
        devices: SpiDevices,
    },
    RegisterGpioButtons {
        poll_interval: Duration,
        buttons: Vec<GpioButton>,
    },
    ConfigurePhySwitch {
        enable: bool,
        enable_mii: bool,
    },
    RegisterMdioBus {
        bus: u8,
        exclusion_mask: u32,
    },
    /// Register a MAC from the current contents of its domain. `port` is
    /// the descriptor the domain was last filled from, if any.
    RegisterEthernet {
        mac: u8,
        port: Option<EthernetPort>,
    },
    RegisterWirelessMac,
    RegisterUsb,
    RegisterPci,
}

impl RegistrationStep {
    /// Subsystem a register step calls into, `None` for overlays
    pub fn subsystem(&self) -> Option<Subsystem> {
        Some(match self {
            Self::ApplyOverlay { .. } => return None,
            Self::RegisterSpiBus { bus, .. } => Subsystem::SpiBus(bus.bus_num()),
            Self::RegisterGpioButtons { .. } => Subsystem::GpioKeysPolled,
            Self::ConfigurePhySwitch { .. } => Subsystem::PhySwitch,
            Self::RegisterMdioBus { bus, .. } => Subsystem::MdioBus(*bus),
            Self::RegisterEthernet { mac, .. } => Subsystem::Ethernet(*mac),
            Self::RegisterWirelessMac => Subsystem::WirelessMac,
            Self::RegisterUsb => Subsystem::UsbHost,
            Self::RegisterPci => Subsystem::PciHost,
        })
    }

    /// Peripheral descriptors this step carries
    pub fn descriptors(&self) -> impl Iterator<Item = PeripheralDescriptor> + '_ {
        let spi = match self {
            Self::RegisterSpiBus { devices, .. } => &devices[..],
            _ => &[],
        };
        let buttons = match self {
            Self::RegisterGpioButtons { buttons, .. } => &buttons[..],
            _ => &[],
        };
        let port = match self {
            Self::RegisterEthernet { port, .. } => *port,
            _ => None,
        };
        spi.iter()
            .copied()
            .map(PeripheralDescriptor::from)
            .chain(buttons.iter().copied().map(PeripheralDescriptor::from))
            .chain(port.map(PeripheralDescriptor::from))
    }
}

impl core::fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Self::ApplyOverlay { domain, fields } = self {
            write!(f, "overlay {domain}:")?;
            for field in fields {
                write!(f, " {}", field.name())?;
            }
            return Ok(());
        }
        let Some(subsystem) = self.subsystem() else {
            return Ok(());
        };

        match self {
            Self::RegisterSpiBus { devices, .. } => {
                write!(f, "register {subsystem} ({} devices)", devices.len())
            }
            Self::RegisterGpioButtons {
                poll_interval,
                buttons,
            } => write!(
                f,
                "register {subsystem} ({} buttons, poll {} ms)",
                buttons.len(),
                poll_interval.as_millis()
            ),
            Self::ConfigurePhySwitch { enable, enable_mii } => {
                write!(f, "configure {subsystem} (enable {enable}, mii {enable_mii})")
            }
            Self::RegisterMdioBus { exclusion_mask, .. } => {
                write!(f, "register {subsystem} (exclude {exclusion_mask:#010x})")
            }
            _ => write!(f, "register {subsystem}"),
        }
    }
}
