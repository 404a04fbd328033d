use alloc::vec::Vec;
use core::time::Duration;

use device::{GpioButton, SpiBusConfig, SpiDevices, Subsystem};
use global_data::{MacData, SwitchData};

/// One registration call as the simulated platform received it
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    SpiBus {
        bus: SpiBusConfig,
        devices: SpiDevices,
    },
    GpioKeysPolled {
        poll_interval: Duration,
        buttons: Vec<GpioButton>,
    },
    PhySwitch {
        enable: bool,
        enable_mii: bool,
    },
    MdioBus {
        bus: u8,
        exclusion_mask: u32,
    },
    Ethernet {
        mac: u8,
        data: MacData,
        switch: Option<SwitchData>,
    },
    WirelessMac,
    UsbHost,
    PciHost,
}

impl Call {
    pub fn subsystem(&self) -> Subsystem {
        match self {
            Self::SpiBus { bus, .. } => Subsystem::SpiBus(bus.bus_num()),
            Self::GpioKeysPolled { .. } => Subsystem::GpioKeysPolled,
            Self::PhySwitch { .. } => Subsystem::PhySwitch,
            Self::MdioBus { bus, .. } => Subsystem::MdioBus(*bus),
            Self::Ethernet { mac, .. } => Subsystem::Ethernet(*mac),
            Self::WirelessMac => Subsystem::WirelessMac,
            Self::UsbHost => Subsystem::UsbHost,
            Self::PciHost => Subsystem::PciHost,
        }
    }
}
