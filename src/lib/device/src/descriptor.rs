use crate::{EthernetPort, GpioButton, SpiDevice};

/// Any of the peripheral instances a board describes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PeripheralDescriptor {
    SpiDevice(SpiDevice),
    GpioButton(GpioButton),
    EthernetPort(EthernetPort),
}

impl From<SpiDevice> for PeripheralDescriptor {
    fn from(dev: SpiDevice) -> Self {
        Self::SpiDevice(dev)
    }
}

impl From<GpioButton> for PeripheralDescriptor {
    fn from(button: GpioButton) -> Self {
        Self::GpioButton(button)
    }
}

impl From<EthernetPort> for PeripheralDescriptor {
    fn from(port: EthernetPort) -> Self {
        Self::EthernetPort(port)
    }
}
