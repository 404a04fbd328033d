use core::time::Duration;

use device::{ErrorType, GpioButton, SpiBusConfig, SpiDevice};
use global_data::{MacData, SwitchData};

/// Registration entry points of the SoC subsystem managers
///
/// Every call is synchronous and bounded. The implementation copies
/// whatever it keeps; nothing passed in outlives the call.
pub trait Platform: ErrorType {
    /// Register an SPI controller and the chips on its chip selects.
    /// `devices` never holds more entries than `bus.num_chipselect()`.
    fn register_spi_bus(
        &mut self,
        bus: &SpiBusConfig,
        devices: &[SpiDevice],
    ) -> Result<(), Self::Error>;
    /// Register a software-polled GPIO button input device
    fn register_gpio_buttons_polled(
        &mut self,
        poll_interval: Duration,
        buttons: &[GpioButton],
    ) -> Result<(), Self::Error>;
    /// Enable the integrated PHY switch and its MII interconnect, before
    /// any MAC registers
    fn configure_phy_switch(&mut self, enable: bool, enable_mii: bool) -> Result<(), Self::Error>;
    /// Register an MDIO bus. PHY addresses set in `exclusion_mask` are not
    /// scanned; they belong to other MACs or do not exist.
    fn register_mdio_bus(&mut self, bus: u8, exclusion_mask: u32) -> Result<(), Self::Error>;
    /// Register MAC `mac` with its platform data as merged so far
    fn register_ethernet_mac(
        &mut self,
        mac: u8,
        data: &MacData,
        switch: Option<&SwitchData>,
    ) -> Result<(), Self::Error>;
    fn register_wireless_mac(&mut self) -> Result<(), Self::Error>;
    fn register_usb_host(&mut self) -> Result<(), Self::Error>;
    fn register_pci_host(&mut self) -> Result<(), Self::Error>;
}

impl<T: Platform> Platform for &mut T {
    fn register_spi_bus(
        &mut self,
        bus: &SpiBusConfig,
        devices: &[SpiDevice],
    ) -> Result<(), Self::Error> {
        T::register_spi_bus(self, bus, devices)
    }

    fn register_gpio_buttons_polled(
        &mut self,
        poll_interval: Duration,
        buttons: &[GpioButton],
    ) -> Result<(), Self::Error> {
        T::register_gpio_buttons_polled(self, poll_interval, buttons)
    }

    fn configure_phy_switch(&mut self, enable: bool, enable_mii: bool) -> Result<(), Self::Error> {
        T::configure_phy_switch(self, enable, enable_mii)
    }

    fn register_mdio_bus(&mut self, bus: u8, exclusion_mask: u32) -> Result<(), Self::Error> {
        T::register_mdio_bus(self, bus, exclusion_mask)
    }

    fn register_ethernet_mac(
        &mut self,
        mac: u8,
        data: &MacData,
        switch: Option<&SwitchData>,
    ) -> Result<(), Self::Error> {
        T::register_ethernet_mac(self, mac, data, switch)
    }

    fn register_wireless_mac(&mut self) -> Result<(), Self::Error> {
        T::register_wireless_mac(self)
    }

    fn register_usb_host(&mut self) -> Result<(), Self::Error> {
        T::register_usb_host(self)
    }

    fn register_pci_host(&mut self) -> Result<(), Self::Error> {
        T::register_pci_host(self)
    }
}
