use alloc::{collections::BTreeMap, vec::Vec};
use core::time::Duration;

use device::{
    ErrorKind, ErrorType, GpioButton, PlatformLimits, SpiBusConfig, SpiDevice, SpiDevices,
    Subsystem,
};
use global_data::{MacData, SwitchData};
use log::{info, trace, warn};
use util::set_bits;

use crate::Platform;

mod call;

pub use call::Call;

/// Host stand-in for the SoC subsystem managers
///
/// Records every call it receives, in order, and checks the preconditions
/// the real subsystems rely on: each subsystem registers once, buses exist
/// on the SoC, and a MAC only attaches to PHYs an MDIO bus has scanned.
/// Individual subsystems can be made to fail.
pub struct SimPlatform {
    limits: PlatformLimits,
    calls: Vec<Call>,
    failures: BTreeMap<Subsystem, ErrorKind>,
    registered: Vec<Subsystem>,
    /// Addresses scanned on each registered MDIO bus
    scanned_phys: BTreeMap<u8, u32>,
}

impl SimPlatform {
    pub fn new(limits: PlatformLimits) -> Self {
        Self {
            limits,
            calls: Vec::new(),
            failures: BTreeMap::new(),
            registered: Vec::new(),
            scanned_phys: BTreeMap::new(),
        }
    }

    /// Make every registration addressed to `subsystem` fail with `kind`
    pub fn fail_on(&mut self, subsystem: Subsystem, kind: ErrorKind) -> &mut Self {
        self.failures.insert(subsystem, kind);
        self
    }

    /// Calls received so far, including ones that failed
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Subsystems addressed so far, in call order
    pub fn call_order(&self) -> Vec<Subsystem> {
        self.calls.iter().map(Call::subsystem).collect()
    }

    pub fn is_registered(&self, subsystem: Subsystem) -> bool {
        self.registered.contains(&subsystem)
    }

    fn record(&mut self, call: Call) -> Result<Subsystem, ErrorKind> {
        let subsystem = call.subsystem();
        trace!("{}: {:?}", subsystem, call);
        self.calls.push(call);

        if let Some(kind) = self.failures.get(&subsystem) {
            warn!("{}: injected failure: {}", subsystem, kind);
            return Err(*kind);
        }
        if self.is_registered(subsystem) {
            return Err(ErrorKind::AlreadyRegistered);
        }
        Ok(subsystem)
    }

    fn registered(&mut self, subsystem: Subsystem) {
        info!("{}: registered", subsystem);
        self.registered.push(subsystem);
    }
}

impl ErrorType for SimPlatform {
    type Error = ErrorKind;
}

impl Platform for SimPlatform {
    fn register_spi_bus(
        &mut self,
        bus: &SpiBusConfig,
        devices: &[SpiDevice],
    ) -> Result<(), Self::Error> {
        let list = SpiDevices::from_slice(devices).map_err(|_| ErrorKind::InvalidArgument)?;
        let subsystem = self.record(Call::SpiBus {
            bus: *bus,
            devices: list,
        })?;

        if bus.bus_num() >= self.limits.spi_buses {
            return Err(ErrorKind::NoDevice);
        }
        if devices.len() > bus.num_chipselect() as usize
            || devices.iter().any(|dev| dev.bus_num() != bus.bus_num())
        {
            return Err(ErrorKind::InvalidArgument);
        }
        for dev in devices {
            info!(
                "{}.{}: {} @ {} Hz",
                subsystem,
                dev.chip_select(),
                dev.modalias(),
                dev.max_speed_hz()
            );
        }
        self.registered(subsystem);
        Ok(())
    }

    fn register_gpio_buttons_polled(
        &mut self,
        poll_interval: Duration,
        buttons: &[GpioButton],
    ) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::GpioKeysPolled {
            poll_interval,
            buttons: buttons.to_vec(),
        })?;

        if buttons.is_empty() || poll_interval.is_zero() {
            return Err(ErrorKind::InvalidArgument);
        }
        if let Some(button) = buttons.iter().find(|b| b.gpio() >= self.limits.gpio_count) {
            warn!("{}: gpio {} does not exist", button.desc(), button.gpio());
            return Err(ErrorKind::NoDevice);
        }
        self.registered(subsystem);
        Ok(())
    }

    fn configure_phy_switch(&mut self, enable: bool, enable_mii: bool) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::PhySwitch { enable, enable_mii })?;
        self.registered(subsystem);
        Ok(())
    }

    fn register_mdio_bus(&mut self, bus: u8, exclusion_mask: u32) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::MdioBus {
            bus,
            exclusion_mask,
        })?;

        if bus >= self.limits.mdio_buses {
            return Err(ErrorKind::NoDevice);
        }
        self.scanned_phys.insert(bus, !exclusion_mask);
        self.registered(subsystem);
        Ok(())
    }

    fn register_ethernet_mac(
        &mut self,
        mac: u8,
        data: &MacData,
        switch: Option<&SwitchData>,
    ) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::Ethernet {
            mac,
            data: *data,
            switch: switch.copied(),
        })?;

        if mac >= self.limits.macs {
            return Err(ErrorKind::NoDevice);
        }
        let scanned = self.scanned_phys.values().fold(0, |acc, mask| acc | mask);
        if data.phy_mask == 0 || data.phy_mask & !scanned != 0 {
            warn!("{}: no MDIO bus scans PHYs {:#x}", subsystem, data.phy_mask);
            return Err(ErrorKind::NoDevice);
        }
        for phy in set_bits(data.phy_mask) {
            info!("{}: attached to PHY {}", subsystem, phy);
        }
        self.registered(subsystem);
        Ok(())
    }

    fn register_wireless_mac(&mut self) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::WirelessMac)?;
        self.registered(subsystem);
        Ok(())
    }

    fn register_usb_host(&mut self) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::UsbHost)?;
        self.registered(subsystem);
        Ok(())
    }

    fn register_pci_host(&mut self) -> Result<(), Self::Error> {
        let subsystem = self.record(Call::PciHost)?;
        self.registered(subsystem);
        Ok(())
    }
}
