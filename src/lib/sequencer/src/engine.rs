use bootstate::BringUpState;
use device::{Error as _, Subsystem};
use drivers::Platform;
use global_data::{mac_domain, SharedPlatformConfig};
use log::{error, info};

use crate::{BoardProfile, BringUpError, RegistrationError, RegistrationStep};

/// Executes a board profile against a platform, one step at a time
///
/// A sequencer runs a single profile, once. Steps are never reordered or
/// retried; the first failing step aborts the rest of the sequence.
pub struct Sequencer<P> {
    platform: P,
    config: SharedPlatformConfig,
    state: BringUpState<BringUpError>,
}

impl<P: Platform> Sequencer<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            config: SharedPlatformConfig::new(),
            state: BringUpState::NotStarted,
        }
    }

    pub fn state(&self) -> &BringUpState<BringUpError> {
        &self.state
    }

    /// Shared configuration as the last executed step left it
    pub fn config(&self) -> &SharedPlatformConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    pub fn run(&mut self, profile: BoardProfile) -> Result<(), BringUpError> {
        if self.state != BringUpState::NotStarted {
            return Err(BringUpError::AlreadyRun);
        }

        let (info, config, steps) = profile.into_parts();
        self.config = config;
        info!("{}: bring-up of {} steps", info, steps.len());

        for (index, step) in steps.iter().enumerate() {
            self.state.advance(index)?;
            info!("[{}] {}", index, step);
            if let Err(err) = self.execute(index, step) {
                error!("{}: bring-up aborted: {}", info.mach_id(), err);
                self.state.abort(err)?;
                return Err(err);
            }
        }

        self.state.complete()?;
        info!("{}: bring-up complete", info.mach_id());
        Ok(())
    }

    fn execute(&mut self, index: usize, step: &RegistrationStep) -> Result<(), BringUpError> {
        let platform = &mut self.platform;
        let (subsystem, result) = match step {
            RegistrationStep::ApplyOverlay { domain, fields } => {
                return self
                    .config
                    .apply_overlay(*domain, fields)
                    .map_err(|err| BringUpError::overlay(index, err));
            }
            RegistrationStep::RegisterSpiBus { bus, devices } => (
                Subsystem::SpiBus(bus.bus_num()),
                platform.register_spi_bus(bus, devices),
            ),
            RegistrationStep::RegisterGpioButtons {
                poll_interval,
                buttons,
            } => (
                Subsystem::GpioKeysPolled,
                platform.register_gpio_buttons_polled(*poll_interval, buttons),
            ),
            RegistrationStep::ConfigurePhySwitch { enable, enable_mii } => (
                Subsystem::PhySwitch,
                platform.configure_phy_switch(*enable, *enable_mii),
            ),
            RegistrationStep::RegisterMdioBus {
                bus,
                exclusion_mask,
            } => (
                Subsystem::MdioBus(*bus),
                platform.register_mdio_bus(*bus, *exclusion_mask),
            ),
            RegistrationStep::RegisterEthernet { mac, .. } => {
                let domain = mac_domain(*mac).ok_or(BringUpError::NoMacDomain {
                    step: index,
                    mac: *mac,
                })?;
                let data = self.config.mac(*mac).ok_or(BringUpError::UnknownDomain {
                    step: index,
                    domain,
                })?;
                (
                    Subsystem::Ethernet(*mac),
                    platform.register_ethernet_mac(*mac, data, self.config.switch()),
                )
            }
            RegistrationStep::RegisterWirelessMac => {
                (Subsystem::WirelessMac, platform.register_wireless_mac())
            }
            RegistrationStep::RegisterUsb => (Subsystem::UsbHost, platform.register_usb_host()),
            RegistrationStep::RegisterPci => (Subsystem::PciHost, platform.register_pci_host()),
        };

        result.map_err(|err| {
            RegistrationError {
                step: index,
                subsystem,
                cause: err.kind(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivers::sim::SimPlatform;
    use soc::ath79::LIMITS;

    #[test]
    fn mac_without_a_domain_is_named_by_index() {
        let mut seq = Sequencer::new(SimPlatform::new(LIMITS));
        let step = RegistrationStep::RegisterEthernet { mac: 9, port: None };
        assert_eq!(
            seq.execute(4, &step),
            Err(BringUpError::NoMacDomain { step: 4, mac: 9 })
        );

        let step = RegistrationStep::RegisterEthernet { mac: 0, port: None };
        assert_eq!(
            seq.execute(5, &step),
            Err(BringUpError::UnknownDomain {
                step: 5,
                domain: "eth0"
            })
        );
        assert!(seq.platform().calls().is_empty());
    }
}
