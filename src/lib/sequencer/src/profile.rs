use alloc::{collections::BTreeMap, vec::Vec};
use core::time::Duration;

use device::{
    ConfigError, EthernetPort, GpioButton, PeripheralDescriptor, PlatformLimits, SpiBusConfig,
    SpiDevice, SpiDevices,
};
use global_data::{
    mac_domain, mac_index, BoardInfo, DomainKind, DomainRecord, Field, SharedPlatformConfig,
};
use util::bits_disjoint;

use crate::{ProfileError, RegistrationStep};

/// Everything a board needs brought up, in the order it must happen
///
/// Only [`BoardProfileBuilder::build`] creates profiles, so every profile
/// has passed validation. The shared configuration domains are created with
/// their defaults at the same time.
#[derive(Clone, Debug)]
pub struct BoardProfile {
    info: BoardInfo,
    limits: PlatformLimits,
    config: SharedPlatformConfig,
    steps: Vec<RegistrationStep>,
}

impl BoardProfile {
    /// Start a profile for a board built around a SoC with `limits`
    pub fn builder(info: BoardInfo, limits: PlatformLimits) -> BoardProfileBuilder {
        BoardProfileBuilder {
            info,
            limits,
            domains: Vec::new(),
            steps: Vec::new(),
            deferred: None,
        }
    }

    pub fn info(&self) -> &BoardInfo {
        &self.info
    }

    pub fn limits(&self) -> &PlatformLimits {
        &self.limits
    }

    pub fn steps(&self) -> &[RegistrationStep] {
        &self.steps
    }

    /// Declared configuration domains with their defaults
    pub fn domains(&self) -> impl Iterator<Item = (&'static str, DomainKind)> + '_ {
        self.config
            .domains()
            .map(|(name, record)| (name, record.kind()))
    }

    /// All peripheral descriptors, in step order
    pub fn descriptors(&self) -> impl Iterator<Item = PeripheralDescriptor> + '_ {
        self.steps.iter().flat_map(RegistrationStep::descriptors)
    }

    pub(crate) fn into_parts(self) -> (BoardInfo, SharedPlatformConfig, Vec<RegistrationStep>) {
        (self.info, self.config, self.steps)
    }
}

/// Composes a [`BoardProfile`] one step at a time
///
/// Problems are collected and reported by [`build`](Self::build), so a board
/// file reads as a single chain of calls.
#[derive(Clone, Debug)]
pub struct BoardProfileBuilder {
    info: BoardInfo,
    limits: PlatformLimits,
    domains: Vec<(&'static str, DomainKind)>,
    steps: Vec<RegistrationStep>,
    deferred: Option<ProfileError>,
}

impl BoardProfileBuilder {
    /// Declare a shared configuration domain. Steps may only refer to
    /// declared domains.
    pub fn domain(mut self, name: &'static str, kind: DomainKind) -> Self {
        self.domains.push((name, kind));
        self
    }

    pub fn step(mut self, step: RegistrationStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn overlay(self, domain: &'static str, fields: impl IntoIterator<Item = Field>) -> Self {
        self.step(RegistrationStep::ApplyOverlay {
            domain,
            fields: fields.into_iter().collect(),
        })
    }

    pub fn spi_bus(
        mut self,
        bus: SpiBusConfig,
        devices: impl IntoIterator<Item = SpiDevice>,
    ) -> Self {
        let mut list = SpiDevices::new();
        let mut count = 0;
        for dev in devices {
            count += 1;
            // overflow is reported by build()
            let _ = list.push(dev);
        }
        if count > list.len() {
            self.defer(ProfileError::SpiDeviceCount {
                step: self.steps.len(),
                bus: bus.bus_num(),
                count,
                num_chipselect: bus.num_chipselect(),
            });
        }
        self.step(RegistrationStep::RegisterSpiBus { bus, devices: list })
    }

    pub fn gpio_buttons(
        self,
        poll_interval: Duration,
        buttons: impl IntoIterator<Item = GpioButton>,
    ) -> Self {
        self.step(RegistrationStep::RegisterGpioButtons {
            poll_interval,
            buttons: buttons.into_iter().collect(),
        })
    }

    pub fn phy_switch(self, enable: bool, enable_mii: bool) -> Self {
        self.step(RegistrationStep::ConfigurePhySwitch { enable, enable_mii })
    }

    pub fn mdio_bus(self, bus: u8, exclusion_mask: u32) -> Self {
        self.step(RegistrationStep::RegisterMdioBus {
            bus,
            exclusion_mask,
        })
    }

    /// Register MAC `mac` with whatever its domain holds at that point.
    /// An earlier overlay must have given it a PHY mask.
    pub fn ethernet_mac(self, mac: u8) -> Self {
        self.step(RegistrationStep::RegisterEthernet { mac, port: None })
    }

    /// Write `port` into its MAC's domain, then register the MAC
    pub fn ethernet(mut self, port: EthernetPort) -> Self {
        match mac_domain(port.mac()) {
            Some(domain) => self
                .overlay(domain, Field::from_port(&port))
                .step(RegistrationStep::RegisterEthernet {
                    mac: port.mac(),
                    port: Some(port),
                }),
            None => {
                self.defer(ProfileError::NoMacDomain {
                    step: self.steps.len(),
                    mac: port.mac(),
                });
                self
            }
        }
    }

    pub fn wireless_mac(self) -> Self {
        self.step(RegistrationStep::RegisterWirelessMac)
    }

    pub fn usb(self) -> Self {
        self.step(RegistrationStep::RegisterUsb)
    }

    pub fn pci(self) -> Self {
        self.step(RegistrationStep::RegisterPci)
    }

    fn defer(&mut self, err: ProfileError) {
        self.deferred.get_or_insert(err);
    }

    pub fn build(self) -> Result<BoardProfile, ProfileError> {
        if let Some(err) = self.deferred {
            return Err(err);
        }

        let mut config = SharedPlatformConfig::new();
        for &(name, kind) in &self.domains {
            config
                .declare(name, kind)
                .map_err(|_| ProfileError::DuplicateDomain(name))?;
        }

        let mut phy_masks = BTreeMap::new();
        for (step, action) in self.steps.iter().enumerate() {
            validate_step(&self.limits, &config, &mut phy_masks, step, action)?;
        }

        Ok(BoardProfile {
            info: self.info,
            limits: self.limits,
            config,
            steps: self.steps,
        })
    }
}

fn domain_kind(
    config: &SharedPlatformConfig,
    step: usize,
    domain: &'static str,
) -> Result<DomainKind, ProfileError> {
    config
        .read(domain)
        .map(DomainRecord::kind)
        .ok_or(ProfileError::UndeclaredDomain { step, domain })
}

/// `phy_masks` tracks the last PHY mask each MAC was given so far. All MACs
/// share one MDIO address space.
fn validate_step(
    limits: &PlatformLimits,
    config: &SharedPlatformConfig,
    phy_masks: &mut BTreeMap<u8, u32>,
    step: usize,
    action: &RegistrationStep,
) -> Result<(), ProfileError> {
    match action {
        RegistrationStep::ApplyOverlay { domain, fields } => {
            let domain = *domain;
            let found = domain_kind(config, step, domain)?;
            if let Some(field) = fields.iter().find(|f| f.kind() != found) {
                return Err(ProfileError::KindMismatch {
                    step,
                    domain,
                    expected: field.kind(),
                    found,
                });
            }

            let Some(mac) = mac_index(domain) else {
                return Ok(());
            };
            for field in fields {
                if let Field::PhyMask(mask) = field {
                    if let Some((other, _)) = phy_masks
                        .iter()
                        .find(|(other, owned)| **other != mac && !bits_disjoint(**owned, *mask))
                    {
                        return Err(ProfileError::Config {
                            step,
                            source: ConfigError::PhyMaskOverlap {
                                mac,
                                other: *other,
                                mask: *mask,
                            },
                        });
                    }
                    phy_masks.insert(mac, *mask);
                }
            }
        }
        RegistrationStep::RegisterSpiBus { bus, devices } => {
            if devices.len() > bus.num_chipselect() as usize {
                return Err(ProfileError::SpiDeviceCount {
                    step,
                    bus: bus.bus_num(),
                    count: devices.len(),
                    num_chipselect: bus.num_chipselect(),
                });
            }
            for (i, dev) in devices.iter().enumerate() {
                if dev.bus_num() != bus.bus_num() {
                    return Err(ProfileError::SpiBusMismatch {
                        step,
                        bus: bus.bus_num(),
                        device_bus: dev.bus_num(),
                    });
                }
                if devices[..i]
                    .iter()
                    .any(|prev| prev.chip_select() == dev.chip_select())
                {
                    return Err(ProfileError::Config {
                        step,
                        source: ConfigError::DuplicateChipSelect {
                            bus: bus.bus_num(),
                            cs: dev.chip_select(),
                        },
                    });
                }
            }
        }
        RegistrationStep::RegisterGpioButtons {
            poll_interval,
            buttons,
        } => {
            if buttons.is_empty() {
                return Err(ProfileError::NoGpioButtons { step });
            }
            if poll_interval.is_zero() {
                return Err(ProfileError::Config {
                    step,
                    source: ConfigError::PollInterval,
                });
            }
        }
        RegistrationStep::RegisterEthernet { mac, .. } => {
            let mac = *mac;
            if mac >= limits.macs {
                return Err(ProfileError::Config {
                    step,
                    source: ConfigError::MacIndex {
                        index: mac,
                        count: limits.macs,
                    },
                });
            }
            let domain = mac_domain(mac).ok_or(ProfileError::NoMacDomain { step, mac })?;
            let found = domain_kind(config, step, domain)?;
            if found != DomainKind::Mac {
                return Err(ProfileError::KindMismatch {
                    step,
                    domain,
                    expected: DomainKind::Mac,
                    found,
                });
            }
            if phy_masks.get(&mac).map_or(true, |mask| *mask == 0) {
                return Err(ProfileError::Config {
                    step,
                    source: ConfigError::EmptyPhyMask { mac },
                });
            }
        }
        RegistrationStep::RegisterMdioBus { bus, .. } => {
            if *bus >= limits.mdio_buses {
                return Err(ProfileError::Config {
                    step,
                    source: ConfigError::MdioBus {
                        bus: *bus,
                        count: limits.mdio_buses,
                    },
                });
            }
        }
        RegistrationStep::ConfigurePhySwitch { .. }
        | RegistrationStep::RegisterWirelessMac
        | RegistrationStep::RegisterUsb
        | RegistrationStep::RegisterPci => {}
    }
    Ok(())
}
