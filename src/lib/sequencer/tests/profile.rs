mod common;

use device::{
    ConfigError, Duplex, EthernetPort, PeripheralDescriptor, PhyMode, PlatformLimits, Speed,
};
use global_data::{DomainKind, Field, SWITCH_DOMAIN};
use sequencer::{BoardProfile, ProfileError, RegistrationStep};
use util::bit;

use common::*;

fn port(mac: u8, phy_mask: u32) -> EthernetPort {
    EthernetPort::new(&LIMITS, mac, PhyMode::Mii, Duplex::Full, Speed::Auto, phy_mask).unwrap()
}

#[test]
fn overlay_must_target_a_declared_domain() {
    let err = builder()
        .usb()
        .overlay("eth2", [Field::PhyMask(bit(2))])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::UndeclaredDomain {
            step: 1,
            domain: "eth2"
        }
    );
}

#[test]
fn overlay_fields_must_match_the_domain() {
    let err = builder()
        .overlay(SWITCH_DOMAIN, [Field::Duplex(Duplex::Half)])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::KindMismatch {
            step: 0,
            domain: SWITCH_DOMAIN,
            expected: DomainKind::Mac,
            found: DomainKind::Switch,
        }
    );
}

#[test]
fn mac_needs_a_declared_domain() {
    let err = BoardProfile::builder(global_data::BoardInfo::new("BARE", "No domains"), LIMITS)
        .ethernet_mac(0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::UndeclaredDomain {
            step: 0,
            domain: "eth0"
        }
    );

    // more MACs than there are configuration domains
    let limits = PlatformLimits { macs: 8, ..LIMITS };
    let err = BoardProfile::builder(global_data::BoardInfo::new("WIDE", "Many MACs"), limits)
        .ethernet_mac(5)
        .build()
        .unwrap_err();
    assert_eq!(err, ProfileError::NoMacDomain { step: 0, mac: 5 });
}

#[test]
fn mac_must_exist_on_the_soc() {
    let err = builder()
        .overlay("eth0", [Field::PhyMask(bit(0))])
        .ethernet_mac(2)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 1,
            source: ConfigError::MacIndex { index: 2, count: 2 }
        }
    );
}

#[test]
fn mac_needs_phys_before_it_registers() {
    let err = builder()
        .mdio_bus(0, !(bit(0) | bit(1)))
        .ethernet_mac(0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 1,
            source: ConfigError::EmptyPhyMask { mac: 0 }
        }
    );

    // clearing the mask again is no better
    let err = builder()
        .overlay("eth1", [Field::PhyMask(bit(1))])
        .overlay("eth1", [Field::PhyMask(0)])
        .ethernet_mac(1)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 2,
            source: ConfigError::EmptyPhyMask { mac: 1 }
        }
    );
}

#[test]
fn mdio_bus_must_exist_on_the_soc() {
    let err = builder().mdio_bus(7, 0).build().unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 0,
            source: ConfigError::MdioBus { bus: 7, count: 2 }
        }
    );
    assert!(builder().mdio_bus(1, 0).build().is_ok());
}

#[test]
fn domains_are_declared_once() {
    let err = builder()
        .domain("eth0", DomainKind::Mac)
        .build()
        .unwrap_err();
    assert_eq!(err, ProfileError::DuplicateDomain("eth0"));
}

#[test]
fn button_list_must_not_be_empty() {
    let err = builder().gpio_buttons(POLL, []).build().unwrap_err();
    assert_eq!(err, ProfileError::NoGpioButtons { step: 0 });

    let err = builder()
        .gpio_buttons(core::time::Duration::ZERO, [reset_button()])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 0,
            source: ConfigError::PollInterval
        }
    );
}

#[test]
fn spi_devices_fit_the_chip_selects() {
    let wide = spi_bus(3);
    let devices = [flash(&wide, 0), flash(&wide, 1), flash(&wide, 2)];

    let err = builder()
        .spi_bus(spi_bus(2), devices)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::SpiDeviceCount {
            step: 0,
            bus: 0,
            count: 3,
            num_chipselect: 2
        }
    );

    let err = builder()
        .spi_bus(wide, [flash(&wide, 1), flash(&wide, 1)])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 0,
            source: ConfigError::DuplicateChipSelect { bus: 0, cs: 1 }
        }
    );
}

#[test]
fn macs_do_not_share_phys() {
    let err = builder()
        .ethernet(port(1, bit(1)))
        .ethernet(port(0, bit(0) | bit(1)))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::Config {
            step: 2,
            source: ConfigError::PhyMaskOverlap {
                mac: 0,
                other: 1,
                mask: 0b11
            }
        }
    );

    // a MAC may move to other PHYs
    assert!(builder()
        .ethernet(port(1, bit(1)))
        .overlay("eth1", [Field::PhyMask(bit(2))])
        .ethernet(port(0, bit(1)))
        .build()
        .is_ok());
}

#[test]
fn ethernet_port_expands_to_overlay_then_register() {
    let lan = port(1, bit(1));
    let profile = builder().ethernet(lan).build().unwrap();
    assert_eq!(
        profile.steps(),
        [
            RegistrationStep::ApplyOverlay {
                domain: "eth1",
                fields: vec![
                    Field::PhyIfMode(PhyMode::Mii),
                    Field::Duplex(Duplex::Full),
                    Field::Speed(Speed::Auto),
                    Field::PhyMask(bit(1)),
                ],
            },
            RegistrationStep::RegisterEthernet {
                mac: 1,
                port: Some(lan)
            },
        ]
    );
    assert_eq!(profile.steps()[1].to_string(), "register eth1");
    assert_eq!(
        profile.descriptors().collect::<Vec<_>>(),
        [PeripheralDescriptor::EthernetPort(lan)]
    );
}

#[test]
fn profile_lists_its_descriptors_and_domains() {
    let profile = seven_steps();
    let descriptors: Vec<_> = profile.descriptors().collect();
    assert_eq!(descriptors.len(), 2);
    assert!(matches!(descriptors[0], PeripheralDescriptor::SpiDevice(_)));
    assert!(matches!(descriptors[1], PeripheralDescriptor::GpioButton(_)));

    let domains: Vec<_> = profile.domains().collect();
    assert_eq!(
        domains,
        [
            ("eth0", DomainKind::Mac),
            ("eth1", DomainKind::Mac),
            (SWITCH_DOMAIN, DomainKind::Switch),
        ]
    );
    assert_eq!(profile.info().mach_id(), "TEST");
}
