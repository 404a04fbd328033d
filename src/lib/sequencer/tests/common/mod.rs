#![allow(dead_code)]

use core::time::Duration;

use device::{
    gpio::keys::KEY_RESTART, GpioButton, PlatformLimits, Polarity, SpiBusConfig,
    SpiControllerData, SpiDevice,
};
use global_data::{BoardInfo, DomainKind, SWITCH_DOMAIN};
use sequencer::{BoardProfile, BoardProfileBuilder};

pub const LIMITS: PlatformLimits = PlatformLimits {
    spi_buses: 1,
    spi_chipselects: 3,
    spi_max_hz: 50_000_000,
    gpio_count: 30,
    macs: 2,
    mdio_buses: 2,
};

pub const POLL: Duration = Duration::from_millis(20);

pub fn builder() -> BoardProfileBuilder {
    BoardProfile::builder(BoardInfo::new("TEST", "Test board"), LIMITS)
        .domain(SWITCH_DOMAIN, DomainKind::Switch)
        .domain("eth0", DomainKind::Mac)
        .domain("eth1", DomainKind::Mac)
}

pub fn spi_bus(num_chipselect: u8) -> SpiBusConfig {
    SpiBusConfig::new(&LIMITS, 0, num_chipselect, true).unwrap()
}

pub fn flash(bus: &SpiBusConfig, cs: u8) -> SpiDevice {
    SpiDevice::new(bus, cs, 25_000_000, "m25p80", SpiControllerData::internal(cs as u32)).unwrap()
}

pub fn reset_button() -> GpioButton {
    GpioButton::new(
        &LIMITS,
        "reset",
        11,
        KEY_RESTART,
        Polarity::ActiveLow,
        Duration::from_millis(60),
    )
    .unwrap()
}

/// Seven register steps and no overlays
pub fn seven_steps() -> BoardProfile {
    let bus = spi_bus(1);
    builder()
        .spi_bus(bus, [flash(&bus, 0)])
        .gpio_buttons(POLL, [reset_button()])
        .phy_switch(true, false)
        .mdio_bus(0, 0)
        .wireless_mac()
        .usb()
        .pci()
        .build()
        .unwrap()
}
