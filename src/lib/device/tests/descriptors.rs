use core::time::Duration;

use device::{
    gpio::keys::BTN_0, ConfigError, GpioButton, PeripheralDescriptor, PlatformLimits, Polarity,
};

const LIMITS: PlatformLimits = PlatformLimits {
    spi_buses: 1,
    spi_chipselects: 3,
    spi_max_hz: 50_000_000,
    gpio_count: 30,
    macs: 2,
    mdio_buses: 2,
};

#[test]
fn gpio_line_must_exist() {
    let err = GpioButton::new(
        &LIMITS,
        "button0",
        30,
        BTN_0,
        Polarity::ActiveLow,
        Duration::from_millis(60),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::Gpio { gpio: 30, count: 30 });
    assert_eq!(err.field(), "gpio");
}

#[test]
fn button_keeps_its_wiring() {
    let button = GpioButton::new(
        &LIMITS,
        "button0",
        16,
        BTN_0,
        Polarity::ActiveLow,
        Duration::from_millis(60),
    )
    .unwrap();
    assert!(button.active_low());
    assert_eq!(button.debounce(), Duration::from_millis(60));
    assert_eq!(
        PeripheralDescriptor::from(button),
        PeripheralDescriptor::GpioButton(button)
    );
}

#[test]
fn config_errors_name_the_field() {
    let err = ConfigError::PhyMaskOverlap {
        mac: 1,
        other: 0,
        mask: 0b11,
    };
    assert_eq!(err.field(), "phy_mask");
    assert_eq!(
        err.to_string(),
        "phy_mask 0x3 of eth1 overlaps PHYs owned by eth0"
    );
}
