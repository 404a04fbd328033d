#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

use core::time::Duration;

use device::{
    gpio::keys::BTN_0, Duplex, EthernetPort, GpioButton, PhyMode, Polarity, Speed, SpiBusConfig,
    SpiControllerData, SpiDevice,
};
use global_data::{BoardInfo, DomainKind, Field, SWITCH_DOMAIN};
use sequencer::{BoardProfile, ProfileError};
use soc::ath79::LIMITS;
use util::bit;

pub const BOARD: BoardInfo = BoardInfo::new("LIMA", "8devices Lima board");

pub const GPIO_BTN_RST: u32 = 16;
pub const KEYS_POLL_INTERVAL: Duration = Duration::from_millis(20);
pub const KEYS_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(3 * 20);

/// PHYs on MDIO bus 0 that belong to the two MACs
pub const ETH_PHYS: u32 = bit(0) | bit(1);

const SPI_HZ: u32 = 25_000_000;

fn spi_devices(bus: &SpiBusConfig) -> Result<[SpiDevice; 3], ProfileError> {
    let dev = |cs: u8, modalias| {
        SpiDevice::new(bus, cs, SPI_HZ, modalias, SpiControllerData::internal(cs.into()))
    };
    Ok([dev(0, "m25p80")?, dev(1, "spidev")?, dev(2, "spidev")?])
}

pub fn profile() -> Result<BoardProfile, ProfileError> {
    let spi = SpiBusConfig::new(&LIMITS, 0, 3, true)?;
    let reset = GpioButton::new(
        &LIMITS,
        "button0",
        GPIO_BTN_RST,
        BTN_0,
        Polarity::ActiveLow,
        KEYS_DEBOUNCE_INTERVAL,
    )?;
    // LAN
    let lan = EthernetPort::new(&LIMITS, 1, PhyMode::Gmii, Duplex::Full, Speed::Auto, bit(1))?;
    // WAN
    let wan = EthernetPort::new(&LIMITS, 0, PhyMode::Mii, Duplex::Full, Speed::Mbps100, bit(0))?;

    BoardProfile::builder(BOARD, LIMITS)
        .domain(SWITCH_DOMAIN, DomainKind::Switch)
        .domain("eth0", DomainKind::Mac)
        .domain("eth1", DomainKind::Mac)
        .spi_bus(spi, spi_devices(&spi)?)
        .gpio_buttons(KEYS_POLL_INTERVAL, [reset])
        .phy_switch(true, true)
        .overlay(SWITCH_DOMAIN, [Field::Phy4MiiEnabled(true)])
        .mdio_bus(0, !ETH_PHYS)
        .overlay(SWITCH_DOMAIN, [Field::WidenPhyPollMask(bit(0))])
        .ethernet(lan)
        .ethernet(wan)
        .wireless_mac()
        .usb()
        .pci()
        .build()
}
