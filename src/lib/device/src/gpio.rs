use core::time::Duration;

use log::error;

use crate::{ConfigError, PlatformLimits};

/// Input event codes reported by button devices
pub mod keys {
    pub const BTN_0: u16 = 0x100;
    pub const KEY_RESTART: u16 = 0x198;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

/// A push button wired to a GPIO line and sampled by polling. It reports
/// key events carrying `code`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GpioButton {
    desc: &'static str,
    code: u16,
    gpio: u32,
    polarity: Polarity,
    debounce: Duration,
}

impl GpioButton {
    pub fn new(
        limits: &PlatformLimits,
        desc: &'static str,
        gpio: u32,
        code: u16,
        polarity: Polarity,
        debounce: Duration,
    ) -> Result<Self, ConfigError> {
        if gpio >= limits.gpio_count {
            error!(
                "{}: pin {} should be smaller than {}",
                desc, gpio, limits.gpio_count
            );
            return Err(ConfigError::Gpio {
                gpio,
                count: limits.gpio_count,
            });
        }

        Ok(Self {
            desc,
            code,
            gpio,
            polarity,
            debounce,
        })
    }

    pub fn desc(&self) -> &'static str {
        self.desc
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn gpio(&self) -> u32 {
        self.gpio
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn active_low(&self) -> bool {
        self.polarity == Polarity::ActiveLow
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}
