use device::PlatformLimits;

pub mod ar933x;

#[cfg(not(feature = "ar933x"))]
core::compile_error!("no ath79 SoC selected, enable one of the SoC features");

/// Limits of the SoC this build targets
#[cfg(feature = "ar933x")]
pub const LIMITS: PlatformLimits = ar933x::LIMITS;

/// Reference clock the SPI controller divides down from
pub const AHB_CLK_HZ: u32 = 200_000_000;
