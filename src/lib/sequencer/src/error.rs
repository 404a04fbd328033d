use bootstate::TransitionError;
use device::{ConfigError, ErrorKind, Subsystem};
use global_data::{ConfigLookupError, DomainKind};
use thiserror::Error;

/// A board profile that contradicts itself, found while it is being built
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Descriptor(#[from] ConfigError),
    #[error("step {step}: {source}")]
    Config { step: usize, source: ConfigError },
    #[error("domain `{0}` is declared twice")]
    DuplicateDomain(&'static str),
    #[error("step {step}: domain `{domain}` was never declared")]
    UndeclaredDomain { step: usize, domain: &'static str },
    #[error("step {step}: domain `{domain}` is a {found:?} domain, expected {expected:?}")]
    KindMismatch {
        step: usize,
        domain: &'static str,
        expected: DomainKind,
        found: DomainKind,
    },
    #[error("step {step}: mac {mac} has no configuration domain")]
    NoMacDomain { step: usize, mac: u8 },
    #[error("step {step}: no gpio buttons to register")]
    NoGpioButtons { step: usize },
    #[error("step {step}: {count} devices on spi{bus}, which has {num_chipselect} chip selects")]
    SpiDeviceCount {
        step: usize,
        bus: u8,
        count: usize,
        num_chipselect: u8,
    },
    #[error("step {step}: device for spi{device_bus} listed on spi{bus}")]
    SpiBusMismatch { step: usize, bus: u8, device_bus: u8 },
}

/// A subsystem refused a registration
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("step {step}: {subsystem} registration failed: {cause}")]
pub struct RegistrationError {
    /// 0-based index of the failing step
    pub step: usize,
    pub subsystem: Subsystem,
    pub cause: ErrorKind,
}

/// Why a bring-up run stopped before completing
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum BringUpError {
    #[error("step {step}: unknown configuration domain `{domain}`")]
    UnknownDomain { step: usize, domain: &'static str },
    #[error("step {step}: mac {mac} has no configuration domain")]
    NoMacDomain { step: usize, mac: u8 },
    #[error("step {step}: {source}")]
    Overlay {
        step: usize,
        source: ConfigLookupError,
    },
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error("bring-up has already run")]
    AlreadyRun,
    #[error(transparent)]
    State(#[from] TransitionError),
}

impl BringUpError {
    /// Index of the step that failed, if a step was executing
    pub fn step(&self) -> Option<usize> {
        match self {
            Self::UnknownDomain { step, .. }
            | Self::NoMacDomain { step, .. }
            | Self::Overlay { step, .. } => Some(*step),
            Self::Registration(err) => Some(err.step),
            Self::AlreadyRun | Self::State(_) => None,
        }
    }

    pub(crate) fn overlay(step: usize, err: ConfigLookupError) -> Self {
        match err {
            ConfigLookupError::UnknownDomain(domain) => Self::UnknownDomain { step, domain },
            source => Self::Overlay { step, source },
        }
    }
}
