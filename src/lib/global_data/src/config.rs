use alloc::collections::BTreeMap;

use device::limits::MAX_MACS;
use log::debug;
use thiserror::Error;

use crate::{DomainKind, DomainRecord, Field, MacData, SwitchData};

/// Domain holding the integrated PHY switch's platform data
pub const SWITCH_DOMAIN: &str = "switch";

const MAC_DOMAINS: [&str; MAX_MACS as usize] = ["eth0", "eth1", "eth2", "eth3"];

/// Domain holding the platform data of MAC `mac`
pub fn mac_domain(mac: u8) -> Option<&'static str> {
    MAC_DOMAINS.get(mac as usize).copied()
}

/// Inverse of [`mac_domain`]
pub fn mac_index(domain: &str) -> Option<u8> {
    MAC_DOMAINS.iter().position(|d| *d == domain).map(|i| i as u8)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ConfigLookupError {
    #[error("unknown configuration domain `{0}`")]
    UnknownDomain(&'static str),
    #[error("domain `{0}` is declared twice")]
    DuplicateDomain(&'static str),
    #[error("field {field} does not belong to {kind:?} domain `{domain}`")]
    FieldMismatch {
        domain: &'static str,
        field: &'static str,
        kind: DomainKind,
    },
}

/// Hardware configuration that several registration steps must agree on
///
/// Each domain starts out with the subsystem defaults for its kind. Overlays
/// are merged in the order they are applied and only touch the fields they
/// name, so a later overlay wins on the fields both set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SharedPlatformConfig {
    domains: BTreeMap<&'static str, DomainRecord>,
}

impl SharedPlatformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(
        &mut self,
        domain: &'static str,
        kind: DomainKind,
    ) -> Result<(), ConfigLookupError> {
        if self.domains.contains_key(domain) {
            return Err(ConfigLookupError::DuplicateDomain(domain));
        }
        self.domains.insert(domain, DomainRecord::defaults(kind));
        Ok(())
    }

    /// Merge `fields` into `domain`. Either all fields apply or, on error,
    /// the domain is left as it was.
    pub fn apply_overlay(
        &mut self,
        domain: &'static str,
        fields: &[Field],
    ) -> Result<(), ConfigLookupError> {
        let record = self
            .domains
            .get_mut(domain)
            .ok_or(ConfigLookupError::UnknownDomain(domain))?;

        let kind = record.kind();
        if let Some(field) = fields.iter().find(|f| f.kind() != kind) {
            return Err(ConfigLookupError::FieldMismatch {
                domain,
                field: field.name(),
                kind,
            });
        }

        for field in fields {
            debug!("{}: {:?}", domain, field);
            record.apply(*field);
        }
        Ok(())
    }

    pub fn read(&self, domain: &str) -> Option<&DomainRecord> {
        self.domains.get(domain)
    }

    pub fn switch(&self) -> Option<&SwitchData> {
        self.read(SWITCH_DOMAIN).and_then(DomainRecord::as_switch)
    }

    pub fn mac(&self, mac: u8) -> Option<&MacData> {
        mac_domain(mac)
            .and_then(|domain| self.read(domain))
            .and_then(DomainRecord::as_mac)
    }

    pub fn domains(&self) -> impl Iterator<Item = (&'static str, &DomainRecord)> {
        self.domains.iter().map(|(name, record)| (*name, record))
    }
}
