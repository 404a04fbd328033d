use device::{Duplex, EthernetPort, PhyMode, Speed};

/// Platform data of the SoC's integrated PHY switch
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwitchData {
    /// PHY4 is connected to a MAC over MII
    pub phy4_mii_en: bool,
    /// PHY addresses the switch driver polls for link state
    pub phy_poll_mask: u32,
}

/// Platform data of one Ethernet MAC
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MacData {
    pub phy_if_mode: PhyMode,
    pub duplex: Duplex,
    pub speed: Speed,
    /// PHY addresses the MAC attaches to
    pub phy_mask: u32,
}

impl Default for MacData {
    fn default() -> Self {
        Self {
            phy_if_mode: PhyMode::Mii,
            duplex: Duplex::Full,
            speed: Speed::Auto,
            phy_mask: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DomainKind {
    Switch,
    Mac,
}

/// Current values of one configuration domain
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DomainRecord {
    Switch(SwitchData),
    Mac(MacData),
}

impl DomainRecord {
    pub fn defaults(kind: DomainKind) -> Self {
        match kind {
            DomainKind::Switch => Self::Switch(SwitchData::default()),
            DomainKind::Mac => Self::Mac(MacData::default()),
        }
    }

    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Switch(_) => DomainKind::Switch,
            Self::Mac(_) => DomainKind::Mac,
        }
    }

    pub fn as_switch(&self) -> Option<&SwitchData> {
        match self {
            Self::Switch(data) => Some(data),
            Self::Mac(_) => None,
        }
    }

    pub fn as_mac(&self) -> Option<&MacData> {
        match self {
            Self::Mac(data) => Some(data),
            Self::Switch(_) => None,
        }
    }

    /// Overwrite the value `field` names. The caller checks that the field
    /// belongs to this record's kind.
    pub(crate) fn apply(&mut self, field: Field) {
        match (self, field) {
            (Self::Switch(sw), Field::Phy4MiiEnabled(en)) => sw.phy4_mii_en = en,
            (Self::Switch(sw), Field::PhyPollMask(mask)) => sw.phy_poll_mask = mask,
            (Self::Switch(sw), Field::WidenPhyPollMask(mask)) => sw.phy_poll_mask |= mask,
            (Self::Mac(mac), Field::PhyIfMode(mode)) => mac.phy_if_mode = mode,
            (Self::Mac(mac), Field::Duplex(duplex)) => mac.duplex = duplex,
            (Self::Mac(mac), Field::Speed(speed)) => mac.speed = speed,
            (Self::Mac(mac), Field::PhyMask(mask)) => mac.phy_mask = mask,
            _ => {}
        }
    }
}

/// A single value an overlay sets in a domain
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Phy4MiiEnabled(bool),
    PhyPollMask(u32),
    /// ORs the given PHY addresses into the current poll mask
    WidenPhyPollMask(u32),
    PhyIfMode(PhyMode),
    Duplex(Duplex),
    Speed(Speed),
    PhyMask(u32),
}

impl Field {
    /// Kind of domain this field lives in
    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Phy4MiiEnabled(_) | Self::PhyPollMask(_) | Self::WidenPhyPollMask(_) => {
                DomainKind::Switch
            }
            Self::PhyIfMode(_) | Self::Duplex(_) | Self::Speed(_) | Self::PhyMask(_) => {
                DomainKind::Mac
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Phy4MiiEnabled(_) => "phy4_mii_en",
            Self::PhyPollMask(_) | Self::WidenPhyPollMask(_) => "phy_poll_mask",
            Self::PhyIfMode(_) => "phy_if_mode",
            Self::Duplex(_) => "duplex",
            Self::Speed(_) => "speed",
            Self::PhyMask(_) => "phy_mask",
        }
    }

    /// The MAC fields an Ethernet port descriptor sets
    pub fn from_port(port: &EthernetPort) -> [Field; 4] {
        [
            Field::PhyIfMode(port.phy_if_mode()),
            Field::Duplex(port.duplex()),
            Field::Speed(port.speed()),
            Field::PhyMask(port.phy_mask()),
        ]
    }
}
