use sequencer::{BoardProfile, ProfileError};

/// A board the sequencer knows how to bring up
pub(crate) struct Machine {
    pub id: &'static str,
    pub name: &'static str,
    pub profile: fn() -> Result<BoardProfile, ProfileError>,
}

pub(crate) const MACHINES: &[Machine] = &[Machine {
    id: "LIMA",
    name: "8devices Lima board",
    profile: lima::profile,
}];

/// Machine ids match case-insensitively, like the kernel's `machtype=`
pub(crate) fn find(id: &str) -> Option<&'static Machine> {
    MACHINES.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}
