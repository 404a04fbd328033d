/// Identity of a board, as matched by the machine selection at boot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardInfo {
    /// short machine id, e.g. `LIMA`
    mach_id: &'static str,
    /// human readable board name
    name: &'static str,
}

impl BoardInfo {
    pub const fn new(mach_id: &'static str, name: &'static str) -> Self {
        Self { mach_id, name }
    }

    pub fn mach_id(&self) -> &'static str {
        self.mach_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl core::fmt::Display for BoardInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.mach_id)
    }
}
