use std::collections::BTreeSet;

/// Per-run execution flags. A fresh session is created on start and
/// discarded on stop or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct Session {
    pub running: bool,
    pub paused: bool,
    pub debug: bool,
    /// One-shot: suspend before committing the current instruction.
    pub step: bool,
    /// Re-arm `step` on every iteration until cleared.
    pub sticky_step: bool,
}

impl Session {
    pub fn start(debug: bool) -> Self {
        Self {
            running: true,
            debug,
            ..Self::default()
        }
    }

    /// Single-step request: release a pending suspension and suspend again
    /// before the next instruction.
    pub fn single_step(&mut self) {
        self.step = false;
        self.sticky_step = true;
        self.debug = true;
    }

    pub fn set_sticky_step(&mut self, enabled: bool) {
        self.sticky_step = enabled;
        if enabled {
            self.debug = true;
        } else {
            self.step = false;
        }
    }

    /// Breakpoint hit: switch to debug mode and keep stepping from here on.
    pub fn break_here(&mut self) {
        self.debug = true;
        self.step = true;
        self.sticky_step = true;
    }
}

/// Enabled breakpoint addresses. Owned by the scheduler thread; survives
/// stop and start, cleared on reset.
#[derive(Clone, Debug, Default)]
pub(super) struct Breakpoints {
    enabled: BTreeSet<u16>,
}

impl Breakpoints {
    pub fn add(&mut self, addr: u16) -> bool {
        self.enabled.insert(addr)
    }

    pub fn remove(&mut self, addr: u16) -> bool {
        self.enabled.remove(&addr)
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.enabled.contains(&addr)
    }

    pub fn clear(&mut self) {
        self.enabled.clear();
    }
}
