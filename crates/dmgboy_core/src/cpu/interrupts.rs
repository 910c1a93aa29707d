use bitflags::bitflags;

bitflags! {
    /// Interrupt lines as laid out in IE ($FFFF) and IF ($FF0F).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// A single interrupt source, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    pub fn flag(self) -> InterruptFlags {
        match self {
            Interrupt::VBlank => InterruptFlags::VBLANK,
            Interrupt::LcdStat => InterruptFlags::LCD_STAT,
            Interrupt::Timer => InterruptFlags::TIMER,
            Interrupt::Serial => InterruptFlags::SERIAL,
            Interrupt::Joypad => InterruptFlags::JOYPAD,
        }
    }

    /// Handler address the CPU jumps to when servicing this interrupt.
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::VBlank => 0x0040,
            Interrupt::LcdStat => 0x0048,
            Interrupt::Timer => 0x0050,
            Interrupt::Serial => 0x0058,
            Interrupt::Joypad => 0x0060,
        }
    }
}

/// Interrupt master enable plus the enable mask and pending flags.
///
/// In this core only DI/EI/RETI touch the controller. Dispatch (pushing PC
/// and jumping to the vector) is left to a future caller of `poll_pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interrupts {
    pub master_enable: bool,
    pub enable_mask: u8,
    pub pending_flags: u8,
}

impl Interrupts {
    pub fn enable_all(&mut self) {
        self.master_enable = true;
    }

    pub fn disable_all(&mut self) {
        self.master_enable = false;
    }

    /// Raise the pending flag for `interrupt`.
    pub fn request(&mut self, interrupt: Interrupt) {
        self.pending_flags |= interrupt.flag().bits();
    }

    /// Clear the pending flag for `interrupt`.
    pub fn acknowledge(&mut self, interrupt: Interrupt) {
        self.pending_flags &= !interrupt.flag().bits();
    }

    /// Highest-priority interrupt that is both enabled and pending, if the
    /// master enable is set.
    pub fn pending(&self) -> Option<Interrupt> {
        if !self.master_enable {
            return None;
        }
        let ready = InterruptFlags::from_bits_truncate(self.enable_mask & self.pending_flags);
        Interrupt::ALL
            .into_iter()
            .find(|interrupt| ready.contains(interrupt.flag()))
    }

    /// Vector address of the interrupt `pending` would select.
    pub fn poll_pending(&self) -> Option<u16> {
        self.pending().map(Interrupt::vector)
    }
}
