use super::{Cpu, Flags, Interrupts, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Register values the DMG boot ROM leaves behind when it hands control
    /// to the cartridge at 0x0100 (Pan Docs, "Power Up Sequence").
    pub const POWER_UP: Registers = Registers {
        af: 0x01B0,
        bc: 0x0013,
        de: 0x00D8,
        hl: 0x014D,
        sp: 0xFFFE,
        pc: 0x0100,
    };
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::POWER_UP,
            interrupts: Interrupts::default(),
        }
    }

    /// Return the CPU to its power-up state.
    ///
    /// Registers take their boot values and the interrupt controller is
    /// cleared. Z is cleared afterwards, so AF reads 0x0130 after a reset.
    pub fn reset(&mut self) {
        self.regs = Registers::POWER_UP;
        self.interrupts = Interrupts::default();
        self.regs.flag_clear(Flags::ZERO);
    }
}
