use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register (the low byte of AF).
    ///
    /// Bits 0-3 do not exist on hardware and always read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 0x80;
        const SUBTRACT = 0x40;
        const HALF_CARRY = 0x20;
        const CARRY = 0x10;
    }
}

/// Register file for the Game Boy CPU.
///
/// Registers are stored as packed 16-bit pairs; the 8-bit registers are views
/// onto the high (A, B, D, H) and low (F, C, E, L) halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub af: u16,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
}

#[inline]
fn high(pair: u16) -> u8 {
    (pair >> 8) as u8
}

#[inline]
fn low(pair: u16) -> u8 {
    pair as u8
}

#[inline]
fn with_high(pair: u16, value: u8) -> u16 {
    (pair & 0x00FF) | (u16::from(value) << 8)
}

#[inline]
fn with_low(pair: u16, value: u8) -> u16 {
    (pair & 0xFF00) | u16::from(value)
}

impl Registers {
    #[inline]
    pub fn a(&self) -> u8 {
        high(self.af)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af = with_high(self.af, value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        low(self.af)
    }

    /// Write F. The low nibble is masked to zero as on hardware.
    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.af = with_low(self.af, value & 0xF0);
    }

    /// Write AF as a whole (e.g. `POP AF`), masking F's low nibble.
    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.af = value & 0xFFF0;
    }

    #[inline]
    pub fn b(&self) -> u8 {
        high(self.bc)
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc = with_high(self.bc, value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        low(self.bc)
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc = with_low(self.bc, value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        high(self.de)
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de = with_high(self.de, value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        low(self.de)
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de = with_low(self.de, value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        high(self.hl)
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl = with_high(self.hl, value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        low(self.hl)
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl = with_low(self.hl, value);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.f())
    }

    #[inline]
    pub fn flag_set(&mut self, flag: Flags) {
        self.set_f(self.f() | flag.bits());
    }

    #[inline]
    pub fn flag_clear(&mut self, flag: Flags) {
        self.set_f(self.f() & !flag.bits());
    }

    #[inline]
    pub fn flag_is_set(&self, flag: Flags) -> bool {
        self.f() & flag.bits() == flag.bits()
    }

    /// Set or clear `flag` depending on `value`.
    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        if value {
            self.flag_set(flag);
        } else {
            self.flag_clear(flag);
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF: 0x{:04X} BC: 0x{:04X} DE: 0x{:04X} HL: 0x{:04X} SP: 0x{:04X} PC: 0x{:04X}",
            self.af, self.bc, self.de, self.hl, self.sp, self.pc
        )
    }
}
