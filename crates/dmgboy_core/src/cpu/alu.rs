use super::{Flags, Registers};

/// Flag-aware arithmetic used by the instruction bodies.
///
/// Every helper takes its inputs explicitly and returns the result; the only
/// state touched is F.
impl Registers {
    /// 8-bit increment used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn increment(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::ZERO, result == 0);
        self.flag_clear(Flags::SUBTRACT);
        self.set_flag(Flags::HALF_CARRY, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn decrement(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::ZERO, result == 0);
        self.flag_set(Flags::SUBTRACT);
        self.set_flag(Flags::HALF_CARRY, (value & 0x0F) == 0);
        result
    }

    /// 8-bit add. Z, H and C follow the result; N is cleared.
    pub fn add8(&mut self, a: u8, b: u8) -> u8 {
        self.add8_with_carry(a, b, false)
    }

    /// 8-bit add including the incoming carry flag (ADC).
    pub fn adc8(&mut self, a: u8, b: u8) -> u8 {
        let carry = self.flag_is_set(Flags::CARRY);
        self.add8_with_carry(a, b, carry)
    }

    fn add8_with_carry(&mut self, a: u8, b: u8, carry: bool) -> u8 {
        let carry_in = u8::from(carry);
        let half = (a & 0x0F) + (b & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(b) + u16::from(carry_in);
        let result = full as u8;

        self.set_flag(Flags::ZERO, result == 0);
        self.flag_clear(Flags::SUBTRACT);
        self.set_flag(Flags::HALF_CARRY, half > 0x0F);
        self.set_flag(Flags::CARRY, full > 0xFF);
        result
    }

    /// 8-bit subtract. H and C signal a borrow; N is set.
    pub fn sub8(&mut self, a: u8, b: u8) -> u8 {
        self.sub8_with_carry(a, b, false)
    }

    /// 8-bit subtract including the incoming carry flag (SBC).
    pub fn sbc8(&mut self, a: u8, b: u8) -> u8 {
        let carry = self.flag_is_set(Flags::CARRY);
        self.sub8_with_carry(a, b, carry)
    }

    fn sub8_with_carry(&mut self, a: u8, b: u8, carry: bool) -> u8 {
        let carry_in = i16::from(carry);
        let half = i16::from(a & 0x0F) - i16::from(b & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(b) - carry_in;
        let result = full as u8;

        self.set_flag(Flags::ZERO, result == 0);
        self.flag_set(Flags::SUBTRACT);
        self.set_flag(Flags::HALF_CARRY, half < 0);
        self.set_flag(Flags::CARRY, full < 0);
        result
    }

    /// Compare: flags as for `a - b`, result discarded.
    pub fn cp8(&mut self, a: u8, b: u8) {
        self.sub8(a, b);
    }

    pub fn and8(&mut self, a: u8, b: u8) -> u8 {
        let result = a & b;
        self.set_f(0);
        self.set_flag(Flags::ZERO, result == 0);
        self.flag_set(Flags::HALF_CARRY);
        result
    }

    pub fn or8(&mut self, a: u8, b: u8) -> u8 {
        let result = a | b;
        self.set_f(0);
        self.set_flag(Flags::ZERO, result == 0);
        result
    }

    pub fn xor8(&mut self, a: u8, b: u8) -> u8 {
        let result = a ^ b;
        self.set_f(0);
        self.set_flag(Flags::ZERO, result == 0);
        result
    }

    /// 16-bit add used by `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C the
    /// carry out of bit 15.
    pub fn add16(&mut self, a: u16, b: u16) -> u16 {
        self.flag_clear(Flags::SUBTRACT);
        self.set_flag(Flags::HALF_CARRY, (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::CARRY, u32::from(a) + u32::from(b) > 0xFFFF);
        a.wrapping_add(b)
    }

    /// Add a signed 8-bit immediate to a 16-bit base (`ADD SP,r8` and
    /// `LD HL,SP+r8`).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    pub fn add16_signed(&mut self, base: u16, offset: u8) -> u16 {
        let offset = offset as i8 as i16 as u16;
        self.set_f(0);
        self.set_flag(Flags::HALF_CARRY, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flags::CARRY, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// Uses N, H, C and A to pick a correction of 0x06 and/or 0x60. Updates
    /// A, Z, H and C; N is left unchanged.
    pub fn daa(&mut self) {
        let mut a = self.a();
        let mut adjust: u8 = 0;
        let mut carry = self.flag_is_set(Flags::CARRY);

        if self.flag_is_set(Flags::HALF_CARRY) {
            adjust |= 0x06;
        }
        if carry {
            adjust |= 0x60;
        }

        if self.flag_is_set(Flags::SUBTRACT) {
            a = a.wrapping_sub(adjust);
        } else {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
                carry = true;
            }
            a = a.wrapping_add(adjust);
        }

        self.set_a(a);
        self.set_flag(Flags::ZERO, a == 0);
        self.flag_clear(Flags::HALF_CARRY);
        self.set_flag(Flags::CARRY, carry);
    }

    /// Flags shared by the rotate/shift family: Z from the result, N and H
    /// cleared, C from the bit shifted out.
    #[inline]
    fn shift_flags(&mut self, result: u8, carry: bool) -> u8 {
        self.set_f(0);
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::CARRY, carry);
        result
    }

    pub fn rlc(&mut self, value: u8) -> u8 {
        self.shift_flags(value.rotate_left(1), value & 0x80 != 0)
    }

    pub fn rrc(&mut self, value: u8) -> u8 {
        self.shift_flags(value.rotate_right(1), value & 0x01 != 0)
    }

    /// Rotate left through carry.
    pub fn rl(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.flag_is_set(Flags::CARRY));
        self.shift_flags((value << 1) | carry_in, value & 0x80 != 0)
    }

    /// Rotate right through carry.
    pub fn rr(&mut self, value: u8) -> u8 {
        let carry_in = if self.flag_is_set(Flags::CARRY) { 0x80 } else { 0 };
        self.shift_flags((value >> 1) | carry_in, value & 0x01 != 0)
    }

    pub fn sla(&mut self, value: u8) -> u8 {
        self.shift_flags(value << 1, value & 0x80 != 0)
    }

    /// Arithmetic shift right; bit 7 is preserved.
    pub fn sra(&mut self, value: u8) -> u8 {
        self.shift_flags((value >> 1) | (value & 0x80), value & 0x01 != 0)
    }

    pub fn srl(&mut self, value: u8) -> u8 {
        self.shift_flags(value >> 1, value & 0x01 != 0)
    }

    pub fn swap(&mut self, value: u8) -> u8 {
        self.shift_flags(value.rotate_left(4), false)
    }

    /// BIT b: Z is set when the bit is clear. N cleared, H set, C preserved.
    pub fn bit(&mut self, bit: u8, value: u8) {
        self.set_flag(Flags::ZERO, value & (1 << bit) == 0);
        self.flag_clear(Flags::SUBTRACT);
        self.flag_set(Flags::HALF_CARRY);
    }
}
