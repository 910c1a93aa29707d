//! Operand selectors shared by the instruction bodies.
//!
//! Instruction bodies are instantiated per register with const generics, so
//! the table can hold a plain function pointer for every slot. The encodings
//! match the standard opcode-table order.

use super::{Cpu, Flags, Registers};
use crate::memory::Memory;

// 8-bit operands: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
pub(super) const B: u8 = 0;
pub(super) const C: u8 = 1;
pub(super) const D: u8 = 2;
pub(super) const E: u8 = 3;
pub(super) const H: u8 = 4;
pub(super) const L: u8 = 5;
pub(super) const HL_IND: u8 = 6;
pub(super) const A: u8 = 7;

// 16-bit pairs.
pub(super) const BC: u8 = 0;
pub(super) const DE: u8 = 1;
pub(super) const HL: u8 = 2;
pub(super) const SP: u8 = 3;
pub(super) const AF: u8 = 4;

// Branch conditions.
pub(super) const NZ: u8 = 0;
pub(super) const Z: u8 = 1;
pub(super) const NC: u8 = 2;
pub(super) const CY: u8 = 3;

// ALU operations on A.
pub(super) const ADD: u8 = 0;
pub(super) const ADC: u8 = 1;
pub(super) const SUB: u8 = 2;
pub(super) const SBC: u8 = 3;
pub(super) const AND: u8 = 4;
pub(super) const XOR: u8 = 5;
pub(super) const OR: u8 = 6;
pub(super) const CP: u8 = 7;

/// Read an 8-bit register or (HL) by index.
#[inline]
pub(super) fn read_r8(cpu: &Cpu, memory: &mut dyn Memory, index: u8) -> u8 {
    let regs = &cpu.regs;
    match index {
        B => regs.b(),
        C => regs.c(),
        D => regs.d(),
        E => regs.e(),
        H => regs.h(),
        L => regs.l(),
        HL_IND => memory.read_byte(regs.hl),
        A => regs.a(),
        _ => unreachable!("invalid 8-bit register index {index}"),
    }
}

/// Write an 8-bit register or (HL) by index. Same encoding as `read_r8`.
#[inline]
pub(super) fn write_r8(cpu: &mut Cpu, memory: &mut dyn Memory, index: u8, value: u8) {
    let regs = &mut cpu.regs;
    match index {
        B => regs.set_b(value),
        C => regs.set_c(value),
        D => regs.set_d(value),
        E => regs.set_e(value),
        H => regs.set_h(value),
        L => regs.set_l(value),
        HL_IND => memory.write_byte(regs.hl, value),
        A => regs.set_a(value),
        _ => unreachable!("invalid 8-bit register index {index}"),
    }
}

#[inline]
pub(super) fn read_r16(regs: &Registers, pair: u8) -> u16 {
    match pair {
        BC => regs.bc,
        DE => regs.de,
        HL => regs.hl,
        SP => regs.sp,
        AF => regs.af,
        _ => unreachable!("invalid register pair {pair}"),
    }
}

#[inline]
pub(super) fn write_r16(regs: &mut Registers, pair: u8, value: u16) {
    match pair {
        BC => regs.bc = value,
        DE => regs.de = value,
        HL => regs.hl = value,
        SP => regs.sp = value,
        AF => regs.set_af(value),
        _ => unreachable!("invalid register pair {pair}"),
    }
}

#[inline]
pub(super) fn condition(regs: &Registers, cc: u8) -> bool {
    match cc {
        NZ => !regs.flag_is_set(Flags::ZERO),
        Z => regs.flag_is_set(Flags::ZERO),
        NC => !regs.flag_is_set(Flags::CARRY),
        CY => regs.flag_is_set(Flags::CARRY),
        _ => unreachable!("invalid branch condition {cc}"),
    }
}

/// Apply one of the eight accumulator ALU operations.
#[inline]
pub(super) fn alu(regs: &mut Registers, op: u8, value: u8) {
    let a = regs.a();
    let result = match op {
        ADD => regs.add8(a, value),
        ADC => regs.adc8(a, value),
        SUB => regs.sub8(a, value),
        SBC => regs.sbc8(a, value),
        AND => regs.and8(a, value),
        XOR => regs.xor8(a, value),
        OR => regs.or8(a, value),
        CP => {
            regs.cp8(a, value);
            a
        }
        _ => unreachable!("invalid ALU operation {op}"),
    };
    regs.set_a(result);
}
