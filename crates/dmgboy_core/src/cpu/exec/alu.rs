use crate::cpu::helpers::{alu, read_r16, read_r8};
use crate::cpu::{Cpu, Effect, Flags, Registers};
use crate::memory::Memory;

/// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r (0x80-0xBF).
pub(in crate::cpu) fn alu_r<const OP: u8, const R: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = read_r8(cpu, memory, R);
    alu(&mut cpu.regs, OP, value);
    Effect::Continue
}

/// The same eight operations against an immediate byte.
pub(in crate::cpu) fn alu_d8<const OP: u8>(cpu: &mut Cpu, _: &mut dyn Memory, value: u8) -> Effect {
    alu(&mut cpu.regs, OP, value);
    Effect::Continue
}

pub(in crate::cpu) fn add_hl_rr<const RR: u8>(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    let regs = &mut cpu.regs;
    let value = read_r16(regs, RR);
    regs.hl = regs.add16(regs.hl, value);
    Effect::Continue
}

pub(in crate::cpu) fn add_sp_r8(cpu: &mut Cpu, _: &mut dyn Memory, offset: u8) -> Effect {
    let regs = &mut cpu.regs;
    regs.sp = regs.add16_signed(regs.sp, offset);
    Effect::Continue
}

pub(in crate::cpu) fn daa(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    cpu.regs.daa();
    Effect::Continue
}

/// CPL: complement A; sets N and H.
pub(in crate::cpu) fn cpl(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    let regs = &mut cpu.regs;
    regs.set_a(!regs.a());
    regs.flag_set(Flags::SUBTRACT | Flags::HALF_CARRY);
    Effect::Continue
}

pub(in crate::cpu) fn scf(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    let regs = &mut cpu.regs;
    regs.flag_clear(Flags::SUBTRACT | Flags::HALF_CARRY);
    regs.flag_set(Flags::CARRY);
    Effect::Continue
}

pub(in crate::cpu) fn ccf(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    let regs = &mut cpu.regs;
    let carry = regs.flag_is_set(Flags::CARRY);
    regs.flag_clear(Flags::SUBTRACT | Flags::HALF_CARRY);
    regs.set_flag(Flags::CARRY, !carry);
    Effect::Continue
}

// Accumulator rotates behave like their CB forms except Z is always cleared.

pub(in crate::cpu) fn rlca(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    rotate_a(cpu, |regs, a| regs.rlc(a))
}

pub(in crate::cpu) fn rrca(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    rotate_a(cpu, |regs, a| regs.rrc(a))
}

pub(in crate::cpu) fn rla(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    rotate_a(cpu, |regs, a| regs.rl(a))
}

pub(in crate::cpu) fn rra(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    rotate_a(cpu, |regs, a| regs.rr(a))
}

#[inline]
fn rotate_a(cpu: &mut Cpu, op: impl FnOnce(&mut Registers, u8) -> u8) -> Effect {
    let regs = &mut cpu.regs;
    let a = regs.a();
    let result = op(regs, a);
    regs.set_a(result);
    regs.flag_clear(Flags::ZERO);
    Effect::Continue
}
