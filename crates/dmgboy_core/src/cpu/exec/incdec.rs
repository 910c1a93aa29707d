use crate::cpu::helpers::{read_r16, read_r8, write_r16, write_r8};
use crate::cpu::{Cpu, Effect};
use crate::memory::Memory;

/// INC r / INC (HL)
pub(in crate::cpu) fn inc_r<const R: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = read_r8(cpu, memory, R);
    let result = cpu.regs.increment(value);
    write_r8(cpu, memory, R, result);
    Effect::Continue
}

/// DEC r / DEC (HL)
pub(in crate::cpu) fn dec_r<const R: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = read_r8(cpu, memory, R);
    let result = cpu.regs.decrement(value);
    write_r8(cpu, memory, R, result);
    Effect::Continue
}

/// INC rr. No flags are affected.
pub(in crate::cpu) fn inc_rr<const RR: u8>(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    let value = read_r16(&cpu.regs, RR).wrapping_add(1);
    write_r16(&mut cpu.regs, RR, value);
    Effect::Continue
}

/// DEC rr. No flags are affected.
pub(in crate::cpu) fn dec_rr<const RR: u8>(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    let value = read_r16(&cpu.regs, RR).wrapping_sub(1);
    write_r16(&mut cpu.regs, RR, value);
    Effect::Continue
}
