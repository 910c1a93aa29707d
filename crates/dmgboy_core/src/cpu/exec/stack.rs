use crate::cpu::helpers::{read_r16, write_r16};
use crate::cpu::{Cpu, Effect};
use crate::memory::Memory;

/// PUSH rr (BC, DE, HL, AF).
pub(in crate::cpu) fn push<const RR: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = read_r16(&cpu.regs, RR);
    memory.write_short_to_stack(&mut cpu.regs.sp, value);
    Effect::Continue
}

/// POP rr. Popping AF drops the low nibble of F.
pub(in crate::cpu) fn pop<const RR: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = memory.read_short_from_stack(&mut cpu.regs.sp);
    write_r16(&mut cpu.regs, RR, value);
    Effect::Continue
}
