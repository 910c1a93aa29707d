use crate::cpu::helpers::condition;
use crate::cpu::{Cpu, Effect};
use crate::memory::Memory;

/// Relative jump. The offset is signed and relative to the address of the
/// next instruction, which is where PC already points.
#[inline]
fn jump_relative(cpu: &mut Cpu, offset: u8) {
    cpu.regs.pc = cpu.regs.pc.wrapping_add(offset as i8 as u16);
}

#[inline]
fn push_pc(cpu: &mut Cpu, memory: &mut dyn Memory) {
    let pc = cpu.regs.pc;
    memory.write_short_to_stack(&mut cpu.regs.sp, pc);
}

pub(in crate::cpu) fn jr(cpu: &mut Cpu, _: &mut dyn Memory, offset: u8) -> Effect {
    jump_relative(cpu, offset);
    Effect::Continue
}

/// JR cc,r8. The operand has been consumed whether or not the branch is taken.
pub(in crate::cpu) fn jr_cc<const CC: u8>(cpu: &mut Cpu, _: &mut dyn Memory, offset: u8) -> Effect {
    if condition(&cpu.regs, CC) {
        jump_relative(cpu, offset);
    }
    Effect::Continue
}

pub(in crate::cpu) fn jp(cpu: &mut Cpu, _: &mut dyn Memory, addr: u16) -> Effect {
    cpu.regs.pc = addr;
    Effect::Continue
}

pub(in crate::cpu) fn jp_cc<const CC: u8>(cpu: &mut Cpu, _: &mut dyn Memory, addr: u16) -> Effect {
    if condition(&cpu.regs, CC) {
        cpu.regs.pc = addr;
    }
    Effect::Continue
}

pub(in crate::cpu) fn jp_hl(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    cpu.regs.pc = cpu.regs.hl;
    Effect::Continue
}

pub(in crate::cpu) fn call(cpu: &mut Cpu, memory: &mut dyn Memory, addr: u16) -> Effect {
    push_pc(cpu, memory);
    cpu.regs.pc = addr;
    Effect::Continue
}

pub(in crate::cpu) fn call_cc<const CC: u8>(cpu: &mut Cpu, memory: &mut dyn Memory, addr: u16) -> Effect {
    if condition(&cpu.regs, CC) {
        call(cpu, memory, addr)
    } else {
        Effect::Continue
    }
}

pub(in crate::cpu) fn ret(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    cpu.regs.pc = memory.read_short_from_stack(&mut cpu.regs.sp);
    Effect::Continue
}

pub(in crate::cpu) fn ret_cc<const CC: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    if condition(&cpu.regs, CC) {
        ret(cpu, memory)
    } else {
        Effect::Continue
    }
}

/// RETI: return and set the interrupt master enable.
pub(in crate::cpu) fn reti(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    cpu.interrupts.enable_all();
    ret(cpu, memory)
}

/// RST n: push the address of the next instruction and jump to `VECTOR`.
pub(in crate::cpu) fn rst<const VECTOR: u16>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    push_pc(cpu, memory);
    cpu.regs.pc = VECTOR;
    Effect::Continue
}
