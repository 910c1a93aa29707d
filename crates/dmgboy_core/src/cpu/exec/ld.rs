use crate::cpu::helpers::{read_r8, write_r16, write_r8, SP};
use crate::cpu::{Cpu, Effect};
use crate::memory::{Memory, IO_PAGE};

// Indirect addressing modes for LD (rr),A and LD A,(rr).
pub(in crate::cpu) const IND_BC: u8 = 0;
pub(in crate::cpu) const IND_DE: u8 = 1;
pub(in crate::cpu) const IND_HLI: u8 = 2;
pub(in crate::cpu) const IND_HLD: u8 = 3;

/// Resolve an indirect address, applying the HL post-increment/decrement.
fn indirect_address(cpu: &mut Cpu, mode: u8) -> u16 {
    let regs = &mut cpu.regs;
    match mode {
        IND_BC => regs.bc,
        IND_DE => regs.de,
        IND_HLI => {
            let addr = regs.hl;
            regs.hl = addr.wrapping_add(1);
            addr
        }
        IND_HLD => {
            let addr = regs.hl;
            regs.hl = addr.wrapping_sub(1);
            addr
        }
        _ => unreachable!("invalid indirect mode {mode}"),
    }
}

/// LD rr,d16
pub(in crate::cpu) fn ld_rr_d16<const RR: u8>(cpu: &mut Cpu, _: &mut dyn Memory, value: u16) -> Effect {
    debug_assert!(RR <= SP);
    write_r16(&mut cpu.regs, RR, value);
    Effect::Continue
}

/// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
pub(in crate::cpu) fn ld_indirect_a<const MODE: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let addr = indirect_address(cpu, MODE);
    memory.write_byte(addr, cpu.regs.a());
    Effect::Continue
}

/// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
pub(in crate::cpu) fn ld_a_indirect<const MODE: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let addr = indirect_address(cpu, MODE);
    let value = memory.read_byte(addr);
    cpu.regs.set_a(value);
    Effect::Continue
}

/// LD r,d8 and LD (HL),d8
pub(in crate::cpu) fn ld_r_d8<const R: u8>(cpu: &mut Cpu, memory: &mut dyn Memory, value: u8) -> Effect {
    write_r8(cpu, memory, R, value);
    Effect::Continue
}

/// LD r,r' including the (HL) forms.
pub(in crate::cpu) fn ld_r_r<const DST: u8, const SRC: u8>(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = read_r8(cpu, memory, SRC);
    write_r8(cpu, memory, DST, value);
    Effect::Continue
}

/// LD (a16),SP stores SP little-endian at the immediate address.
pub(in crate::cpu) fn ld_a16_sp(cpu: &mut Cpu, memory: &mut dyn Memory, addr: u16) -> Effect {
    memory.write_short(addr, cpu.regs.sp);
    Effect::Continue
}

/// LDH (a8),A
pub(in crate::cpu) fn ldh_a8_a(cpu: &mut Cpu, memory: &mut dyn Memory, offset: u8) -> Effect {
    memory.write_byte(IO_PAGE | u16::from(offset), cpu.regs.a());
    Effect::Continue
}

/// LDH A,(a8)
pub(in crate::cpu) fn ldh_a_a8(cpu: &mut Cpu, memory: &mut dyn Memory, offset: u8) -> Effect {
    let value = memory.read_byte(IO_PAGE | u16::from(offset));
    cpu.regs.set_a(value);
    Effect::Continue
}

/// LD (C),A
pub(in crate::cpu) fn ld_c_a(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    memory.write_byte(IO_PAGE | u16::from(cpu.regs.c()), cpu.regs.a());
    Effect::Continue
}

/// LD A,(C)
pub(in crate::cpu) fn ld_a_c(cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
    let value = memory.read_byte(IO_PAGE | u16::from(cpu.regs.c()));
    cpu.regs.set_a(value);
    Effect::Continue
}

/// LD (a16),A
pub(in crate::cpu) fn ld_a16_a(cpu: &mut Cpu, memory: &mut dyn Memory, addr: u16) -> Effect {
    memory.write_byte(addr, cpu.regs.a());
    Effect::Continue
}

/// LD A,(a16)
pub(in crate::cpu) fn ld_a_a16(cpu: &mut Cpu, memory: &mut dyn Memory, addr: u16) -> Effect {
    let value = memory.read_byte(addr);
    cpu.regs.set_a(value);
    Effect::Continue
}

/// LD HL,SP+r8
pub(in crate::cpu) fn ld_hl_sp_r8(cpu: &mut Cpu, _: &mut dyn Memory, offset: u8) -> Effect {
    let sp = cpu.regs.sp;
    cpu.regs.hl = cpu.regs.add16_signed(sp, offset);
    Effect::Continue
}

pub(in crate::cpu) fn ld_sp_hl(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    cpu.regs.sp = cpu.regs.hl;
    Effect::Continue
}
