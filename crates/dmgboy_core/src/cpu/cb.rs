use super::helpers::{read_r8, write_r8};
use super::{Cpu, Effect};
use crate::memory::Memory;

const REGISTER_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const SHIFT_NAMES: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

/// Execute a CB-prefixed instruction. The sub-opcode arrives as the operand
/// of 0xCB.
///
/// Layout: bits 7-6 select the group (shift/rotate, BIT, RES, SET), bits 5-3
/// the operation or bit index, bits 2-0 the register.
pub(super) fn prefix_cb(cpu: &mut Cpu, memory: &mut dyn Memory, cb: u8) -> Effect {
    let x = cb >> 6;
    let y = (cb >> 3) & 0x07;
    let z = cb & 0x07;

    let value = read_r8(cpu, memory, z);
    let regs = &mut cpu.regs;
    let result = match x {
        0 => match y {
            0 => regs.rlc(value),
            1 => regs.rrc(value),
            2 => regs.rl(value),
            3 => regs.rr(value),
            4 => regs.sla(value),
            5 => regs.sra(value),
            6 => regs.swap(value),
            7 => regs.srl(value),
            _ => unreachable!(),
        },
        1 => {
            // BIT only tests; nothing is written back.
            regs.bit(y, value);
            return Effect::Continue;
        }
        2 => value & !(1 << y),
        3 => value | (1 << y),
        _ => unreachable!(),
    };
    write_r8(cpu, memory, z, result);
    Effect::Continue
}

/// Human-readable name of a CB sub-instruction, e.g. `0x37` -> `"SWAP A"`.
pub fn cb_mnemonic(cb: u8) -> String {
    let y = (cb >> 3) & 0x07;
    let reg = REGISTER_NAMES[(cb & 0x07) as usize];
    match cb >> 6 {
        0 => format!("{} {}", SHIFT_NAMES[y as usize], reg),
        1 => format!("BIT {y},{reg}"),
        2 => format!("RES {y},{reg}"),
        _ => format!("SET {y},{reg}"),
    }
}
