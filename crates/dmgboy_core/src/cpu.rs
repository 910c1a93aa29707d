mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod opcode;
mod regs;
mod table;

pub use cb::cb_mnemonic;
pub use interrupts::{Interrupt, InterruptFlags, Interrupts};
pub use opcode::{ByteFn, Effect, Exec, ImpliedFn, Instruction, Opcode, Operand, ShortFn, UNKNOWN};
pub use regs::{Flags, Registers};
pub use table::OPCODES;

use crate::error::Fault;
use crate::memory::Memory;

/// Game Boy CPU core (SM83 / LR35902).
///
/// Holds the register file and the interrupt controller. Instruction bodies
/// live in the `OPCODES` table and receive the CPU and the memory unit
/// explicitly, so nothing here is shared behind the scheduler's back.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub interrupts: Interrupts,
}

/// Result of committing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub operand: Operand,
    pub cycles: u8,
    pub effect: Effect,
}

impl Cpu {
    /// Look up the descriptor for the opcode at PC without consuming it.
    ///
    /// Opcodes that map to the `UNKNOWN` sentinel are reported as a fault
    /// instead of being returned.
    pub fn decode(&self, memory: &mut dyn Memory) -> Result<&'static Opcode, Fault> {
        let pc = self.regs.pc;
        let opcode = &OPCODES[memory.read_byte(pc) as usize];
        if opcode.is_unknown() {
            return Err(Fault::UnknownOpcode {
                opcode: opcode.opcode,
                pc,
            });
        }
        Ok(opcode)
    }

    /// Commit a decoded opcode located at PC.
    ///
    /// PC advances in two phases: past the opcode byte, then past the operand
    /// bytes once they have been read. The execute function therefore sees PC
    /// pointing at the next instruction, which is the base for relative jumps
    /// and the return address for calls.
    pub fn execute(&mut self, memory: &mut dyn Memory, opcode: &'static Opcode) -> Retired {
        let pc = self.regs.pc;
        self.regs.pc = pc.wrapping_add(1);
        let instruction = opcode.bind(memory, self.regs.pc);
        self.regs.pc = self
            .regs
            .pc
            .wrapping_add(u16::from(opcode.operand_count()));

        let operand = instruction.operand();
        let effect = instruction.execute(self, memory);
        if effect == Effect::Unimplemented {
            log::warn!(
                "Instruction {} (0x{:02X}) at 0x{:04X} is not implemented; treated as NOP",
                opcode.mnemonic,
                opcode.opcode,
                pc
            );
        }

        Retired {
            pc,
            opcode: opcode.opcode,
            mnemonic: opcode.mnemonic,
            operand,
            cycles: opcode.cycles,
            effect,
        }
    }

    /// Decode and commit a single instruction.
    pub fn step(&mut self, memory: &mut dyn Memory) -> Result<Retired, Fault> {
        let opcode = self.decode(memory)?;
        Ok(self.execute(memory, opcode))
    }
}
