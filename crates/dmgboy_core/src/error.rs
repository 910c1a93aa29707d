use thiserror::Error;

/// Failures raised by the CPU core.
///
/// Only decode failures exist today. They are fatal for the current run:
/// the scheduler logs them, raises a single alert and halts until reset.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// The byte at PC maps to one of the hardware opcode holes.
    #[error("INSTRUCTION: 0x{opcode:02X}\nAt ROM Offset: 0x{pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}

impl Fault {
    pub fn opcode(&self) -> u8 {
        match self {
            Fault::UnknownOpcode { opcode, .. } => *opcode,
        }
    }

    pub fn pc(&self) -> u16 {
        match self {
            Fault::UnknownOpcode { pc, .. } => *pc,
        }
    }
}
