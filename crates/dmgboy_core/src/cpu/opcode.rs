use super::Cpu;
use crate::memory::Memory;

/// Mnemonic of the sentinel entries that fill the hardware opcode holes.
pub const UNKNOWN: &str = "UNKNOWN";

pub type ImpliedFn = fn(&mut Cpu, &mut dyn Memory) -> Effect;
pub type ByteFn = fn(&mut Cpu, &mut dyn Memory, u8) -> Effect;
pub type ShortFn = fn(&mut Cpu, &mut dyn Memory, u16) -> Effect;

/// What an executed instruction asks of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Continue,
    /// The instruction deasserts the running flag (STOP).
    Stop,
    /// Recognized opcode whose behaviour is not modelled; it acted as a NOP.
    Unimplemented,
}

/// Execute function of an opcode, typed by its operand width.
///
/// The operand width is a property of the variant, so an execute function can
/// never be handed an operand of the wrong size.
#[derive(Clone, Copy)]
pub enum Exec {
    Implied(ImpliedFn),
    Byte(ByteFn),
    Short(ShortFn),
    /// The opcode is a hardware hole; there is nothing to execute.
    Invalid,
}

/// Immediate data that followed an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Short(u16),
}

/// Static description of one opcode.
#[derive(Clone, Copy)]
pub struct Opcode {
    pub opcode: u8,
    pub mnemonic: &'static str,
    /// T-cycles. For conditional branches this is the cost when the branch
    /// is not taken. Metadata only; the scheduler does not enforce timing.
    pub cycles: u8,
    pub exec: Exec,
}

impl Opcode {
    pub(super) const fn implied(opcode: u8, mnemonic: &'static str, cycles: u8, f: ImpliedFn) -> Self {
        Self {
            opcode,
            mnemonic,
            cycles,
            exec: Exec::Implied(f),
        }
    }

    pub(super) const fn byte(opcode: u8, mnemonic: &'static str, cycles: u8, f: ByteFn) -> Self {
        Self {
            opcode,
            mnemonic,
            cycles,
            exec: Exec::Byte(f),
        }
    }

    pub(super) const fn short(opcode: u8, mnemonic: &'static str, cycles: u8, f: ShortFn) -> Self {
        Self {
            opcode,
            mnemonic,
            cycles,
            exec: Exec::Short(f),
        }
    }

    pub(super) const fn unknown(opcode: u8) -> Self {
        Self {
            opcode,
            mnemonic: UNKNOWN,
            cycles: 0,
            exec: Exec::Invalid,
        }
    }

    /// Number of operand bytes following the opcode (0, 1 or 2).
    pub const fn operand_count(&self) -> u8 {
        match self.exec {
            Exec::Implied(_) | Exec::Invalid => 0,
            Exec::Byte(_) => 1,
            Exec::Short(_) => 2,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.mnemonic == UNKNOWN
    }

    /// Read the operand bytes starting at `addr` and bind them to the
    /// execute function. Two-byte operands are little-endian.
    pub fn bind(&'static self, memory: &mut dyn Memory, addr: u16) -> Instruction {
        let call = match self.exec {
            Exec::Implied(f) => Call::Implied(f),
            Exec::Byte(f) => Call::Byte(f, memory.read_byte(addr)),
            Exec::Short(f) => Call::Short(f, memory.read_short(addr)),
            Exec::Invalid => Call::Invalid,
        };
        Instruction { opcode: self, call }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Opcode")
            .field("opcode", &format_args!("0x{:02X}", self.opcode))
            .field("mnemonic", &self.mnemonic)
            .field("operand_count", &self.operand_count())
            .field("cycles", &self.cycles)
            .finish()
    }
}

#[derive(Clone, Copy)]
enum Call {
    Implied(ImpliedFn),
    Byte(ByteFn, u8),
    Short(ShortFn, u16),
    Invalid,
}

/// An opcode together with the operand fetched for it, ready to execute.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: &'static Opcode,
    call: Call,
}

impl Instruction {
    pub fn operand(&self) -> Operand {
        match self.call {
            Call::Implied(_) | Call::Invalid => Operand::None,
            Call::Byte(_, n) => Operand::Byte(n),
            Call::Short(_, nn) => Operand::Short(nn),
        }
    }

    pub fn execute(self, cpu: &mut Cpu, memory: &mut dyn Memory) -> Effect {
        match self.call {
            Call::Implied(f) => f(cpu, memory),
            Call::Byte(f, n) => f(cpu, memory, n),
            Call::Short(f, nn) => f(cpu, memory, nn),
            // Decoding refuses holes, so this only runs if a caller binds one
            // by hand. Treat it like any other unmodelled opcode.
            Call::Invalid => Effect::Unimplemented,
        }
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.opcode.mnemonic)
            .field("operand", &self.operand())
            .finish()
    }
}
