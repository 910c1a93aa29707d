//! Instruction bodies referenced by the opcode table.
//!
//! Every body receives the CPU and the memory unit explicitly, plus the
//! operand its descriptor declares. By the time a body runs, PC already
//! points past the operand bytes.

pub(super) mod alu;
pub(super) mod control;
pub(super) mod incdec;
pub(super) mod ld;
pub(super) mod stack;
pub(super) mod system;
