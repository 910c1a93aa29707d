pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod memory;

pub use config::RunConfig;
pub use cpu::{Cpu, Flags, Interrupts, Registers};
pub use error::Fault;
pub use machine::{Controller, Emulator, Machine, Observer, RunState, Status};
pub use memory::{FlatMemory, Memory};

#[cfg(test)]
mod test_log;
