mod control;
mod scheduler;
mod session;

pub use control::{Controller, Status};
pub use scheduler::Emulator;

use crate::cpu::{Cpu, Registers, Retired};
use crate::error::Fault;
use crate::memory::{FlatMemory, Memory};

/// Lifecycle of the execution scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    /// Suspended before committing the decoded instruction, waiting for a
    /// step-advance signal.
    Stepping,
    Paused,
    /// An undefined opcode was decoded. Only a reset leaves this state.
    Halted,
    /// The run ended normally (stop request or a STOP instruction).
    Stopped,
}

impl RunState {
    /// True while a run is in progress, suspended or not.
    pub fn is_active(self) -> bool {
        matches!(self, RunState::Running | RunState::Stepping | RunState::Paused)
    }
}

/// Presentation collaborator notified from the scheduler thread.
pub trait Observer: Send {
    /// Called once per committed instruction with the new register snapshot.
    fn on_commit(&mut self, registers: &Registers);

    /// Called once when a run halts on a fatal fault.
    fn on_alert(&mut self, _message: &str) {}

    fn on_state(&mut self, _state: RunState) {}
}

/// The CPU together with the memory unit it executes against.
#[derive(Clone, Debug)]
pub struct Machine<M> {
    pub cpu: Cpu,
    pub memory: M,
}

impl<M: Memory> Machine<M> {
    pub fn new(memory: M) -> Self {
        Self {
            cpu: Cpu::new(),
            memory,
        }
    }

    /// Run a single instruction outside of the scheduler.
    pub fn step(&mut self) -> Result<Retired, Fault> {
        self.cpu.step(&mut self.memory)
    }

    /// Reset the CPU. Memory contents are left alone so a loaded ROM survives.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }
}

impl Machine<FlatMemory> {
    /// Flat machine with `rom` mapped at address 0.
    pub fn with_rom(rom: &[u8]) -> Self {
        let mut memory = FlatMemory::new();
        memory.load_rom(rom);
        Self::new(memory)
    }
}

#[cfg(test)]
mod tests;
