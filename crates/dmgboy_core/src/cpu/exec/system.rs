use crate::cpu::{Cpu, Effect};
use crate::memory::Memory;

pub(in crate::cpu) fn nop(_: &mut Cpu, _: &mut dyn Memory) -> Effect {
    Effect::Continue
}

/// STOP takes one padding byte and ends the run.
pub(in crate::cpu) fn stop(_: &mut Cpu, _: &mut dyn Memory, _padding: u8) -> Effect {
    Effect::Stop
}

/// HALT needs interrupt wake-up, which this core does not dispatch.
pub(in crate::cpu) fn halt(_: &mut Cpu, _: &mut dyn Memory) -> Effect {
    Effect::Unimplemented
}

pub(in crate::cpu) fn di(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    cpu.interrupts.disable_all();
    Effect::Continue
}

/// EI takes effect immediately; the one-instruction delay is not modelled.
pub(in crate::cpu) fn ei(cpu: &mut Cpu, _: &mut dyn Memory) -> Effect {
    cpu.interrupts.enable_all();
    Effect::Continue
}
