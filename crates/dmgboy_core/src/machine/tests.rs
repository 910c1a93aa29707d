use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use log::Level;

use super::*;
use crate::config::RunConfig;
use crate::cpu::Flags;
use crate::test_log;

const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
enum Event {
    Commit(Registers),
    Alert(String),
    State(RunState),
}

struct Forward(Sender<Event>);

impl Observer for Forward {
    fn on_commit(&mut self, registers: &Registers) {
        let _ = self.0.send(Event::Commit(*registers));
    }

    fn on_alert(&mut self, message: &str) {
        let _ = self.0.send(Event::Alert(message.to_owned()));
    }

    fn on_state(&mut self, state: RunState) {
        let _ = self.0.send(Event::State(state));
    }
}

/// Spawn a scheduler over a flat memory with `program` at 0x0100.
fn spawn(program: &[u8]) -> (Emulator<FlatMemory>, Controller, Receiver<Event>) {
    let machine = Machine::new(FlatMemory::with_program(0x0100, program));
    let (sender, events) = mpsc::channel();
    let emulator = Emulator::spawn(machine, Forward(sender), RunConfig::unthrottled())
        .expect("spawn CPU worker");
    let controller = emulator.controller();
    (emulator, controller, events)
}

fn wait_state(controller: &Controller, state: RunState) -> Status {
    controller
        .wait_for(TIMEOUT, |status| status.state == state)
        .unwrap_or_else(|| panic!("scheduler never reached {state:?}: {:?}", controller.snapshot()))
}

/// Everything observed so far, without blocking.
fn drain(events: &Receiver<Event>) -> Vec<Event> {
    events.try_iter().collect()
}

fn commit_pcs(events: &[Event]) -> Vec<u16> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Commit(registers) => Some(registers.pc),
            _ => None,
        })
        .collect()
}

#[test]
fn worker_starts_idle_with_power_up_registers() {
    let (_emulator, controller, _events) = spawn(&[]);

    let status = controller.snapshot();
    assert_eq!(status.state, RunState::Idle);
    assert_eq!(status.registers, Registers::POWER_UP);
    assert_eq!(status.fault, None);
}

#[test]
fn nop_run_moves_only_pc() {
    let (_emulator, controller, events) = spawn(&[]);

    controller.start(false);
    controller
        .wait_for(TIMEOUT, |status| status.committed >= 4)
        .expect("four commits");
    controller.stop();
    wait_state(&controller, RunState::Stopped);

    let commits: Vec<Registers> = drain(&events)
        .into_iter()
        .filter_map(|event| match event {
            Event::Commit(registers) => Some(registers),
            _ => None,
        })
        .collect();
    assert!(commits.len() >= 4);
    for (n, registers) in (1..).zip(&commits) {
        assert_eq!(
            *registers,
            Registers {
                pc: 0x0100 + n,
                ..Registers::POWER_UP
            }
        );
    }
}

#[test]
fn commits_are_reported_in_program_order() {
    let (_emulator, controller, events) = spawn(&[]);

    controller.start(false);
    controller
        .wait_for(TIMEOUT, |status| status.committed >= 3)
        .expect("three commits");
    controller.stop();
    wait_state(&controller, RunState::Stopped);

    let pcs = commit_pcs(&drain(&events));
    assert!(pcs.len() >= 3);
    assert_eq!(&pcs[..3], &[0x0101, 0x0102, 0x0103]);
}

#[test]
fn breakpoint_suspends_before_commit_and_single_step_advances_one() {
    let (_emulator, controller, events) = spawn(&[]);
    controller.add_breakpoint(0x0103);
    assert!(controller.is_breakpoint_enabled(0x0103));

    controller.start(false);
    let status = wait_state(&controller, RunState::Stepping);
    assert_eq!(status.registers.pc, 0x0103);
    assert_eq!(status.committed, 3);
    assert_eq!(commit_pcs(&drain(&events)), [0x0101, 0x0102, 0x0103]);

    // Nothing commits while suspended.
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(controller.snapshot().committed, 3);

    controller.single_step();
    let status = controller
        .wait_for(TIMEOUT, |status| {
            status.state == RunState::Stepping && status.registers.pc == 0x0104
        })
        .expect("suspended again after one instruction");
    assert_eq!(status.committed, 4);

    // Releasing sticky step lets the run continue freely.
    controller.set_sticky_step(false);
    controller
        .wait_for(TIMEOUT, |status| status.committed >= 8)
        .expect("run continues");
    assert_eq!(controller.state(), RunState::Running);
    controller.stop();
    wait_state(&controller, RunState::Stopped);
}

#[test]
fn pause_during_step_wait_holds_the_instruction() {
    let (_emulator, controller, events) = spawn(&[]);
    controller.add_breakpoint(0x0101);

    controller.start(false);
    let status = wait_state(&controller, RunState::Stepping);
    assert_eq!(status.committed, 1);

    controller.pause();
    wait_state(&controller, RunState::Paused);
    controller.single_step();
    // Queued behind the step request, so it returns once that was applied.
    let _ = controller.is_breakpoint_enabled(0x0000);

    std::thread::sleep(Duration::from_millis(50));
    let status = controller.snapshot();
    assert_eq!(status.state, RunState::Paused);
    assert_eq!(status.committed, 1);
    assert_eq!(status.registers.pc, 0x0101);

    // Resuming commits the released instruction and suspends before the next.
    controller.resume();
    let status = controller
        .wait_for(TIMEOUT, |status| {
            status.state == RunState::Stepping && status.registers.pc == 0x0102
        })
        .expect("one instruction after resume");
    assert_eq!(status.committed, 2);
    assert_eq!(commit_pcs(&drain(&events)), [0x0101, 0x0102]);

    controller.stop();
    wait_state(&controller, RunState::Stopped);
}

#[test]
fn single_step_request_suspends_a_running_program() {
    // JR -2: spin in place.
    let (_emulator, controller, _events) = spawn(&[0x18, 0xFE]);

    controller.start(false);
    controller
        .wait_for(TIMEOUT, |status| status.committed >= 1)
        .expect("running");
    controller.single_step();
    let status = wait_state(&controller, RunState::Stepping);
    assert_eq!(status.registers.pc, 0x0100);
}

#[test]
fn stop_while_suspended_abandons_the_decoded_instruction() {
    let (_emulator, controller, _events) = spawn(&[]);
    controller.add_breakpoint(0x0101);

    controller.start(false);
    wait_state(&controller, RunState::Stepping);
    controller.stop();
    let status = wait_state(&controller, RunState::Stopped);
    assert_eq!(status.registers.pc, 0x0101);
    assert_eq!(status.committed, 1);

    // Breakpoints survive a stop.
    assert!(controller.is_breakpoint_enabled(0x0101));
}

#[test]
fn unknown_opcode_halts_with_a_single_alert() {
    let (_emulator, controller, events) = spawn(&[0x00, 0xD3]);

    controller.start(false);
    let status = wait_state(&controller, RunState::Halted);
    assert_eq!(
        status.fault,
        Some(Fault::UnknownOpcode {
            opcode: 0xD3,
            pc: 0x0101
        })
    );
    assert_eq!(status.registers.pc, 0x0101);
    assert_eq!(status.committed, 1);

    // A halted CPU refuses to start again until reset. The query is queued
    // behind the start request, so it returns once that has been applied.
    controller.start(false);
    let _ = controller.is_breakpoint_enabled(0x0000);
    assert_eq!(controller.state(), RunState::Halted);

    let observed = drain(&events);
    let alerts: Vec<&str> = observed
        .iter()
        .filter_map(|event| match event {
            Event::Alert(message) => Some(message.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(alerts, ["INSTRUCTION: 0xD3\nAt ROM Offset: 0x0101"]);
    assert_eq!(commit_pcs(&observed), [0x0101]);
}

#[test]
fn unknown_opcode_logs_a_single_error() {
    test_log::install();
    let (_emulator, controller, _events) = spawn(&[0x00, 0x00, 0xEB]);

    controller.start(false);
    wait_state(&controller, RunState::Halted);
    assert_eq!(
        test_log::count(Level::Error, "invalid opcode 0xEB at PC=0x0102"),
        1
    );
}

#[test]
fn reset_restores_registers_and_clears_breakpoints() {
    let (_emulator, controller, _events) = spawn(&[0x00, 0xD3]);
    controller.add_breakpoint(0x0200);
    controller.start(false);
    wait_state(&controller, RunState::Halted);

    controller.reset();
    let status = wait_state(&controller, RunState::Idle);
    assert_eq!(status.fault, None);
    assert_eq!(status.registers.af, 0x0130);
    assert_eq!(status.registers.pc, 0x0100);
    assert_eq!(status.registers.hl, 0x014D);
    assert!(!status.registers.flag_is_set(Flags::ZERO));
    assert!(!controller.is_breakpoint_enabled(0x0200));
}

#[test]
fn breakpoints_can_be_removed() {
    let (_emulator, controller, _events) = spawn(&[]);

    controller.add_breakpoint(0x1234);
    controller.add_breakpoint(0x4321);
    controller.remove_breakpoint(0x1234);
    assert!(!controller.is_breakpoint_enabled(0x1234));
    assert!(controller.is_breakpoint_enabled(0x4321));
}

#[test]
fn pause_holds_execution_until_resumed() {
    let (_emulator, controller, events) = spawn(&[0x18, 0xFE]);

    controller.start(false);
    controller
        .wait_for(TIMEOUT, |status| status.committed >= 1)
        .expect("running");
    controller.pause();
    let paused = wait_state(&controller, RunState::Paused);

    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(controller.snapshot().committed, paused.committed);

    controller.resume();
    controller
        .wait_for(TIMEOUT, |status| status.committed > paused.committed)
        .expect("resumed");
    controller.stop();
    wait_state(&controller, RunState::Stopped);

    let states: Vec<RunState> = drain(&events)
        .into_iter()
        .filter_map(|event| match event {
            Event::State(state) => Some(state),
            _ => None,
        })
        .collect();
    assert_eq!(
        states,
        [
            RunState::Running,
            RunState::Paused,
            RunState::Running,
            RunState::Stopped
        ]
    );
}

#[test]
fn stop_instruction_ends_the_run_and_start_continues() {
    let (emulator, controller, _events) = spawn(&[
        0x3E, 0x42, // LD A, 0x42
        0x10, 0x00, // STOP
        0x3C, // INC A
        0x10, 0x00, // STOP
    ]);

    controller.start(false);
    let status = wait_state(&controller, RunState::Stopped);
    assert_eq!(status.registers.pc, 0x0104);
    assert_eq!(status.committed, 2);

    controller.start(false);
    controller
        .wait_for(TIMEOUT, |status| {
            status.state == RunState::Stopped && status.committed == 4
        })
        .expect("second run stops on the next STOP");

    let machine = emulator.shutdown().expect("worker exits cleanly");
    assert_eq!(machine.cpu.regs.a(), 0x43);
    assert_eq!(machine.cpu.regs.pc, 0x0107);
}

#[test]
fn controls_without_a_run_are_ignored() {
    let (_emulator, controller, _events) = spawn(&[]);

    controller.pause();
    controller.single_step();
    controller.stop();
    let _ = controller.is_breakpoint_enabled(0x0000);
    assert_eq!(controller.state(), RunState::Idle);
    assert_eq!(controller.snapshot().committed, 0);
}

#[test]
fn controller_outlives_the_worker() {
    let (emulator, controller, _events) = spawn(&[]);
    emulator.shutdown().expect("worker exits cleanly");

    controller.start(false);
    assert!(!controller.is_breakpoint_enabled(0x0100));
}

#[test]
fn machine_steps_without_a_scheduler() {
    let mut machine = Machine::new(FlatMemory::with_program(0x0100, &[
        0x3C, // INC A
        0xD3, // hole
    ]));

    let retired = machine.step().expect("INC A is defined");
    assert_eq!(retired.mnemonic, "INC A");
    assert_eq!(machine.cpu.regs.a(), 0x02);
    assert_eq!(machine.cpu.regs.pc, 0x0101);

    assert_eq!(
        machine.step(),
        Err(Fault::UnknownOpcode {
            opcode: 0xD3,
            pc: 0x0101
        })
    );
    assert_eq!(machine.cpu.regs.pc, 0x0101);
}

#[test]
fn wait_for_accepts_an_unbounded_timeout() {
    let (_emulator, controller, _events) = spawn(&[]);

    let status = controller
        .wait_for(Duration::MAX, |status| status.state == RunState::Idle)
        .expect("already idle");
    assert_eq!(status.committed, 0);

    controller.start(false);
    controller
        .wait_for(Duration::MAX, |status| status.committed >= 2)
        .expect("two commits");
    controller.stop();
    wait_state(&controller, RunState::Stopped);
}
