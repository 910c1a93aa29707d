use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::control::{Command, Controller, Shared, Status};
use super::session::{Breakpoints, Session};
use super::{Machine, Observer, RunState};
use crate::config::RunConfig;
use crate::cpu::{cb_mnemonic, Effect, Operand};
use crate::error::Fault;
use crate::memory::Memory;

const PREFIX_CB: u8 = 0xCB;

/// Owns the scheduler thread for one machine.
///
/// The worker starts Idle. Drive it through the `Controller` returned by
/// `controller()`; dropping the emulator shuts the worker down.
pub struct Emulator<M: Memory + Send + 'static> {
    controller: Controller,
    handle: Option<JoinHandle<Machine<M>>>,
}

impl<M: Memory + Send + 'static> Emulator<M> {
    pub fn spawn<O: Observer + 'static>(
        machine: Machine<M>,
        observer: O,
        config: RunConfig,
    ) -> std::io::Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let shared = Arc::new(Shared::new(Status {
            registers: machine.cpu.regs,
            ..Status::default()
        }));

        let worker = Worker {
            machine,
            observer,
            config,
            commands: receiver,
            shared: Arc::clone(&shared),
            session: Session::default(),
            breakpoints: Breakpoints::default(),
            state: RunState::Idle,
            fault: None,
            committed: 0,
            suspended: false,
            shutdown: false,
        };

        let handle = thread::Builder::new()
            .name("dmgboy_cpu".into())
            .spawn(move || worker.run())?;

        Ok(Self {
            controller: Controller::new(sender, shared),
            handle: Some(handle),
        })
    }

    pub fn controller(&self) -> Controller {
        self.controller.clone()
    }

    /// Stop the worker and hand back the machine it was driving.
    ///
    /// Returns `None` if the worker thread panicked.
    pub fn shutdown(mut self) -> Option<Machine<M>> {
        self.join()
    }

    fn join(&mut self) -> Option<Machine<M>> {
        let handle = self.handle.take()?;
        self.controller.send(Command::Shutdown);
        match handle.join() {
            Ok(machine) => Some(machine),
            Err(_) => {
                log::error!("CPU worker thread panicked");
                None
            }
        }
    }
}

impl<M: Memory + Send + 'static> Drop for Emulator<M> {
    fn drop(&mut self) {
        self.join();
    }
}

/// State private to the scheduler thread.
struct Worker<M, O> {
    machine: Machine<M>,
    observer: O,
    config: RunConfig,
    commands: Receiver<Command>,
    shared: Arc<Shared>,
    session: Session,
    breakpoints: Breakpoints,
    state: RunState,
    fault: Option<Fault>,
    committed: u64,
    /// Inside the step wait of the current iteration.
    suspended: bool,
    shutdown: bool,
}

impl<M: Memory, O: Observer> Worker<M, O> {
    fn run(mut self) -> Machine<M> {
        log::debug!("CPU worker started");
        while !self.shutdown {
            if self.session.running {
                self.iterate();
                continue;
            }
            match self.commands.recv() {
                Ok(command) => self.handle(command),
                Err(_) => break,
            }
        }
        log::debug!("CPU worker exiting");
        self.machine
    }

    /// One instruction: breakpoint check, decode, suspension, commit.
    fn iterate(&mut self) {
        self.drain();
        if !self.session.running {
            return;
        }

        let pc = self.machine.cpu.regs.pc;
        if self.breakpoints.contains(pc) {
            log::debug!("Breakpoint hit at 0x{pc:04X}");
            self.session.break_here();
        }
        if self.session.sticky_step {
            self.session.step = true;
        }

        let opcode = match self.machine.cpu.decode(&mut self.machine.memory) {
            Ok(opcode) => opcode,
            Err(fault) => {
                self.halt(fault);
                return;
            }
        };
        log::info!("Instruction: {}", opcode.mnemonic);

        // A stop or reset while suspended abandons the decoded instruction.
        if !self.wait_to_commit() {
            return;
        }

        let retired = self
            .machine
            .cpu
            .execute(&mut self.machine.memory, opcode);
        if let (PREFIX_CB, Operand::Byte(cb)) = (retired.opcode, retired.operand) {
            log::trace!("CB instruction: {}", cb_mnemonic(cb));
        }
        self.committed += 1;
        self.observer.on_commit(&self.machine.cpu.regs);

        if retired.effect == Effect::Stop {
            log::info!("STOP at 0x{:04X}; run ended", retired.pc);
            self.session = Session::default();
            self.set_state(RunState::Stopped);
        }
        self.publish();
    }

    fn halt(&mut self, fault: Fault) {
        log::error!(
            "GB CPU locked: invalid opcode 0x{:02X} at PC=0x{:04X} ({})",
            fault.opcode(),
            fault.pc(),
            self.machine.cpu.regs
        );
        self.observer.on_alert(&fault.to_string());
        self.session = Session::default();
        self.fault = Some(fault);
        self.set_state(RunState::Halted);
    }

    /// Hold the decoded instruction until the run is neither paused nor
    /// waiting on a step, then print the registers and apply the debug delay
    /// (or the run delay outside debug mode).
    ///
    /// A pause that arrives during the step wait is honoured after the step
    /// is released. Returns false if the run ended while held.
    fn wait_to_commit(&mut self) -> bool {
        loop {
            if !self.wait_while_paused() {
                return false;
            }
            if !(self.session.debug && self.session.step) {
                break;
            }
            if !self.wait_for_step() {
                return false;
            }
        }

        if self.session.debug {
            log::debug!("{}", self.machine.cpu.regs);
            pace(self.config.debug_delay);
            self.session.step = false;
        } else {
            pace(self.config.run_delay);
        }
        true
    }

    fn wait_while_paused(&mut self) -> bool {
        while self.session.paused && self.session.running {
            self.wait_command(self.config.pause_poll);
        }
        self.session.running
    }

    fn wait_for_step(&mut self) -> bool {
        self.suspended = true;
        self.refresh_state();
        while self.session.step && self.session.running {
            self.wait_command(self.config.step_poll);
        }
        self.suspended = false;
        if !self.session.running {
            return false;
        }
        self.refresh_state();
        true
    }

    fn drain(&mut self) {
        loop {
            match self.commands.try_recv() {
                Ok(command) => self.handle(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.handle(Command::Shutdown);
                    break;
                }
            }
        }
    }

    fn wait_command(&mut self, poll: Duration) {
        match self.commands.recv_timeout(poll) {
            Ok(command) => self.handle(command),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => self.handle(Command::Shutdown),
        }
    }

    fn handle(&mut self, command: Command) {
        log::trace!("Control request: {command:?}");
        match command {
            Command::Start { debug } => self.start(debug),
            Command::Stop => {
                if self.session.running {
                    self.session = Session::default();
                    self.set_state(RunState::Stopped);
                }
            }
            Command::Pause => self.with_active_session("Pause", |session| session.paused = true),
            Command::Resume => self.with_active_session("Resume", |session| session.paused = false),
            Command::SingleStep => self.with_active_session("Single step", Session::single_step),
            Command::SetStickyStep(enabled) => {
                self.with_active_session("Sticky step", |session| session.set_sticky_step(enabled))
            }
            Command::Reset => self.reset(),
            Command::AddBreakpoint(addr) => {
                if self.breakpoints.add(addr) {
                    log::debug!("Breakpoint enabled at 0x{addr:04X}");
                }
            }
            Command::RemoveBreakpoint(addr) => {
                if self.breakpoints.remove(addr) {
                    log::debug!("Breakpoint disabled at 0x{addr:04X}");
                }
            }
            Command::QueryBreakpoint(addr, reply) => {
                let _ = reply.send(self.breakpoints.contains(addr));
            }
            Command::Shutdown => {
                self.session.running = false;
                self.shutdown = true;
            }
        }
    }

    fn start(&mut self, debug: bool) {
        if self.session.running {
            log::debug!("Start ignored: already running");
            return;
        }
        if self.state == RunState::Halted {
            log::warn!("Start ignored: CPU is halted on a fault; reset first");
            return;
        }
        self.session = Session::start(debug);
        self.refresh_state();
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.session = Session::default();
        self.breakpoints.clear();
        self.fault = None;
        self.committed = 0;
        self.set_state(RunState::Idle);
    }

    /// Apply a session-level request, or log that there is no run to apply it to.
    fn with_active_session(&mut self, request: &str, apply: impl FnOnce(&mut Session)) {
        if !self.session.running {
            log::warn!("{request} ignored: no active run");
            return;
        }
        apply(&mut self.session);
        self.refresh_state();
    }

    /// Derive the state of an active run from the session flags.
    fn refresh_state(&mut self) {
        if !self.session.running {
            return;
        }
        let state = if self.session.paused {
            RunState::Paused
        } else if self.suspended && self.session.step {
            RunState::Stepping
        } else {
            RunState::Running
        };
        self.set_state(state);
    }

    fn set_state(&mut self, state: RunState) {
        if self.state == state {
            return;
        }
        log::debug!("CPU state: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.observer.on_state(state);
        self.publish();
    }

    fn publish(&self) {
        self.shared.publish(Status {
            state: self.state,
            registers: self.machine.cpu.regs,
            fault: self.fault,
            committed: self.committed,
        });
    }
}

fn pace(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
