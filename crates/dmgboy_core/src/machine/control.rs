use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use super::RunState;
use crate::cpu::Registers;
use crate::error::Fault;

/// Requests sent from a `Controller` to the scheduler thread.
#[derive(Debug)]
pub(super) enum Command {
    Start { debug: bool },
    Stop,
    Pause,
    Resume,
    SingleStep,
    SetStickyStep(bool),
    Reset,
    AddBreakpoint(u16),
    RemoveBreakpoint(u16),
    QueryBreakpoint(u16, Sender<bool>),
    Shutdown,
}

/// Snapshot published by the scheduler after every commit and state change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub state: RunState,
    pub registers: Registers,
    /// Set when the run halted on a fault; cleared by reset.
    pub fault: Option<Fault>,
    /// Instructions committed since the scheduler started or was last reset.
    pub committed: u64,
}

/// Status cell shared between the scheduler and its controllers.
#[derive(Debug)]
pub(super) struct Shared {
    status: Mutex<Status>,
    changed: Condvar,
}

impl Shared {
    pub fn new(status: Status) -> Self {
        Self {
            status: Mutex::new(status),
            changed: Condvar::new(),
        }
    }

    pub fn publish(&self, status: Status) {
        *self.status.lock() = status;
        self.changed.notify_all();
    }
}

/// Thread-safe handle to a running scheduler.
///
/// Every control request is queued and applied by the scheduler between
/// instructions. Register state is never written from here; it can only be
/// read back through `snapshot`.
#[derive(Clone, Debug)]
pub struct Controller {
    commands: Sender<Command>,
    shared: Arc<Shared>,
}

impl Controller {
    pub(super) fn new(commands: Sender<Command>, shared: Arc<Shared>) -> Self {
        Self { commands, shared }
    }

    pub(super) fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            log::debug!("CPU worker has exited; control request dropped");
        }
    }

    pub fn start(&self, debug: bool) {
        self.send(Command::Start { debug });
    }

    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    /// Advance past the current step suspension and suspend again before the
    /// next instruction. Enters debug mode if it was off.
    pub fn single_step(&self) {
        self.send(Command::SingleStep);
    }

    /// `true` suspends before every instruction; `false` releases a pending
    /// suspension and lets the run continue.
    pub fn set_sticky_step(&self, enabled: bool) {
        self.send(Command::SetStickyStep(enabled));
    }

    pub fn reset(&self) {
        self.send(Command::Reset);
    }

    pub fn add_breakpoint(&self, addr: u16) {
        self.send(Command::AddBreakpoint(addr));
    }

    pub fn remove_breakpoint(&self, addr: u16) {
        self.send(Command::RemoveBreakpoint(addr));
    }

    /// Ask the scheduler whether a breakpoint is enabled at `addr`.
    ///
    /// Blocks until the scheduler has applied every request queued before
    /// this one. Returns false if the scheduler is gone.
    pub fn is_breakpoint_enabled(&self, addr: u16) -> bool {
        let (reply, answer) = mpsc::channel();
        self.send(Command::QueryBreakpoint(addr, reply));
        answer.recv().unwrap_or(false)
    }

    pub fn state(&self) -> RunState {
        self.shared.status.lock().state
    }

    pub fn snapshot(&self) -> Status {
        self.shared.status.lock().clone()
    }

    pub fn fault(&self) -> Option<Fault> {
        self.shared.status.lock().fault
    }

    /// Block until the published status satisfies `ready` or `timeout`
    /// elapses. Returns the matching status, if any.
    ///
    /// A timeout too large to represent as a deadline waits without one.
    pub fn wait_for(&self, timeout: Duration, mut ready: impl FnMut(&Status) -> bool) -> Option<Status> {
        let deadline = Instant::now().checked_add(timeout);
        let mut status = self.shared.status.lock();
        while !ready(&*status) {
            match deadline {
                Some(deadline) => {
                    if self.shared.changed.wait_until(&mut status, deadline).timed_out() {
                        return ready(&*status).then(|| status.clone());
                    }
                }
                None => self.shared.changed.wait(&mut status),
            }
        }
        Some(status.clone())
    }
}
