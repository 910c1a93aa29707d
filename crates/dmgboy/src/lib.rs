use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use dmgboy_core::{Controller, Emulator, Machine, Observer, Registers, RunConfig, RunState};

const USAGE: &str = "usage: dmgboy <rom> [--debug] [--fast] [--break ADDR]...";

const HELP: &str = "\
commands:
  s          single step
  c          continue (clear sticky step)
  p / r      pause / resume
  b ADDR     toggle breakpoint at hex ADDR
  i          print state, registers and any fault
  start      start a new run
  stop       stop the current run
  reset      reset the CPU and clear breakpoints
  q          quit";

/// Runner options taken from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Start in debug mode (print registers and pace every instruction).
    pub debug: bool,
    /// Drop the pacing delays.
    pub fast: bool,
    pub breakpoints: Vec<u16>,
}

/// Parse `<rom> [--debug] [--fast] [--break ADDR]...`.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<(PathBuf, Options)> {
    let mut rom = None;
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" => options.debug = true,
            "--fast" => options.fast = true,
            "--break" => {
                let addr = args.next().context("--break needs an address")?;
                options.breakpoints.push(parse_addr(&addr)?);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            path if rom.is_none() => rom = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
        }
    }

    let rom = rom.ok_or_else(|| anyhow!("no ROM path provided\n{USAGE}"))?;
    Ok((rom, options))
}

/// Parse a hex address with an optional `0x` prefix.
pub fn parse_addr(text: &str) -> Result<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid address '{text}'"))
}

/// One line of console input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Step,
    Continue,
    Pause,
    Resume,
    ToggleBreakpoint(u16),
    Info,
    Start,
    Stop,
    Reset,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some("s") | Some("step") => ConsoleCommand::Step,
            Some("c") | Some("continue") => ConsoleCommand::Continue,
            Some("p") | Some("pause") => ConsoleCommand::Pause,
            Some("r") | Some("resume") => ConsoleCommand::Resume,
            Some("b") | Some("break") => {
                let addr = words.next().context("b needs an address")?;
                ConsoleCommand::ToggleBreakpoint(parse_addr(addr)?)
            }
            Some("i") | Some("info") => ConsoleCommand::Info,
            Some("start") => ConsoleCommand::Start,
            Some("stop") => ConsoleCommand::Stop,
            Some("reset") => ConsoleCommand::Reset,
            Some("q") | Some("quit") => ConsoleCommand::Quit,
            Some(other) => bail!("unknown command '{other}'"),
            None => bail!("empty command"),
        };
        Ok(command)
    }
}

/// Prints alerts and state changes to the terminal.
struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn on_commit(&mut self, registers: &Registers) {
        log::trace!("{registers}");
    }

    fn on_alert(&mut self, message: &str) {
        eprintln!("CPU halted\n{message}");
    }

    fn on_state(&mut self, state: RunState) {
        println!("[{state:?}]");
    }
}

fn apply(controller: &Controller, command: ConsoleCommand, debug: bool) {
    match command {
        ConsoleCommand::Step => controller.single_step(),
        ConsoleCommand::Continue => controller.set_sticky_step(false),
        ConsoleCommand::Pause => controller.pause(),
        ConsoleCommand::Resume => controller.resume(),
        ConsoleCommand::ToggleBreakpoint(addr) => {
            if controller.is_breakpoint_enabled(addr) {
                controller.remove_breakpoint(addr);
                println!("breakpoint 0x{addr:04X} off");
            } else {
                controller.add_breakpoint(addr);
                println!("breakpoint 0x{addr:04X} on");
            }
        }
        ConsoleCommand::Info => println!("{}", info(controller)),
        ConsoleCommand::Start => controller.start(debug),
        ConsoleCommand::Stop => controller.stop(),
        ConsoleCommand::Reset => controller.reset(),
        ConsoleCommand::Quit => {}
    }
}

/// State, instruction count and registers, followed by the fault when the
/// CPU is halted on one.
fn info(controller: &Controller) -> String {
    let status = controller.snapshot();
    let mut text = format!(
        "{:?} after {} instructions\n{}",
        status.state, status.committed, status.registers
    );
    if let Some(fault) = controller.fault() {
        text.push_str(&format!("\nfault:\n{fault}"));
    }
    text
}

/// Run `rom` on a flat machine and drive it from stdin until `q` or EOF.
pub fn run(rom: &[u8], options: &Options) -> Result<()> {
    let config = if options.fast {
        RunConfig::unthrottled()
    } else {
        RunConfig::default()
    };

    let emulator = Emulator::spawn(Machine::with_rom(rom), ConsoleObserver, config)
        .context("failed to spawn CPU thread")?;
    let controller = emulator.controller();
    for &addr in &options.breakpoints {
        controller.add_breakpoint(addr);
    }
    controller.start(options.debug);
    println!("{HELP}");

    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read console input")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ConsoleCommand>() {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => apply(&controller, command, options.debug),
            Err(e) => eprintln!("{e:#}"),
        }
    }

    if let Some(machine) = emulator.shutdown() {
        println!("{}", machine.cpu.regs);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
