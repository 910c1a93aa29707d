use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn parse_args_reads_rom_and_flags() {
    let (rom, options) =
        parse_args(args(&["tetris.gb", "--debug", "--break", "0x0150", "--break", "c000"]))
            .unwrap();
    assert_eq!(rom, PathBuf::from("tetris.gb"));
    assert!(options.debug);
    assert!(!options.fast);
    assert_eq!(options.breakpoints, [0x0150, 0xC000]);
}

#[test]
fn parse_args_rejects_bad_input() {
    assert!(parse_args(args(&[])).is_err());
    assert!(parse_args(args(&["a.gb", "b.gb"])).is_err());
    assert!(parse_args(args(&["a.gb", "--turbo"])).is_err());
    assert!(parse_args(args(&["a.gb", "--break"])).is_err());
    assert!(parse_args(args(&["a.gb", "--break", "0x10000"])).is_err());
}

#[test]
fn parse_addr_accepts_optional_prefix() {
    assert_eq!(parse_addr("0x0100").unwrap(), 0x0100);
    assert_eq!(parse_addr("0XFF80").unwrap(), 0xFF80);
    assert_eq!(parse_addr("ffff").unwrap(), 0xFFFF);
    assert!(parse_addr("0xZZ").is_err());
}

#[test]
fn console_commands_parse() {
    assert_eq!("s".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Step);
    assert_eq!("c".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Continue);
    assert_eq!(
        "b 0x0150".parse::<ConsoleCommand>().unwrap(),
        ConsoleCommand::ToggleBreakpoint(0x0150)
    );
    assert_eq!("  reset ".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Reset);
    assert_eq!("q".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Quit);
    assert!("b".parse::<ConsoleCommand>().is_err());
    assert!("jump".parse::<ConsoleCommand>().is_err());
}

#[test]
fn info_reports_the_fault_of_a_halted_cpu() {
    use std::time::Duration;

    let mut rom = vec![0x00; 0x0101];
    rom[0x0100] = 0xD3;
    let emulator = Emulator::spawn(Machine::with_rom(&rom), ConsoleObserver, RunConfig::unthrottled())
        .expect("spawn CPU worker");
    let controller = emulator.controller();

    assert!(!info(&controller).contains("fault"));

    controller.start(false);
    controller
        .wait_for(Duration::from_secs(5), |status| status.state == RunState::Halted)
        .expect("halts on 0xD3");
    let text = info(&controller);
    assert!(text.starts_with("Halted after 0 instructions"));
    assert!(text.ends_with("fault:\nINSTRUCTION: 0xD3\nAt ROM Offset: 0x0100"));
}
