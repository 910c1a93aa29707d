use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let (rom_path, options) = dmgboy::parse_args(std::env::args().skip(1))?;
    log::info!("Loading ROM '{}'", rom_path.display());
    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    dmgboy::run(&rom, &options)
}
