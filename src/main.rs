use anyhow::Result;
use blackjack_round::round::{self, RoundInput};

fn log() -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Warn,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    log()?;
    let result = round::run(RoundInput::default())?;
    for line in &result.lines {
        println!("{line}");
    }
    Ok(())
}
