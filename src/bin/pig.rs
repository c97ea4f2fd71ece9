//! pig: play Pig in the terminal.

use std::process;

use anyhow::{Context, Result};
use log::LevelFilter;

use rust_pig::session::USAGE;
use rust_pig::{Command, ConsoleSink, GameDriver, LaunchOptions, LogSink, PigError, Session};

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let options = match LaunchOptions::parse(std::env::args().skip(1)) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            let err = PigError::from(err);
            eprintln!("{err}\n");
            eprintln!("{USAGE}");
            process::exit(err.exit_code());
        }
    };

    let Session {
        mut game,
        seats,
        seed,
    } = Session::build(&options);
    log::debug!("replay with --seed {seed}");

    let mut sink = (ConsoleSink::stdout(), LogSink);
    GameDriver::new(seats)
        .run(game.as_mut(), &mut sink)
        .context("game aborted")?;
    Ok(())
}
