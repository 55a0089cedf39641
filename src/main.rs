use std::fs::File;

use anyhow::Context;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use wrapsnake::app;
use wrapsnake::clock::{Clock, SystemClock};
use wrapsnake::consts::LOG_FILE_NAME;
use wrapsnake::game::Game;
use wrapsnake::term::TermManager;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the game, so logs go to a file. No file, no logs.
    if let Ok(file) = File::create(std::env::temp_dir().join(LOG_FILE_NAME)) {
        // Only fails if a logger is already set
        WriteLogger::init(LevelFilter::Info, Config::default(), file).ok();
    }

    let mut term = TermManager::new().context("Could not start the terminal")?;
    if let Err(e) = term.setup() {
        let _ = term.restore();
        return Err(e).context("Could not set up the terminal");
    }
    info!("Starting wrapsnake");

    let clock = SystemClock;
    let mut game = Game::new(clock.now_secs());
    let result = app::run(&mut term, &clock, &mut game);

    // Restore the terminal whether or not the game loop failed
    term.restore().context("Could not restore the terminal")?;
    result.context("Game loop failed")
}
