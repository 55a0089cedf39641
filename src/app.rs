use crate::clock::Clock;
use crate::consts::TICK_INTERVAL_MS;
use crate::error::Result;
use crate::game::Game;
use crate::input::command_for;
use crate::render;
use crate::term::Screen;
use std::time::Duration;

use log::info;

/// Runs the game to completion: one key poll, one update and one frame per
/// tick, then the game-over screen until a key is pressed.
pub fn run<S: Screen, C: Clock>(screen: &mut S, clock: &C, game: &mut Game) -> Result<()> {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    screen.set_cursor_visibility(false)?;

    while !game.is_over() {
        if let Some(key) = screen.poll_key()? {
            if let Some(command) = command_for(&key) {
                game.apply(command, clock.now_secs());
            }
        }

        // A quit still lets this tick's step run; the loop stops after it
        if !game.is_paused() {
            game.update();
        }

        let now = clock.now_secs();
        render::draw_frame(screen, game, now);
        if game.is_paused() {
            render::draw_pause_menu(screen, game, now);
        }
        screen.flush()?;

        clock.sleep(tick);
    }

    info!(
        "Game over: score {}, length {}, {}s played",
        game.score(),
        game.snake().len(),
        game.elapsed(clock.now_secs())
    );

    render::draw_game_over(screen, game.score());
    screen.flush()?;
    screen.read_key_blocking()?;
    Ok(())
}
