//! Draws a [`Game`] onto a [`Screen`]. Nothing here keeps state; every frame
//! is painted from scratch and the screen works out what actually changed.
use crate::consts::{WIDTH, HEIGHT, PAUSE_MENU_WIDTH, PAUSE_MENU_HEIGHT};
use crate::game::Game;
use crate::term::{Screen, Window};

const BORDER_CHAR: char = '#';
const SNAKE_HEAD_CHAR: char = 'O';
const SNAKE_BODY_CHAR: char = 'o';
const FOOD_CHAR: char = '*';

pub fn draw_frame<S: Screen + ?Sized>(screen: &mut S, game: &Game, now: u64) {
    screen.clear();

    let grid = game.grid();
    let (end_x, end_y) = (grid.width() - 1, grid.height() - 1);
    for x in 0..grid.width() {
        screen.print_at((x, 0), BORDER_CHAR);
        screen.print_at((x, end_y), BORDER_CHAR);
    }
    for y in 0..grid.height() {
        screen.print_at((0, y), BORDER_CHAR);
        screen.print_at((end_x, y), BORDER_CHAR);
    }

    for (i, pos) in game.snake().body().iter().enumerate() {
        let ch = if i == 0 {SNAKE_HEAD_CHAR} else {SNAKE_BODY_CHAR};
        screen.print_at(*pos, ch);
    }

    screen.print_at(game.food(), FOOD_CHAR);

    let status = format!("Score: {} | Time: {} seconds", game.score(), game.elapsed(now));
    screen.print_str_at((0, grid.height()), &status);
}

/// Centered panel drawn on top of an already painted frame.
pub fn draw_pause_menu<S: Screen + ?Sized>(screen: &mut S, game: &Game, now: u64) {
    let top_left = (WIDTH / 2 - PAUSE_MENU_WIDTH / 2, HEIGHT / 2 - PAUSE_MENU_HEIGHT / 2);
    let win = Window::new(top_left, PAUSE_MENU_WIDTH, PAUSE_MENU_HEIGHT);

    win.draw(screen);
    win.print(screen, (2, 1), "GAME PAUSED");
    win.print(screen, (2, 3), &format!("Current Score: {}", game.score()));
    win.print(screen, (2, 4), &format!("Play Time: {} seconds", game.elapsed(now)));
    win.print(screen, (2, 6), "Press P to unpause");
}

pub fn draw_game_over<S: Screen + ?Sized>(screen: &mut S, score: u32) {
    screen.clear();
    screen.print_str_at((WIDTH / 2 - 5, HEIGHT / 2), "Game Over!");
    screen.print_str_at((WIDTH / 2 - 6, HEIGHT / 2 + 1), &format!("Score: {}", score));
}
