use crate::Coords;
use crate::consts::MAX_FOOD_ATTEMPTS;
use crate::grid::Grid;
use crate::input::Command;
use crate::snake::{Snake, Direction};

use log::{debug, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Everything that changes while playing. Timestamps are whole seconds.
pub struct Game {
    grid: Grid,
    snake: Snake,
    food: Coords,
    score: u32,
    over: bool,
    paused: bool,
    start_time: u64,
    pause_start_time: u64,
    total_pause_time: u64,
    rng: StdRng,
}

impl Game {
    /// A length-1 snake in the middle of the default grid, heading right.
    pub fn new(now: u64) -> Self {
        let grid = Grid::default();
        let snake = Snake::new(grid.center(), Direction::Right);
        Game::with_parts(grid, snake, now, StdRng::from_entropy())
    }

    pub fn with_parts(grid: Grid, snake: Snake, now: u64, rng: StdRng) -> Self {
        let mut game = Game {
            grid,
            snake,
            food: (0, 0),
            score: 0,
            over: false,
            paused: false,
            start_time: now,
            pause_start_time: 0,
            total_pause_time: 0,
            rng,
        };
        game.relocate_food();
        game
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn total_pause_time(&self) -> u64 {
        self.total_pause_time
    }

    /// Seconds of actual play. While paused the clock is frozen at the moment
    /// the pause began.
    pub fn elapsed(&self, now: u64) -> u64 {
        let until = if self.paused { self.pause_start_time } else { now };
        until
            .saturating_sub(self.start_time)
            .saturating_sub(self.total_pause_time)
    }

    /// One game step: move, eat, then check for self-collision.
    pub fn update(&mut self) {
        self.move_snake();

        if self.snake.hits_itself() {
            info!("Snake ran into itself at {:?}", self.snake.head());
            self.over = true;
        }
    }

    pub fn apply(&mut self, command: Command, now: u64) {
        match command {
            Command::Turn(dir) if !self.paused => self.snake.turn(dir),
            Command::Turn(_) => {}
            Command::TogglePause => self.toggle_pause(now),
            Command::Quit => self.quit(),
        }
    }

    pub fn toggle_pause(&mut self, now: u64) {
        self.paused = !self.paused;

        if self.paused {
            self.pause_start_time = now;
            info!("Paused at {}s of play", self.elapsed(now));
        } else {
            let paused_for = now.saturating_sub(self.pause_start_time);
            self.total_pause_time += paused_for;
            info!("Resumed after {}s", paused_for);
        }
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.over = true;
    }

    ///////////////////////////////////////////////////////////////////////////

    fn move_snake(&mut self) {
        let old_tail = self.snake.move_step(&self.grid);

        if self.snake.head() == self.food {
            self.snake.grow(old_tail);
            self.score += 1;
            debug!("Food eaten at {:?}, score {}", self.food, self.score);
            self.relocate_food();
        }
    }

    fn relocate_food(&mut self) {
        match self.spawn_food() {
            Some(pos) => self.food = pos,
            None => {
                warn!("No free cell left for food, ending game");
                self.over = true;
            }
        }
    }

    fn spawn_food(&mut self) -> Option<Coords> {
        for _ in 0..MAX_FOOD_ATTEMPTS {
            let pos = self.grid.random_interior(&mut self.rng);
            if !self.snake.occupies(pos) {
                return Some(pos);
            }
        }

        warn!("Food sampling gave up after {} tries, scanning free cells", MAX_FOOD_ATTEMPTS);
        let snake = &self.snake;
        let choices: Vec<Coords> = self.grid.interior().filter(|pos| !snake.occupies(*pos)).collect();
        choices.choose(&mut self.rng).copied()
    }
}
