//! Hard-coded game configuration. Nothing here is read at runtime.
use crate::TermInt;

/// Width of the playfield, border included
pub const WIDTH: TermInt = 80;

/// Height of the playfield, border included. The status line sits below it.
pub const HEIGHT: TermInt = 23;

/// Rows needed on screen: the playfield plus one status line
pub const SCREEN_HEIGHT: TermInt = HEIGHT + 1;

pub const MAX_LENGTH: usize = 100;

/// Fixed delay between two ticks of the main loop
pub const TICK_INTERVAL_MS: u64 = 100;

pub const PAUSE_MENU_WIDTH: TermInt = 40;
pub const PAUSE_MENU_HEIGHT: TermInt = 10;

/// Random draws tried before food placement falls back to scanning the free cells
pub const MAX_FOOD_ATTEMPTS: usize = 1000;

pub const LOG_FILE_NAME: &str = "wrapsnake.log";
