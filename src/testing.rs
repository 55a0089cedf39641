//! In-memory stand-ins for the terminal and the clock.
use crate::{Coords, TermInt};
use crate::clock::Clock;
use crate::error::Result;
use crate::term::Screen;
use std::{cell::Cell, collections::VecDeque, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct FakeScreen {
    width: TermInt,
    height: TermInt,
    cells: Vec<char>,
    /// One entry per `poll_key` call; `None` means no key that tick
    pub keys: VecDeque<Option<KeyEvent>>,
    pub flushes: usize,
    pub cursor_visible: bool,
}

impl FakeScreen {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        FakeScreen {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
            keys: VecDeque::new(),
            flushes: 0,
            cursor_visible: true,
        }
    }

    pub fn row(&self, y: TermInt) -> String {
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize].iter().collect()
    }

    pub fn char_at(&self, pos: Coords) -> char {
        self.cells[pos.1 as usize * self.width as usize + pos.0 as usize]
    }

    pub fn contains(&self, text: &str) -> bool {
        (0..self.height).any(|y| self.row(y).contains(text))
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent { code, modifiers: KeyModifiers::NONE }
}

impl Screen for FakeScreen {
    fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = ' ';
        }
    }

    fn print_at(&mut self, pos: Coords, ch: char) {
        if pos.0 < self.width && pos.1 < self.height {
            self.cells[pos.1 as usize * self.width as usize + pos.0 as usize] = ch;
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front().flatten())
    }

    fn read_key_blocking(&mut self) -> Result<KeyEvent> {
        Ok(self.keys.pop_front().flatten().unwrap_or_else(|| key(KeyCode::Enter)))
    }

    fn set_cursor_visibility(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }
}

/// Virtual time: `sleep` advances the clock instead of blocking.
pub struct FakeClock {
    millis: Cell<u64>,
}

impl FakeClock {
    pub fn starting_at(secs: u64) -> Self {
        FakeClock { millis: Cell::new(secs * 1000) }
    }
}

impl Clock for FakeClock {
    fn now_secs(&self) -> u64 {
        self.millis.get() / 1000
    }

    fn sleep(&self, duration: Duration) {
        self.millis.set(self.millis.get() + duration.as_millis() as u64);
    }
}
