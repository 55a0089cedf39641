use crate::{Coords, TermInt};
use crate::consts::{WIDTH, SCREEN_HEIGHT};
use crate::error::{GameError, Result};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// What the game needs from a terminal. Drawing calls only touch a buffer;
/// nothing shows up until `flush`.
pub trait Screen {
    /// Blanks the whole drawing buffer.
    fn clear(&mut self);

    fn print_at(&mut self, pos: Coords, ch: char);

    fn print_str_at(&mut self, pos: Coords, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.print_at((pos.0 + i as TermInt, pos.1), ch);
        }
    }

    fn flush(&mut self) -> Result<()>;

    /// Non-blocking: `None` when no key is waiting.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;

    fn read_key_blocking(&mut self) -> Result<KeyEvent>;

    fn set_cursor_visibility(&mut self, visible: bool) -> Result<()>;
}

/// A bordered panel drawn over whatever is below it. Text positions passed
/// to `print` are relative to the panel's own top-left corner.
pub struct Window {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl Window {
    pub fn new(top_left: Coords, width: TermInt, height: TermInt) -> Self {
        Window { top_left, width, height }
    }

    /// Paints the border and blanks the inside.
    pub fn draw<S: Screen + ?Sized>(&self, screen: &mut S) {
        let (left, top) = self.top_left;
        let right = left + self.width - 1;
        let bottom = top + self.height - 1;

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            screen.print_at((x, top), ch);
            screen.print_at((x, bottom), ch);
        }

        for y in top + 1..bottom {
            screen.print_at((left, y), '|');
            for x in left + 1..right {
                screen.print_at((x, y), ' ');
            }
            screen.print_at((right, y), '|');
        }
    }

    pub fn print<S: Screen + ?Sized>(&self, screen: &mut S, pos: Coords, text: &str) {
        screen.print_str_at((self.top_left.0 + pos.0, self.top_left.1 + pos.1), text);
    }
}

/// Crossterm-backed screen. Keeps what was last flushed and only sends the
/// cells that changed since, so redrawing everything each tick is cheap.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    shown: Vec<char>,
}

impl TermManager {
    /// Fails if the terminal can't be queried or is too small for the game.
    pub fn new() -> Result<Self> {
        let (term_width, term_height) = terminal::size()?;
        if term_width < WIDTH || term_height < SCREEN_HEIGHT {
            return Err(GameError::TerminalTooSmall {
                width: term_width,
                height: term_height,
                min_width: WIDTH,
                min_height: SCREEN_HEIGHT,
            });
        }

        let (width, height) = (WIDTH, SCREEN_HEIGHT);
        let cells = width as usize * height as usize;
        Ok(TermManager {
            width,
            height,
            stdout: stdout(),
            screen: vec![' '; cells],
            shown: vec![' '; cells],
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, terminal::Clear(ClearType::All), cursor::DisableBlinking)?;
        self.set_cursor_visibility(false)
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.set_cursor_visibility(true)?;
        execute!(self.stdout, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    fn index(&self, pos: Coords) -> Option<usize> {
        if pos.0 < self.width && pos.1 < self.height {
            Some(self.width as usize * pos.1 as usize + pos.0 as usize)
        } else {
            None
        }
    }
}

impl Screen for TermManager {
    fn clear(&mut self) {
        for cell in self.screen.iter_mut() {
            *cell = ' ';
        }
    }

    fn print_at(&mut self, pos: Coords, ch: char) {
        // Anything outside the game area is dropped
        if let Some(i) = self.index(pos) {
            self.screen[i] = ch;
        }
    }

    fn flush(&mut self) -> Result<()> {
        for i in 0..self.screen.len() {
            let ch = self.screen[i];
            if ch != self.shown[i] {
                let x = (i % self.width as usize) as TermInt;
                let y = (i / self.width as usize) as TermInt;
                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch))?;
                self.shown[i] = ch;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }

    fn read_key_blocking(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    fn set_cursor_visibility(&mut self, visible: bool) -> Result<()> {
        if visible {
            execute!(self.stdout, cursor::Show)?;
        } else {
            execute!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }
}
