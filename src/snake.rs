use crate::Coords;
use crate::consts::MAX_LENGTH;
use crate::grid::Grid;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body is stored head-first: `body[0]` is the head.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake { body: vec![pos], direction }
    }

    /// Builds a snake from explicit segments, head first. Extra segments past
    /// `MAX_LENGTH` are dropped, and an empty body is not a snake.
    pub fn from_body(mut body: Vec<Coords>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        body.truncate(MAX_LENGTH);
        Some(Snake { body, direction })
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turning straight back into the neck is ignored.
    pub fn turn(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    /// Every segment takes the place of the one in front of it, then the head
    /// advances and wraps. Returns the cell the tail just left.
    pub fn move_step(&mut self, grid: &Grid) -> Coords {
        let old_head = self.head();

        // Head is always interior, so stepping by one never underflows
        let mut new_head = match self.direction {
            Up => (old_head.0, old_head.1.saturating_sub(1)),
            Down => (old_head.0, old_head.1 + 1),
            Left => (old_head.0.saturating_sub(1), old_head.1),
            Right => (old_head.0 + 1, old_head.1),
        };
        grid.wrap(&mut new_head);

        self.body.insert(0, new_head);
        // Never empty: we just inserted
        self.body.pop().unwrap_or(new_head)
    }

    /// Appends a segment at `tail`. Returns false when the snake is already at
    /// full length and nothing was added.
    pub fn grow(&mut self, tail: Coords) -> bool {
        if self.body.len() >= MAX_LENGTH {
            return false;
        }
        self.body.push(tail);
        true
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }
}
