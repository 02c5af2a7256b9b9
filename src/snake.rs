use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::{Direction, Point};
use crate::input::FrameInput;

pub const INITIAL_LENGTH: usize = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// What a single movement tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub head: Point,
    pub collision: Option<Collision>,
    pub fed: bool,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// `body[0]` is the head; higher indices are older segments.
    body: Vec<Point>,
    max_length: usize,
    direction: Direction,
    /// Latest accepted key request, committed on the next tick.
    pending: Direction,
    score: u32,
}

impl Snake {
    pub fn new(config: &GameConfig) -> Self {
        let max_length = config.max_length();
        let cell = config.cell_size;
        let start = Point::new(
            cell * (config.screen_width / 2 / cell),
            cell * (config.screen_height / 2 / cell),
        );
        let mut body = Vec::with_capacity(max_length);
        body.resize(INITIAL_LENGTH, start);
        Self {
            body,
            max_length,
            direction: Direction::Stationary,
            pending: Direction::Stationary,
            score: 0,
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Samples the direction keys. Runs every frame, independent of the
    /// movement tick; the newest accepted request wins.
    pub fn steer(&mut self, input: &FrameInput) {
        if let Some(direction) = input.steer(self.direction) {
            self.pending = direction;
        }
    }

    /// Moves the snake one cell, checking walls and its own body, and eats
    /// the food when the new head lands on it.
    ///
    /// A collision is reported but does not cut the tick short: the body
    /// still shifts and feeding is still checked.
    pub fn advance(&mut self, food: &mut Food, config: &GameConfig) -> StepOutcome {
        if self.pending != self.direction.reversed() {
            self.direction = self.pending;
        }

        let new_head = self.head().step(self.direction, config.cell_size);

        let mut collision = None;
        if !new_head.in_bounds(config.screen_width, config.screen_height) {
            collision = Some(Collision::Wall);
        }
        if self.body[1..].contains(&new_head) {
            collision = collision.or(Some(Collision::Body));
        }

        let len = self.body.len();
        self.body.copy_within(0..len - 1, 1);
        self.body[0] = new_head;

        let fed = new_head == food.position();
        if fed {
            self.score += 1;
            if self.body.len() < self.max_length {
                self.body.push(new_head);
            }
            food.respawn(config);
        }

        StepOutcome {
            head: new_head,
            collision,
            fed,
        }
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Point], direction: Direction, config: &GameConfig) -> Self {
        assert!(!segments.is_empty());
        let max_length = config.max_length();
        let mut body = Vec::with_capacity(max_length);
        body.extend_from_slice(segments);
        Self {
            body,
            max_length,
            direction,
            pending: direction,
            score: 0,
        }
    }

    #[cfg(test)]
    pub fn capped_at(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}
