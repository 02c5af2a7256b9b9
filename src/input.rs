use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

use crate::grid::Direction;

/// Keys relevant to one logical update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Edge-triggered: true only on the frame the key went down.
    pub confirm: bool,
}

impl FrameInput {
    pub fn poll() -> Self {
        Self {
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            confirm: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        }
    }

    /// Direction requested by the held keys, given the snake is moving in
    /// `current`. Only turns onto the other axis are offered; when nothing
    /// moves yet, any key counts.
    pub fn steer(&self, current: Direction) -> Option<Direction> {
        if self.right && !current.is_horizontal() {
            Some(Direction::Right)
        } else if self.left && !current.is_horizontal() {
            Some(Direction::Left)
        } else if self.up && !current.is_vertical() {
            Some(Direction::Up)
        } else if self.down && !current.is_vertical() {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Bridges display frames and fixed-rate updates. Any key seen on a display
/// frame stays latched until the next update consumes it, so a short tap on
/// a frame without an update is not lost and a confirm press is seen once.
#[derive(Debug, Default)]
pub struct InputLatch {
    pending: FrameInput,
    /// Most recent display frame sample.
    last: FrameInput,
}

impl InputLatch {
    pub fn observe(&mut self, sample: FrameInput) {
        let p = &mut self.pending;
        p.up |= sample.up;
        p.down |= sample.down;
        p.left |= sample.left;
        p.right |= sample.right;
        p.confirm |= sample.confirm;
        self.last = sample;
    }

    /// Everything seen since the previous call. Afterwards only keys still
    /// held on the last display frame remain; confirm is cleared.
    pub fn take(&mut self) -> FrameInput {
        let input = self.pending;
        self.pending = FrameInput {
            confirm: false,
            ..self.last
        };
        input
    }
}
