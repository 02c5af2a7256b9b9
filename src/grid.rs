/// Top-left corner of a cell, in pixels. Always a multiple of the cell size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }

    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Stationary,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit displacement in cells; y grows downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Stationary => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Stationary is its own reverse.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Stationary => Direction::Stationary,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}
