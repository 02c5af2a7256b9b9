use macroquad::rand::gen_range;

use crate::config::GameConfig;
use crate::grid::Point;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Point,
}

impl Food {
    pub fn spawn(config: &GameConfig) -> Self {
        Self { position: random_cell(config) }
    }

    #[cfg(test)]
    pub fn at(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn respawn(&mut self, config: &GameConfig) {
        self.position = random_cell(config);
    }
}

// Column and row are drawn independently; cells under the snake are not excluded.
fn random_cell(config: &GameConfig) -> Point {
    let (cols, rows) = config.food_cells();
    Point::new(
        config.cell_size * gen_range(0, cols + 1),
        config.cell_size * gen_range(0, rows + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respawn_stays_on_grid_and_inside_playfield() {
        macroquad::rand::srand(7);
        let config = GameConfig::default();
        let mut food = Food::spawn(&config);
        for _ in 0..2_000 {
            food.respawn(&config);
            let p = food.position();
            assert_eq!(p.x % config.cell_size, 0);
            assert_eq!(p.y % config.cell_size, 0);
            assert!(p.x >= 0 && p.x + config.cell_size <= config.screen_width);
            assert!(p.y >= 0 && p.y + config.cell_size <= config.screen_height);
        }
    }

    #[test]
    fn tiny_playfield_has_a_single_food_cell() {
        let config = GameConfig {
            screen_width: 20,
            screen_height: 20,
            ..GameConfig::default()
        };
        for _ in 0..50 {
            assert_eq!(Food::spawn(&config).position(), Point::new(0, 0));
        }
    }
}
