use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::Point;
use crate::input::FrameInput;
use crate::snake::{Collision, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Logo,
    Title,
    Gameplay,
    Ending,
}

/// Things the frame driver reacts to after an update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ScreenChanged { from: Screen, to: Screen },
    Fed { head: Point, score: u32, food: Point },
    Collided(Collision),
}

/// All mutable game state, owned by the main loop.
pub struct Game {
    config: GameConfig,
    screen: Screen,
    frames_counter: u32,
    move_counter: u32,
    snake: Snake,
    food: Food,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let snake = Snake::new(&config);
        let food = Food::spawn(&config);
        Self {
            screen: Screen::Logo,
            frames_counter: 0,
            move_counter: config.move_interval,
            snake,
            food,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn frames_counter(&self) -> u32 {
        self.frames_counter
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food.position()
    }

    /// Whether blinking prompts are shown this frame.
    pub fn blink_on(&self) -> bool {
        (self.frames_counter / self.config.blink_period) % 2 == 0
    }

    /// Advances one logical frame.
    pub fn update(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.screen {
            Screen::Logo => {
                self.frames_counter += 1;
                if self.frames_counter >= self.config.logo_frames {
                    self.frames_counter = 0;
                    self.switch(Screen::Title, &mut events);
                }
            }
            Screen::Title => {
                self.frames_counter += 1;
                if input.confirm {
                    self.switch(Screen::Gameplay, &mut events);
                }
            }
            Screen::Gameplay => self.update_gameplay(input, &mut events),
            Screen::Ending => {
                self.frames_counter += 1;
                if input.confirm {
                    self.restart();
                    self.switch(Screen::Title, &mut events);
                }
            }
        }
        events
    }

    fn update_gameplay(&mut self, input: &FrameInput, events: &mut Vec<GameEvent>) {
        self.snake.steer(input);

        self.move_counter -= 1;
        if self.move_counter > 0 {
            return;
        }
        self.move_counter = self.config.move_interval;

        let outcome = self.snake.advance(&mut self.food, &self.config);
        if outcome.fed {
            events.push(GameEvent::Fed {
                head: outcome.head,
                score: self.snake.score(),
                food: self.food.position(),
            });
        }
        if let Some(collision) = outcome.collision {
            events.push(GameEvent::Collided(collision));
            self.switch(Screen::Ending, events);
        }
    }

    fn restart(&mut self) {
        self.snake = Snake::new(&self.config);
        self.food = Food::spawn(&self.config);
        self.frames_counter = 0;
        self.move_counter = self.config.move_interval;
    }

    fn switch(&mut self, to: Screen, events: &mut Vec<GameEvent>) {
        let from = self.screen;
        self.screen = to;
        events.push(GameEvent::ScreenChanged { from, to });
    }

    #[cfg(test)]
    fn force(&mut self, screen: Screen, frames_counter: u32) {
        self.screen = screen;
        self.frames_counter = frames_counter;
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    fn set_food(&mut self, position: Point) {
        self.food = Food::at(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    const IDLE: FrameInput = FrameInput {
        up: false,
        down: false,
        left: false,
        right: false,
        confirm: false,
    };

    const CONFIRM: FrameInput = FrameInput { confirm: true, ..IDLE };

    fn game() -> Game {
        Game::new(GameConfig::default())
    }

    fn run_tick(game: &mut Game, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..game.config().move_interval {
            events.extend(game.update(input));
        }
        events
    }

    #[test]
    fn logo_hands_over_to_title_after_its_last_frame() {
        let mut game = game();
        game.force(Screen::Logo, 179);

        let events = game.update(&IDLE);

        assert_eq!(game.screen(), Screen::Title);
        assert_eq!(game.frames_counter(), 0);
        assert_eq!(
            events,
            vec![GameEvent::ScreenChanged { from: Screen::Logo, to: Screen::Title }]
        );
    }

    #[test]
    fn logo_lasts_three_seconds_at_sixty_fps() {
        let mut game = game();
        for _ in 0..179 {
            game.update(&CONFIRM);
            assert_eq!(game.screen(), Screen::Logo);
        }
        game.update(&IDLE);
        assert_eq!(game.screen(), Screen::Title);
    }

    #[test]
    fn title_waits_for_confirm_and_keeps_counting() {
        let mut game = game();
        game.force(Screen::Title, 10);

        game.update(&IDLE);
        assert_eq!(game.screen(), Screen::Title);
        assert_eq!(game.frames_counter(), 11);

        game.update(&CONFIRM);
        assert_eq!(game.screen(), Screen::Gameplay);
        assert_eq!(game.frames_counter(), 12);
    }

    #[test]
    fn snake_moves_only_every_move_interval_frames() {
        let mut game = game();
        game.force(Screen::Gameplay, 0);
        game.set_food(Point::new(0, 0));
        let right = FrameInput { right: true, ..IDLE };

        for _ in 0..4 {
            game.update(&right);
            assert_eq!(game.snake().head(), Point::new(400, 220));
        }
        game.update(&right);
        assert_eq!(game.snake().head(), Point::new(420, 220));
        assert_eq!(game.snake().direction(), Direction::Right);
    }

    #[test]
    fn key_tapped_between_ticks_still_turns() {
        let mut game = game();
        game.force(Screen::Gameplay, 0);
        game.set_food(Point::new(0, 0));
        game.set_snake(Snake::from_segments(
            &[Point::new(100, 100)],
            Direction::Right,
            game.config(),
        ));

        game.update(&FrameInput { up: true, ..IDLE });
        for _ in 1..game.config().move_interval {
            game.update(&IDLE);
        }
        assert_eq!(game.snake().head(), Point::new(100, 80));
    }

    #[test]
    fn eating_reports_the_new_score() {
        let mut game = game();
        game.force(Screen::Gameplay, 0);
        game.set_snake(Snake::from_segments(
            &[Point::new(400, 220)],
            Direction::Right,
            game.config(),
        ));
        game.set_food(Point::new(420, 220));

        let events = run_tick(&mut game, &IDLE);

        assert_eq!(events.len(), 1);
        match events[0] {
            GameEvent::Fed { head, score, food } => {
                assert_eq!(head, Point::new(420, 220));
                assert_eq!(score, 1);
                assert_eq!(food, game.food());
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(game.snake().body().len(), 2);
        assert_eq!(game.screen(), Screen::Gameplay);
    }

    #[test]
    fn wall_hit_ends_the_game() {
        let mut game = game();
        game.force(Screen::Gameplay, 0);
        game.set_snake(Snake::from_segments(
            &[Point::new(0, 100)],
            Direction::Left,
            game.config(),
        ));
        game.set_food(Point::new(400, 400));

        let events = run_tick(&mut game, &IDLE);

        assert_eq!(game.screen(), Screen::Ending);
        assert_eq!(
            events,
            vec![
                GameEvent::Collided(Collision::Wall),
                GameEvent::ScreenChanged { from: Screen::Gameplay, to: Screen::Ending },
            ]
        );
    }

    #[test]
    fn confirm_on_ending_resets_and_returns_to_title() {
        let mut game = game();
        game.force(Screen::Gameplay, 40);
        game.set_snake(Snake::from_segments(
            &[Point::new(400, 220)],
            Direction::Right,
            game.config(),
        ));
        game.set_food(Point::new(420, 220));
        run_tick(&mut game, &IDLE);
        game.force(Screen::Ending, 7);
        assert_eq!(game.snake().score(), 1);

        game.update(&IDLE);
        assert_eq!(game.screen(), Screen::Ending);
        assert_eq!(game.frames_counter(), 8);

        let events = game.update(&CONFIRM);

        assert_eq!(game.screen(), Screen::Title);
        assert_eq!(
            events,
            vec![GameEvent::ScreenChanged { from: Screen::Ending, to: Screen::Title }]
        );
        assert_eq!(game.frames_counter(), 0);
        assert_eq!(game.snake().body().len(), 1);
        assert_eq!(game.snake().score(), 0);
        assert_eq!(game.snake().head(), Point::new(400, 220));
        assert_eq!(game.snake().direction(), Direction::Stationary);
    }

    #[test]
    fn restart_rearms_the_move_counter() {
        let mut game = game();
        game.force(Screen::Gameplay, 0);
        game.set_food(Point::new(0, 0));
        game.update(&IDLE);
        game.update(&IDLE);
        game.force(Screen::Ending, 0);
        game.update(&CONFIRM);
        game.update(&CONFIRM);
        assert_eq!(game.screen(), Screen::Gameplay);
        game.set_food(Point::new(0, 0));

        let right = FrameInput { right: true, ..IDLE };
        for _ in 0..4 {
            game.update(&right);
        }
        assert_eq!(game.snake().head(), Point::new(400, 220));
        game.update(&right);
        assert_eq!(game.snake().head(), Point::new(420, 220));
    }

    #[test]
    fn prompt_blinks_every_half_second() {
        let mut game = game();
        game.force(Screen::Title, 0);
        assert!(game.blink_on());
        game.force(Screen::Title, 29);
        assert!(game.blink_on());
        game.force(Screen::Title, 30);
        assert!(!game.blink_on());
        game.force(Screen::Title, 60);
        assert!(game.blink_on());
    }

    #[test]
    fn ending_prompt_blinks_at_the_title_rate() {
        let mut game = game();
        game.force(Screen::Ending, 0);
        assert!(game.blink_on());
        game.update(&IDLE);
        assert!(game.blink_on());
        game.force(Screen::Ending, 30);
        assert!(!game.blink_on());
    }
}
