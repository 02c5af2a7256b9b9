use macroquad::audio::{PlaySoundParams, play_sound};
use macroquad::prelude::*;
use std::sync::OnceLock;

mod assets;
mod config;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;

use assets::Assets;
use config::GameConfig;
use game::{Game, GameEvent};
use input::{FrameInput, InputLatch};

/// Catch-up limit after a stall, so a long hitch does not fast-forward play.
const MAX_UPDATES_PER_FRAME: u32 = 5;

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Read once; the window setup runs before `main` and needs the size.
/// Logging must already be up so config warnings are not lost.
fn game_config() -> &'static GameConfig {
    static CONFIG: OnceLock<GameConfig> = OnceLock::new();
    CONFIG.get_or_init(GameConfig::load)
}

fn window_conf() -> Conf {
    init_logging();
    let config = game_config();
    Conf {
        window_title: "SNAKE".to_owned(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = game_config().clone();
    log::info!(
        "Starting {}x{} at {} fps, snake steps every {} frames",
        config.screen_width,
        config.screen_height,
        config.target_fps,
        config.move_interval
    );

    macroquad::rand::srand((macroquad::miniquad::date::now() * 1000.0) as u64);
    let assets = Assets::load(&config).await?;
    let volume = config.sound_volume;
    let step = config.frame_seconds();
    let mut game = Game::new(config);
    let mut latch = InputLatch::default();
    let mut accumulator = 0.0f32;

    prevent_quit();
    loop {
        if is_quit_requested() {
            log::info!("Window closed, shutting down");
            break;
        }

        latch.observe(FrameInput::poll());
        accumulator = (accumulator + get_frame_time()).min(step * MAX_UPDATES_PER_FRAME as f32);
        while accumulator >= step {
            accumulator -= step;
            for event in game.update(&latch.take()) {
                match event {
                    GameEvent::ScreenChanged { from, to } => {
                        log::info!("Screen {from:?} -> {to:?}");
                    }
                    GameEvent::Fed { head, score, food } => {
                        log::debug!(
                            "Ate at ({}, {}), score {score}, food now at ({}, {})",
                            head.x,
                            head.y,
                            food.x,
                            food.y
                        );
                        play_sound(&assets.feed_sound, PlaySoundParams { looped: false, volume });
                    }
                    GameEvent::Collided(collision) => {
                        let snake = game.snake();
                        log::info!(
                            "Game over: {collision:?} collision heading {:?}, length {}, score {}",
                            snake.direction(),
                            snake.body().len(),
                            snake.score()
                        );
                    }
                }
            }
        }

        render::draw(&game, &assets);
        next_frame().await;
    }

    Ok(())
}
