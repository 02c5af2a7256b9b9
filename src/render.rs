use macroquad::prelude::*;

use crate::assets::Assets;
use crate::game::{Game, Screen};
use crate::grid::Point;

const RAYWHITE: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const SCORE_BOX: Color = Color::new(GRAY.r, GRAY.g, GRAY.b, 0.8);

const SCORE_BOX_WIDTH: f32 = 75.0;
const SCORE_BOX_HEIGHT: f32 = 50.0;
const SCORE_BOX_MARGIN: f32 = 20.0;

pub fn draw(game: &Game, assets: &Assets) {
    clear_background(RAYWHITE);

    match game.screen() {
        Screen::Logo => draw_logo(game, assets),
        Screen::Title => draw_title(game, assets),
        Screen::Gameplay => draw_gameplay(game),
        Screen::Ending => draw_ending(game, assets),
    }
}

fn draw_logo(game: &Game, assets: &Assets) {
    let (sw, sh) = screen_size(game);
    if let Some(logo) = &assets.logo {
        draw_texture(logo, (sw - logo.width()) * 0.5, (sh - logo.height()) * 0.5, WHITE);
        return;
    }

    // Outlined square with the name in its lower right corner.
    let side = 256.0;
    let x = (sw - side) * 0.5;
    let y = (sh - side) * 0.5;
    draw_rectangle_lines(x, y, side, side, 32.0, BLACK);
    let name = "snake";
    let m = measure_text(name, None, 50, 1.0);
    draw_text(name, x + side - 32.0 - m.width, y + side - 40.0, 50.0, BLACK);
}

fn draw_title(game: &Game, assets: &Assets) {
    let (sw, sh) = screen_size(game);
    draw_centered_ex("SNAKE", assets.font.as_ref(), 80, 80.0, MAROON, sw);

    if game.blink_on() {
        draw_centered("PRESS [ENTER] TO START", 20, sh * 0.5 + 60.0, DARKGRAY, sw);
    }
}

fn draw_gameplay(game: &Game) {
    let (sw, sh) = screen_size(game);
    let cell = game.config().cell_size as f32;
    clear_background(BLACK);

    let body = game.snake().body();
    draw_cell(body[0], cell, DARKGREEN);
    for segment in &body[1..] {
        draw_cell(*segment, cell, GREEN);
    }
    draw_cell(game.food(), cell, RED);

    // Score box: food swatch followed by the count.
    let box_x = sw - SCORE_BOX_WIDTH - SCORE_BOX_MARGIN;
    let box_y = sh - SCORE_BOX_HEIGHT - SCORE_BOX_MARGIN;
    draw_rectangle(box_x, box_y, SCORE_BOX_WIDTH, SCORE_BOX_HEIGHT, SCORE_BOX);
    draw_rectangle(box_x + 10.0, box_y + (SCORE_BOX_HEIGHT - cell) * 0.5, cell, cell, RED);

    let score = game.snake().score().to_string();
    let m = measure_text(&score, None, 20, 1.0);
    draw_text(
        &score,
        box_x + 10.0 + cell + 10.0,
        box_y + (SCORE_BOX_HEIGHT + m.offset_y) * 0.5,
        20.0,
        BLACK,
    );
}

fn draw_ending(game: &Game, assets: &Assets) {
    let (sw, sh) = screen_size(game);
    let score = format!("SCORE: {}", game.snake().score());
    draw_centered_ex(&score, assets.font.as_ref(), 80, 100.0, MAROON, sw);

    if game.blink_on() {
        draw_centered("PRESS [ENTER] TO PLAY AGAIN", 20, sh * 0.5 + 80.0, GRAY, sw);
    }
}

fn draw_cell(p: Point, cell: f32, color: Color) {
    draw_rectangle(p.x as f32, p.y as f32, cell, cell, color);
}

fn screen_size(game: &Game) -> (f32, f32) {
    let config = game.config();
    (config.screen_width as f32, config.screen_height as f32)
}

/// `top` is the top edge of the text box, not the baseline.
fn draw_centered(text: &str, size: u16, top: f32, color: Color, sw: f32) {
    draw_centered_ex(text, None, size, top, color, sw);
}

fn draw_centered_ex(text: &str, font: Option<&Font>, size: u16, top: f32, color: Color, sw: f32) {
    let m = measure_text(text, font, size, 1.0);
    let params = TextParams {
        font,
        font_size: size,
        font_scale: 1.0,
        font_scale_aspect: 1.0,
        color,
        ..Default::default()
    };
    draw_text_ex(text, (sw - m.width) * 0.5, top + m.offset_y, params);
}
