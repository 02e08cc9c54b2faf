//! Native window via SDL2
//!
//! Polls input, runs fixed ticks and presents the rectangle scene.

use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::time::FixedTicker;
use crate::config::GameConfig;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::renderer::{FillRect, scene};
use crate::sim::{Control, Game, InputEvent, Key, Position, TrafficEvent};

const WINDOW_TITLE: &str = "Car Dodger";

/// Open the window and play until the player quits
pub fn run(config: &GameConfig, seed: u64) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_TITLE, WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut game = Game::new(config, seed);
    let mut ticker = FixedTicker::new(config.tick_interval_ms);
    let mut shown_status = None;

    log::info!("Window open, drag the black car to dodge traffic (Esc quits)");

    'running: loop {
        for event in event_pump.poll_iter() {
            let Some(input) = translate(&event) else {
                continue;
            };
            if game.handle_input(input) == Control::Exit {
                break 'running;
            }
        }

        for _ in 0..ticker.advance(Instant::now()) {
            for event in game.tick() {
                if let TrafficEvent::Crashed { lane } = event {
                    log::debug!("Round reset after lane {} crash", lane);
                }
            }
        }

        if shown_status != Some(*game.status()) {
            let title = format!("{} - {}", WINDOW_TITLE, game.status().summary());
            canvas.window_mut().set_title(&title).map_err(|e| e.to_string())?;
            shown_status = Some(*game.status());
        }

        present(&mut canvas, &scene::build(&game))?;

        let wait = ticker.until_next_step();
        if !wait.is_zero() {
            std::thread::sleep(wait.min(ticker.step()));
        }
    }

    log::info!("Leaving game: {}", game.status().summary());
    Ok(())
}

/// Map an SDL event onto game input
fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::CloseRequested),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(InputEvent::Key(Key::Escape)),
        Event::KeyDown { .. } => Some(InputEvent::Key(Key::Other)),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::PointerDown(Position::new(*x, *y))),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::PointerUp(Position::new(*x, *y))),
        Event::MouseMotion {
            mousestate, x, y, ..
        } if mousestate.left() || mousestate.right() || mousestate.middle() => {
            Some(InputEvent::PointerDrag(Position::new(*x, *y)))
        }
        _ => None,
    }
}

fn present(canvas: &mut Canvas<Window>, frame: &[FillRect]) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    for fill in frame {
        let rect = fill.rect;
        if rect.width <= 0 || rect.height <= 0 {
            continue;
        }
        canvas.set_draw_color(Color::RGB(fill.colour.r, fill.colour.g, fill.colour.b));
        canvas.fill_rect(sdl2::rect::Rect::new(
            rect.left(),
            rect.top(),
            rect.width as u32,
            rect.height as u32,
        ))?;
    }

    canvas.present();
    Ok(())
}
