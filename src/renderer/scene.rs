//! Whole-window frame: play field on the left, status sidebar on the right

use glam::IVec2;

use super::fill::{FillRect, colors};
use super::seven_segment::SevenSegmentDisplay;
use super::shapes;
use crate::consts::*;
use crate::sim::{Game, Rect};
use crate::status::{QUIT_BUTTON, StatusBoard};

/// Sidebar rows (label, value, ..., button) and their height
const SIDEBAR_ROWS: i32 = 7;
const SIDEBAR_ROW_HEIGHT: i32 = 50;

/// Draw list for one frame, back to front
pub fn build(game: &Game) -> Vec<FillRect> {
    let mut out = Vec::with_capacity(512);

    out.push(FillRect::new(
        Rect::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT),
        colors::ASPHALT,
    ));
    shapes::road(&game.road, &mut out);
    shapes::player_car(&game.player, &mut out);
    for enemy in game.traffic.cars() {
        shapes::enemy_car(enemy, &mut out);
    }

    sidebar(game.status(), &mut out);
    out
}

/// Status sidebar, drawn at the right of the play field
pub fn sidebar(status: &StatusBoard, out: &mut Vec<FillRect>) {
    let origin = IVec2::new(PANEL_WIDTH, 0);
    out.push(FillRect::new(
        Rect::new(PANEL_WIDTH, 0, SIDEBAR_WIDTH, PANEL_HEIGHT),
        colors::SIDEBAR,
    ));

    let display = SevenSegmentDisplay::new(16, 30, 4, 6);
    let centre_x = PANEL_WIDTH + SIDEBAR_WIDTH / 2;
    let top = (PANEL_HEIGHT - SIDEBAR_ROWS * SIDEBAR_ROW_HEIGHT) / 2;
    let rows = [
        "SCORE".to_string(),
        status.score().to_string(),
        "BEST".to_string(),
        status.best_score().to_string(),
        "CRASHES".to_string(),
        status.crashes().to_string(),
    ];
    for (i, text) in rows.iter().enumerate() {
        let row_top = top + i as i32 * SIDEBAR_ROW_HEIGHT;
        let y = row_top + (SIDEBAR_ROW_HEIGHT - display.glyph_height) / 2;
        display.centred_text(text, centre_x, y, colors::SIDEBAR_TEXT, out);
    }

    let button = QUIT_BUTTON.translated(origin);
    out.push(FillRect::new(button, colors::BUTTON_EDGE));
    out.push(FillRect::new(
        Rect::new(button.left() + 3, button.top() + 3, button.width - 6, button.height - 6),
        colors::BUTTON_FACE,
    ));
    let label_y = button.top() + (button.height - display.glyph_height) / 2;
    display.centred_text("QUIT", centre_x, label_y, colors::SIDEBAR_TEXT, out);
}
