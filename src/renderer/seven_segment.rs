//! Seven-segment text for the status sidebar
//!
//! No font is shipped, so labels and numbers are built from segment bars.
//! Segment order: top, top-left, top-right, middle, bottom-left, bottom-right, bottom.

use super::fill::FillRect;
use crate::sim::{Rect, Rgb};

pub struct SevenSegmentDisplay {
    pub glyph_width: i32,
    pub glyph_height: i32,
    pub thickness: i32,
    pub spacing: i32,
}

impl SevenSegmentDisplay {
    pub fn new(glyph_width: i32, glyph_height: i32, thickness: i32, spacing: i32) -> Self {
        SevenSegmentDisplay {
            glyph_width,
            glyph_height,
            thickness,
            spacing,
        }
    }

    /// Lit segments for a character; `None` if it cannot be shown
    pub fn segments_for(ch: char) -> Option<[bool; 7]> {
        let segments = match ch.to_ascii_uppercase() {
            '0' | 'O' => [true, true, true, false, true, true, true],
            '1' | 'I' => [false, false, true, false, false, true, false],
            '2' => [true, false, true, true, true, false, true],
            '3' => [true, false, true, true, false, true, true],
            '4' => [false, true, true, true, false, true, false],
            '5' | 'S' => [true, true, false, true, false, true, true],
            '6' => [true, true, false, true, true, true, true],
            '7' => [true, false, true, false, false, true, false],
            '8' => [true, true, true, true, true, true, true],
            '9' => [true, true, true, true, false, true, true],
            'A' => [true, true, true, true, true, true, false],
            'B' => [false, true, false, true, true, true, true],
            'C' => [true, true, false, false, true, false, true],
            'E' => [true, true, false, true, true, false, true],
            'H' => [false, true, true, true, true, true, false],
            'Q' => [true, true, true, true, false, true, false],
            'R' => [false, false, false, true, true, false, false],
            'T' => [false, true, false, true, true, false, true],
            'U' => [false, true, true, false, true, true, true],
            ' ' => [false; 7],
            _ => return None,
        };
        Some(segments)
    }

    /// Horizontal space taken by `text`
    pub fn text_width(&self, text: &str) -> i32 {
        let count = text.chars().count() as i32;
        if count == 0 {
            return 0;
        }
        count * self.glyph_width + (count - 1) * self.spacing
    }

    /// Bars for one glyph with its top-left at (x, y)
    pub fn glyph(&self, ch: char, x: i32, y: i32, colour: Rgb, out: &mut Vec<FillRect>) {
        let Some(segments) = Self::segments_for(ch) else {
            log::warn!("No seven-segment glyph for {:?}", ch);
            return;
        };
        let w = self.glyph_width;
        let h = self.glyph_height;
        let t = self.thickness;
        let half = h / 2;

        let bars = [
            Rect::new(x, y, w, t),                          // top
            Rect::new(x, y, t, half),                       // top-left
            Rect::new(x + w - t, y, t, half),               // top-right
            Rect::new(x, y + half - t / 2, w, t),           // middle
            Rect::new(x, y + half, t, h - half),            // bottom-left
            Rect::new(x + w - t, y + half, t, h - half),    // bottom-right
            Rect::new(x, y + h - t, w, t),                  // bottom
        ];
        out.extend(
            segments
                .iter()
                .zip(bars)
                .filter(|(lit, _)| **lit)
                .map(|(_, rect)| FillRect::new(rect, colour)),
        );
    }

    /// Text horizontally centred on `centre_x`, top at `y`
    pub fn centred_text(&self, text: &str, centre_x: i32, y: i32, colour: Rgb, out: &mut Vec<FillRect>) {
        let mut x = centre_x - self.text_width(text) / 2;
        for ch in text.chars() {
            self.glyph(ch, x, y, colour, out);
            x += self.glyph_width + self.spacing;
        }
    }
}
