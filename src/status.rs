//! Status sidebar state
//!
//! Tracks the score shown to the player, the best score of the session
//! and the crash count. Nothing is persisted between runs.

use crate::sim::Rect;

/// Quit button, in sidebar-local coordinates
pub const QUIT_BUTTON: Rect = Rect::new(30, 375, 200, 50);

/// Score / best / crashes as displayed in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBoard {
    score: u32,
    best_score: u32,
    crashes: u32,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new current score
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Show a new crash count. The score at that moment becomes the best
    /// if it beats the previous best, so call this before clearing the score.
    pub fn set_crashes(&mut self, crashes: u32) {
        if self.score > self.best_score {
            self.best_score = self.score;
            log::info!("New best score: {}", self.best_score);
        }
        self.crashes = crashes;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn crashes(&self) -> u32 {
        self.crashes
    }

    /// One-line summary, used for the window title and the headless report
    pub fn summary(&self) -> String {
        format!(
            "Score: {}  Best: {}  Crashes: {}",
            self.score, self.best_score, self.crashes
        )
    }
}
