//! Game orchestration: one fixed tick advances traffic, player and road,
//! and crash / dodge events are turned into score, crashes and round resets.

use glam::IVec2;

use super::geometry::Position;
use super::player::PlayerCar;
use super::road::AnimatedRoad;
use super::traffic::{EnemyCarManager, TrafficEvent};
use crate::config::GameConfig;
use crate::consts::PANEL_WIDTH;
use crate::status::{QUIT_BUTTON, StatusBoard};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Input in window coordinates (play field at the origin, sidebar to its right)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Position),
    PointerUp(Position),
    /// Pointer moved while a button is held
    PointerDrag(Position),
    Key(Key),
    CloseRequested,
}

/// What the event loop should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub player: PlayerCar,
    pub traffic: EnemyCarManager,
    pub road: AnimatedRoad,
    score: u32,
    crashes: u32,
    status: StatusBoard,
    /// Pointer went down on the quit button and has not been released
    quit_pressed: bool,
    tick_interval_ms: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Game {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        log::info!(
            "New game: {} lanes, {} active, seed {}",
            config.lanes,
            config.max_active_lanes,
            seed
        );
        Self {
            player: PlayerCar::default(),
            traffic: EnemyCarManager::new(config.lanes, config.max_active_lanes, seed),
            road: AnimatedRoad::new(config.lanes),
            score: 0,
            crashes: 0,
            status: StatusBoard::new(),
            quit_pressed: false,
            tick_interval_ms: config.tick_interval_ms,
            time_ticks: 0,
        }
    }

    /// Advance one fixed step. Returns what happened to the traffic.
    pub fn tick(&mut self) -> Vec<TrafficEvent> {
        let dt = self.tick_interval_ms;
        let mut events = Vec::new();
        // Events apply as they happen: after a crash the remaining lanes step
        // against the freshly reset round.
        for lane in 0..self.traffic.lanes() {
            let Some(event) = self.traffic.update_lane(lane, dt, self.player.rect()) else {
                continue;
            };
            match event {
                TrafficEvent::Dodged { points, .. } => self.increase_score(points),
                TrafficEvent::Crashed { .. } => self.increase_crash_count(),
            }
            events.push(event);
        }

        self.player.update(dt);
        self.road.update(dt);
        self.time_ticks += 1;
        events
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::PointerDown(pos) if pos.x >= PANEL_WIDTH => {
                self.quit_pressed = on_quit_button(pos);
            }
            InputEvent::PointerDown(pos) => {
                if self.player.car.is_position_inside(pos) {
                    self.player.set_moving(true);
                }
            }
            InputEvent::PointerUp(pos) => {
                self.player.set_moving(false);
                // A click needs press and release both on the button
                let clicked = self.quit_pressed && on_quit_button(pos);
                self.quit_pressed = false;
                if clicked {
                    log::info!("Quit button clicked");
                    return Control::Exit;
                }
            }
            InputEvent::PointerDrag(pos) => {
                if self.player.is_moving() {
                    self.player.update_position(pos);
                }
            }
            InputEvent::Key(Key::Escape) | InputEvent::CloseRequested => return Control::Exit,
            InputEvent::Key(Key::Other) => {}
        }
        Control::Continue
    }

    fn increase_score(&mut self, amount: u32) {
        self.score += amount;
        self.status.set_score(self.score);
    }

    /// Count the crash, then start the round over from zero
    fn increase_crash_count(&mut self) {
        self.crashes += 1;
        self.status.set_crashes(self.crashes);
        log::info!(
            "Crash #{} after scoring {} (best {})",
            self.crashes,
            self.score,
            self.status.best_score()
        );
        self.score = 0;
        self.status.set_score(0);
        self.player.reset();
        self.traffic.reset();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn crashes(&self) -> u32 {
        self.crashes
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }
}

fn on_quit_button(pos: Position) -> bool {
    pos.x >= PANEL_WIDTH && QUIT_BUTTON.contains(pos - IVec2::new(PANEL_WIDTH, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn new_game(seed: u64) -> Game {
        Game::new(&GameConfig::default(), seed)
    }

    /// Run until the first event of the wanted kind shows up
    fn tick_until<F: Fn(&TrafficEvent) -> bool>(game: &mut Game, wanted: F) -> TrafficEvent {
        for _ in 0..10_000 {
            if let Some(event) = game.tick().into_iter().find(|e| wanted(e)) {
                return event;
            }
        }
        panic!("event never happened");
    }

    #[test]
    fn test_initial_state() {
        let game = new_game(1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.crashes(), 0);
        assert_eq!(game.traffic.active_count(), MAX_ACTIVE_LANES);
        assert_eq!(game.traffic.inactive_count(), NUMBER_OF_LANES - MAX_ACTIVE_LANES);
    }

    #[test]
    fn test_dodge_adds_points() {
        let mut game = new_game(2);
        // Park the player off to the side of every lane's path
        game.player.car.body.pos = Position::new(-1000, 390);
        let event = tick_until(&mut game, |e| matches!(e, TrafficEvent::Dodged { .. }));
        let TrafficEvent::Dodged { kind, points, .. } = event else {
            unreachable!()
        };
        assert_eq!(points, kind.index() + 1);
        assert!(game.score() >= points);
        assert_eq!(game.status().score(), game.score());
        assert_eq!(game.crashes(), 0);
    }

    #[test]
    fn test_crash_resets_round() {
        let mut game = new_game(3);
        game.player.car.body.pos = Position::new(-1000, 390);
        tick_until(&mut game, |e| matches!(e, TrafficEvent::Dodged { .. }));
        let score_before = game.score();
        assert!(score_before > 0);

        // Drop an enemy onto the player
        game.player.reset();
        game.player.set_moving(true);
        let target = game.player.car.position();
        let lane = 4;
        game.traffic.car_mut(lane).car.body.pos = target;

        let events = game.tick();
        assert_eq!(events, vec![TrafficEvent::Crashed { lane }]);
        assert_eq!(game.score(), 0);
        assert_eq!(game.crashes(), 1);
        assert_eq!(game.status().best_score(), score_before);
        assert_eq!(game.status().crashes(), 1);
        assert!(!game.player.is_moving());
        assert_eq!(game.player.car.position(), PlayerCar::start_position());
        // Lanes up to the crash are parked again; later lanes already took
        // their first step of the new round
        for (i, car) in game.traffic.cars().iter().enumerate() {
            if i <= lane || !car.is_active() {
                assert_eq!(car.car.position(), car.car.start(), "lane {i}");
            } else {
                assert!((-58..=-50).contains(&car.car.position().y), "lane {i}");
            }
        }
        assert_eq!(game.traffic.active_count(), MAX_ACTIVE_LANES);
    }

    #[test]
    fn test_lanes_after_crash_move_on_crash_tick() {
        let config = GameConfig {
            max_active_lanes: NUMBER_OF_LANES,
            ..Default::default()
        };
        let mut game = Game::new(&config, 12);
        game.traffic.car_mut(0).car.body.pos = game.player.car.position();

        let events = game.tick();
        assert_eq!(events, vec![TrafficEvent::Crashed { lane: 0 }]);
        let cars = game.traffic.cars();
        assert_eq!(cars[0].car.position(), cars[0].car.start());
        for (i, car) in cars.iter().enumerate().skip(1) {
            assert!(car.is_active());
            let y = car.car.position().y;
            assert!((-58..=-50).contains(&y), "lane {i} at y {y}");
        }
    }

    #[test]
    fn test_best_survives_weaker_round() {
        let mut game = new_game(4);
        game.player.car.body.pos = Position::new(-1000, 390);
        tick_until(&mut game, |e| matches!(e, TrafficEvent::Dodged { .. }));
        let first = game.score();

        game.traffic.car_mut(0).car.body.pos = game.player.car.position();
        game.tick();
        assert_eq!(game.status().best_score(), first);

        // Crash again straight away with nothing scored
        let player_pos = game.player.car.position();
        game.traffic.car_mut(1).car.body.pos = player_pos;
        game.tick();
        assert_eq!(game.crashes(), 2);
        assert_eq!(game.status().best_score(), first);
    }

    #[test]
    fn test_drag_moves_player() {
        let mut game = new_game(5);
        let inside = game.player.car.position() + IVec2::new(5, 5);
        assert_eq!(game.handle_input(InputEvent::PointerDown(inside)), Control::Continue);
        assert!(game.player.is_moving());

        game.handle_input(InputEvent::PointerDrag(Position::new(100, 400)));
        assert_eq!(game.player.car.position().x, 85);

        game.handle_input(InputEvent::PointerUp(Position::new(100, 400)));
        assert!(!game.player.is_moving());
        game.handle_input(InputEvent::PointerDrag(Position::new(300, 400)));
        assert_eq!(game.player.car.position().x, 85);
    }

    #[test]
    fn test_press_outside_car_does_not_grab() {
        let mut game = new_game(6);
        game.handle_input(InputEvent::PointerDown(Position::new(10, 10)));
        assert!(!game.player.is_moving());
        game.handle_input(InputEvent::PointerDrag(Position::new(100, 400)));
        assert_eq!(game.player.car.position(), PlayerCar::start_position());
    }

    #[test]
    fn test_drag_past_panel_edge_clamps() {
        let mut game = new_game(7);
        let inside = game.player.car.position() + IVec2::new(1, 1);
        game.handle_input(InputEvent::PointerDown(inside));
        game.handle_input(InputEvent::PointerDrag(Position::new(700, 400)));
        assert_eq!(game.player.car.position().x, PANEL_WIDTH - CAR_WIDTH);
    }

    #[test]
    fn test_exit_inputs() {
        let mut game = new_game(8);
        assert_eq!(game.handle_input(InputEvent::Key(Key::Other)), Control::Continue);
        assert_eq!(game.handle_input(InputEvent::Key(Key::Escape)), Control::Exit);
        assert_eq!(game.handle_input(InputEvent::CloseRequested), Control::Exit);

        let on_sidebar = Position::new(PANEL_WIDTH + 5, 5);
        assert_eq!(game.handle_input(InputEvent::PointerDown(on_sidebar)), Control::Continue);
        assert_eq!(game.handle_input(InputEvent::PointerUp(on_sidebar)), Control::Continue);
    }

    #[test]
    fn test_quit_button_fires_on_release() {
        let mut game = new_game(10);
        let on_quit = Position::new(PANEL_WIDTH + QUIT_BUTTON.left() + 10, QUIT_BUTTON.top() + 10);
        let off_quit = Position::new(PANEL_WIDTH + 5, 5);

        assert_eq!(game.handle_input(InputEvent::PointerDown(on_quit)), Control::Continue);
        assert_eq!(game.handle_input(InputEvent::PointerUp(on_quit)), Control::Exit);

        // Pressed on the button, released elsewhere: no click
        game.handle_input(InputEvent::PointerDown(on_quit));
        assert_eq!(game.handle_input(InputEvent::PointerUp(off_quit)), Control::Continue);

        // Released on the button without pressing it first
        game.handle_input(InputEvent::PointerDown(off_quit));
        assert_eq!(game.handle_input(InputEvent::PointerUp(on_quit)), Control::Continue);
    }

    #[test]
    fn test_tick_advances_animations() {
        let mut game = new_game(9);
        for _ in 0..4 {
            game.tick();
        }
        assert_eq!(game.time_ticks, 4);
        assert_eq!(game.road.offset(), 6);
        assert!(!game.player.flash_blue());
    }
}
