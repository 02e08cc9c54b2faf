//! Lane traffic: one enemy car per lane, a pool of parked cars,
//! and the collision / exit bookkeeping that feeds score and crashes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::enemy::{CarKind, EnemyCar};
use super::geometry::{Position, Rect};
use crate::consts::{CAR_HEIGHT, CAR_WIDTH, PANEL_HEIGHT, PANEL_WIDTH};

/// Something that happened to a lane car during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficEvent {
    /// The car left the bottom of the screen without hitting the player
    Dodged { lane: usize, kind: CarKind, points: u32 },
    /// The car overlaps the player
    Crashed { lane: usize },
}

#[derive(Debug, Clone)]
pub struct EnemyCarManager {
    /// Indexed by lane
    cars: Vec<EnemyCar>,
    /// Lanes whose car is parked, in no particular order
    inactive: Vec<usize>,
    max_active_lanes: usize,
    rng: Pcg32,
}

impl EnemyCarManager {
    pub fn new(lanes: usize, max_active_lanes: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let cars = (0..lanes)
            .map(|lane| EnemyCar::new(Self::lane_start(lanes, lane), &mut rng))
            .collect();

        let mut manager = Self {
            cars,
            inactive: (0..lanes).collect(),
            max_active_lanes: max_active_lanes.min(lanes),
            rng,
        };
        manager.fill_active_lanes();
        manager
    }

    /// Top-left spawn for a lane, centred in the lane just above the screen
    pub fn lane_start(lanes: usize, lane: usize) -> Position {
        let lane_width = PANEL_WIDTH / lanes as i32;
        Position::new(
            lane_width * lane as i32 + lane_width / 2 - CAR_WIDTH / 2,
            -CAR_HEIGHT,
        )
    }

    /// Move one lane's car and check it against the player.
    ///
    /// A crash is only reported; the caller owns the round reset and may run
    /// it before stepping the remaining lanes.
    pub fn update_lane(&mut self, lane: usize, dt_ms: u32, player: &Rect) -> Option<TrafficEvent> {
        let car = &mut self.cars[lane];
        car.update(dt_ms, &mut self.rng);

        // Parked cars are checked too; they sit above the screen so only
        // a player dragged there could touch one.
        if car.car.is_intersecting(player) {
            log::info!("Lane {} car hit the player", lane);
            return Some(TrafficEvent::Crashed { lane });
        }

        if car.car.position().y > PANEL_HEIGHT {
            let kind = car.kind();
            car.reset(&mut self.rng);
            log::debug!("Lane {} {:?} dodged (+{})", lane, kind, kind.points());
            self.inactive.push(lane);
            self.activate_random_car();
            return Some(TrafficEvent::Dodged {
                lane,
                kind,
                points: kind.points(),
            });
        }
        None
    }

    /// Park and re-roll every car, then start a fresh set of active lanes
    pub fn reset(&mut self) {
        self.inactive.clear();
        for (lane, car) in self.cars.iter_mut().enumerate() {
            car.reset(&mut self.rng);
            self.inactive.push(lane);
        }
        self.fill_active_lanes();
    }

    pub fn cars(&self) -> &[EnemyCar] {
        &self.cars
    }

    pub fn lanes(&self) -> usize {
        self.cars.len()
    }

    pub fn active_count(&self) -> usize {
        self.cars.len() - self.inactive.len()
    }

    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }

    fn fill_active_lanes(&mut self) {
        for _ in 0..self.max_active_lanes {
            self.activate_random_car();
        }
    }

    /// Wake one parked car chosen uniformly; no-op when none are parked
    fn activate_random_car(&mut self) {
        if self.inactive.is_empty() {
            return;
        }
        let pick = self.rng.random_range(0..self.inactive.len());
        let lane = self.inactive.swap_remove(pick);
        self.cars[lane].activate();
    }

    #[cfg(test)]
    pub(crate) fn car_mut(&mut self, lane: usize) -> &mut EnemyCar {
        &mut self.cars[lane]
    }
}
