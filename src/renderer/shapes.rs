//! Fill commands for cars and road markings

use super::fill::{FillRect, colors};
use crate::sim::{AnimatedRoad, Car, EnemyCar, PlayerCar};

/// Body and both window strips
pub fn car(car: &Car, out: &mut Vec<FillRect>) {
    out.push(FillRect::new(car.body, car.body_colour));
    for window in car.windows() {
        out.push(FillRect::new(window, car.detail_colour));
    }
}

/// Police car with its roof lights on top
pub fn player_car(player: &PlayerCar, out: &mut Vec<FillRect>) {
    car(&player.car, out);
    for (rect, colour) in player.lights() {
        out.push(FillRect::new(rect, colour));
    }
}

pub fn enemy_car(enemy: &EnemyCar, out: &mut Vec<FillRect>) {
    car(&enemy.car, out);
}

pub fn road(road: &AnimatedRoad, out: &mut Vec<FillRect>) {
    out.extend(
        road.dashes()
            .into_iter()
            .map(|dash| FillRect::new(dash, colors::ROAD_MARKING)),
    );
}
