//! Enemy cars descending through the lanes

use rand::Rng;

use super::car::Car;
use super::geometry::{Position, Rect};
use super::paint::Rgb;

/// Enemy car category, picked at random on every reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarKind {
    /// Steady 300 px/s
    Cruiser,
    /// Steady 400 px/s
    Racer,
    /// Speed re-rolled in [100, 500) px/s every tick
    Erratic,
}

impl CarKind {
    const ALL: [CarKind; 3] = [CarKind::Cruiser, CarKind::Racer, CarKind::Erratic];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Numeric type id (0, 1, 2)
    pub fn index(self) -> u32 {
        match self {
            CarKind::Cruiser => 0,
            CarKind::Racer => 1,
            CarKind::Erratic => 2,
        }
    }

    /// Points for getting past a car of this kind
    pub fn points(self) -> u32 {
        self.index() + 1
    }

    pub fn colour(self) -> Rgb {
        match self {
            CarKind::Cruiser => Rgb::BLUE,
            CarKind::Racer => Rgb::GREEN,
            CarKind::Erratic => Rgb::RED,
        }
    }

    /// Speed for the next tick in px/s
    pub fn roll_speed<R: Rng + ?Sized>(self, rng: &mut R) -> i32 {
        match self {
            CarKind::Cruiser => 300,
            CarKind::Racer => 400,
            CarKind::Erratic => rng.random_range(100..500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnemyCar {
    pub car: Car,
    active: bool,
    kind: CarKind,
    speed: i32,
}

impl EnemyCar {
    pub fn new<R: Rng + ?Sized>(start: Position, rng: &mut R) -> Self {
        let kind = CarKind::random(rng);
        Self {
            car: Car::new(start, kind.colour(), Rgb::BLACK),
            active: false,
            kind,
            speed: 0,
        }
    }

    /// Back to the lane start, parked, with a freshly rolled kind
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.car.reset();
        self.active = false;
        self.speed = 0;
        self.set_kind(CarKind::random(rng));
    }

    /// Move down while active
    pub fn update<R: Rng + ?Sized>(&mut self, dt_ms: u32, rng: &mut R) {
        if !self.active {
            return;
        }
        self.speed = self.kind.roll_speed(rng);
        let y = self.car.body.pos.y as f64 + self.speed as f64 * dt_ms as f64 / 1000.0;
        // Truncates toward zero, positions stay on whole pixels
        self.car.body.pos.y = y as i32;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> CarKind {
        self.kind
    }

    /// Speed applied on the last update (0 until the first active tick)
    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn rect(&self) -> &Rect {
        &self.car.body
    }

    fn set_kind(&mut self, kind: CarKind) {
        self.kind = kind;
        self.car.body_colour = kind.colour();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_of_kind(kind: CarKind, rng: &mut Pcg32) -> EnemyCar {
        let mut enemy = EnemyCar::new(Position::new(10, -60), rng);
        enemy.set_kind(kind);
        enemy
    }

    #[test]
    fn test_inactive_car_does_not_move() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut enemy = EnemyCar::new(Position::new(10, -60), &mut rng);
        for _ in 0..50 {
            enemy.update(20, &mut rng);
        }
        assert_eq!(enemy.car.position(), Position::new(10, -60));
        assert!(!enemy.is_active());
    }

    #[test]
    fn test_constant_speed_kinds() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut cruiser = enemy_of_kind(CarKind::Cruiser, &mut rng);
        let mut racer = enemy_of_kind(CarKind::Racer, &mut rng);
        cruiser.activate();
        racer.activate();
        for _ in 0..10 {
            cruiser.update(20, &mut rng);
            racer.update(20, &mut rng);
            assert_eq!(cruiser.speed(), 300);
            assert_eq!(racer.speed(), 400);
        }
        assert_eq!(cruiser.car.position().y, -60 + 10 * 6);
        assert_eq!(racer.car.position().y, -60 + 10 * 8);
    }

    #[test]
    fn test_erratic_speed_varies_within_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut erratic = enemy_of_kind(CarKind::Erratic, &mut rng);
        erratic.activate();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            erratic.update(20, &mut rng);
            assert!((100..500).contains(&erratic.speed()));
            seen.insert(erratic.speed());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_fractional_step_truncates_toward_zero() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut enemy = enemy_of_kind(CarKind::Cruiser, &mut rng);
        enemy.activate();
        // 300 px/s over 5 ms is 1.5 px: -60 + 1.5 = -58.5 -> -58
        enemy.update(5, &mut rng);
        assert_eq!(enemy.car.position().y, -58);
    }

    #[test]
    fn test_reset_parks_and_rerolls() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut enemy = EnemyCar::new(Position::new(10, -60), &mut rng);
        enemy.activate();
        enemy.update(1000, &mut rng);
        enemy.reset(&mut rng);
        assert!(!enemy.is_active());
        assert_eq!(enemy.car.position(), Position::new(10, -60));
        assert_eq!(enemy.car.body_colour, enemy.kind().colour());
        assert_eq!(enemy.car.detail_colour, Rgb::BLACK);
    }

    #[test]
    fn test_reset_rerolls_kind() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut enemy = EnemyCar::new(Position::new(10, -60), &mut rng);
        let mut seen = std::collections::HashSet::new();
        let mut changed = 0;
        for _ in 0..600 {
            let before = enemy.kind();
            enemy.reset(&mut rng);
            seen.insert(enemy.kind());
            if enemy.kind() != before {
                changed += 1;
            }
            assert_eq!(enemy.car.body_colour, enemy.kind().colour());
        }
        for kind in CarKind::ALL {
            assert!(seen.contains(&kind), "{kind:?} never rolled");
        }
        // A fresh uniform roll keeps the old kind about a third of the time
        assert!((300..500).contains(&changed), "changed {changed} of 600");
    }

    #[test]
    fn test_kind_roll_covers_all_kinds() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            counts[CarKind::random(&mut rng).index() as usize] += 1;
        }
        // Roughly uniform: each kind within 800..1200 of 3000 draws
        for count in counts {
            assert!((800..1200).contains(&count), "counts: {counts:?}");
        }
    }

    #[test]
    fn test_points_by_kind() {
        assert_eq!(CarKind::Cruiser.points(), 1);
        assert_eq!(CarKind::Racer.points(), 2);
        assert_eq!(CarKind::Erratic.points(), 3);
    }
}
