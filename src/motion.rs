// Copyright (c) 2026 rezky_nightky

use rand::Rng;

use crate::grid::GridSize;
use crate::star::Star;

/// Per-theme motion profile applied on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Stays put and blinks.
    Blink,
    /// Drifts left or right and bounces off the grid edges.
    Sway,
    /// Drifts right and wraps around.
    Flow,
}

impl Motion {
    /// Chance that a star flips its visibility on one tick.
    pub fn toggle_chance(self) -> f64 {
        match self {
            Motion::Blink => 0.30,
            Motion::Sway | Motion::Flow => 0.10,
        }
    }

    pub fn initial_velocity<R: Rng + ?Sized>(self, rng: &mut R) -> i8 {
        match self {
            Motion::Blink => 0,
            Motion::Sway => {
                if rng.random_bool(0.5) {
                    1
                } else {
                    -1
                }
            }
            Motion::Flow => 1,
        }
    }

    /// Advances one star by one tick.
    pub fn step<R: Rng + ?Sized>(self, star: &mut Star, grid: GridSize, rng: &mut R) {
        if rng.random_bool(self.toggle_chance()) {
            star.visible = !star.visible;
        }

        let cols = grid.cols.max(1) as i32;
        match self {
            Motion::Blink => {}
            Motion::Sway => {
                star.x += star.velocity as i32;
                if star.x < 0 {
                    star.x = 0;
                    star.velocity = 1;
                } else if star.x >= cols {
                    star.x = cols - 1;
                    star.velocity = -1;
                }
            }
            Motion::Flow => {
                star.x = (star.x + 1).rem_euclid(cols);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn star(x: i32, velocity: i8) -> Star {
        Star {
            x,
            y: 0,
            visible: true,
            glyph: '*',
            velocity,
        }
    }

    #[test]
    fn sway_bounces_off_left_edge() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = star(0, -1);
        Motion::Sway.step(&mut s, GridSize::default(), &mut rng);
        assert_eq!((s.x, s.velocity), (0, 1));
    }

    #[test]
    fn sway_bounces_off_right_edge() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridSize::default();
        let mut s = star(grid.cols as i32 - 1, 1);
        Motion::Sway.step(&mut s, grid, &mut rng);
        assert_eq!((s.x, s.velocity), (grid.cols as i32 - 1, -1));
    }

    #[test]
    fn flow_wraps_last_column_to_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridSize::default();
        let mut s = star(grid.cols as i32 - 1, 1);
        Motion::Flow.step(&mut s, grid, &mut rng);
        assert_eq!(s.x, 0);
    }

    #[test]
    fn blink_never_moves() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = star(7, 0);
        for _ in 0..100 {
            Motion::Blink.step(&mut s, GridSize::default(), &mut rng);
            assert_eq!((s.x, s.y, s.velocity), (7, 0, 0));
        }
    }

    #[test]
    fn toggle_rate_matches_profile() {
        for (motion, expected) in [(Motion::Blink, 0.30), (Motion::Sway, 0.10), (Motion::Flow, 0.10)] {
            let mut rng = StdRng::seed_from_u64(42);
            let mut s = star(3, 0);
            let trials = 20_000;
            let mut flips = 0;
            for _ in 0..trials {
                let before = s.visible;
                motion.step(&mut s, GridSize::default(), &mut rng);
                if s.visible != before {
                    flips += 1;
                }
                // Keep the star in the middle so motion is irrelevant here.
                s.x = 3;
                s.velocity = 0;
            }
            let rate = flips as f64 / trials as f64;
            assert!((rate - expected).abs() < 0.02, "{:?}: {}", motion, rate);
        }
    }

    proptest! {
        #[test]
        fn sway_stays_in_bounds_and_flips_only_on_clamp(
            x in 0i32..20,
            right in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let grid = GridSize::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let v: i8 = if right { 1 } else { -1 };
            let mut s = star(x, v);
            Motion::Sway.step(&mut s, grid, &mut rng);

            prop_assert!(s.x >= 0 && s.x < grid.cols as i32);
            let clamped = x + v as i32 != s.x;
            prop_assert_eq!(clamped, s.velocity != v);
        }

        #[test]
        fn flow_is_exact_successor_mod_cols(x in 0i32..20, seed in any::<u64>()) {
            let grid = GridSize::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s = star(x, 1);
            Motion::Flow.step(&mut s, grid, &mut rng);
            prop_assert_eq!(s.x, (x + 1) % grid.cols as i32);
            prop_assert_eq!(s.velocity, 1);
        }
    }
}
