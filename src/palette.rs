/// The variation engine: derive a fresh palette from a mood's base colors.
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::color;
use crate::types::Palette;

/// Fraction of slots that get a brightness shift instead of the base color.
pub const VARY_CHANCE: f64 = 0.3;

/// Total brightness swing in percentage points; shifts land in ±half this.
pub const VARIATION_SPAN: f64 = 40.0;

/// Source of uniform draws in `[0, 1)`. Production uses the thread RNG;
/// tests script the sequence to pin down the branch thresholds.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local RNG.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random()
    }
}

/// Deterministic source for reproducible palettes (`generate --seed`).
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.random()
    }
}

/// Derive a new palette from `base`. Each slot keeps its base color, or,
/// with probability `VARY_CHANCE`, shifts its brightness by up to
/// ±`VARIATION_SPAN / 2` percentage points.
pub fn vary(base: &[String], source: &mut dyn RandomSource) -> Palette {
    std::array::from_fn(|slot| {
        let base_color = &base[slot % base.len()];
        if source.next_unit() > VARY_CHANCE {
            base_color.clone()
        } else {
            let percent = (source.next_unit() - 0.5) * VARIATION_SPAN;
            color::adjust_brightness(base_color, percent)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        draws: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let draw = self.draws[self.next];
            self.next += 1;
            draw
        }
    }

    fn base() -> Vec<String> {
        ["#ffd93d", "#6bcf7f", "#4d96ff", "#ff6b6b"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn draws_above_the_cutoff_keep_base_colors() {
        let mut source = Scripted::new(&[0.9, 0.31, 0.99, 0.5]);
        let palette = vary(&base(), &mut source);
        assert_eq!(palette.to_vec(), base());
    }

    #[test]
    fn draws_at_or_below_the_cutoff_shift_brightness() {
        // Slot 0 varies: 0.75 maps to (0.75 - 0.5) * 40 = +10 points.
        let mut source = Scripted::new(&[0.3, 0.75, 0.9, 0.9, 0.9]);
        let palette = vary(&base(), &mut source);
        assert_eq!(palette[0], color::adjust_brightness("#ffd93d", 10.0));
        assert_eq!(palette[1], "#6bcf7f");
        assert_eq!(palette[2], "#4d96ff");
        assert_eq!(palette[3], "#ff6b6b");
    }

    #[test]
    fn shift_spans_plus_minus_twenty_points() {
        // A draw of 0.0 gives the darkest shift, one near 1.0 the lightest.
        let mut darkest = Scripted::new(&[0.0, 0.0, 0.9, 0.9, 0.9]);
        let palette = vary(&base(), &mut darkest);
        assert_eq!(palette[0], color::adjust_brightness("#ffd93d", -20.0));

        let mut lightest = Scripted::new(&[0.0, 0.999999, 0.9, 0.9, 0.9]);
        let palette = vary(&base(), &mut lightest);
        let (r, g, b) = color::parse_hex(&palette[0]).unwrap();
        let (max_r, max_g, max_b) =
            color::parse_hex(&color::adjust_brightness("#ffd93d", 20.0)).unwrap();
        assert!(r <= max_r && g <= max_g && b <= max_b);
    }

    #[test]
    fn midpoint_shift_keeps_the_value() {
        // Varied slot with a centered second draw shifts by zero points.
        let mut source = Scripted::new(&[0.1, 0.5, 0.9, 0.9, 0.9]);
        let palette = vary(&base(), &mut source);
        assert_eq!(palette[0], "#ffd93d");
    }

    #[test]
    fn output_is_always_four_valid_colors() {
        let mut source = SeededRandom::new(42);
        for _ in 0..200 {
            let palette = vary(&base(), &mut source);
            for c in &palette {
                assert!(color::is_valid_hex(c), "bad color {c}");
            }
        }
    }

    #[test]
    fn seeded_sources_reproduce_palettes() {
        let first = vary(&base(), &mut SeededRandom::new(7));
        let second = vary(&base(), &mut SeededRandom::new(7));
        assert_eq!(first, second);
    }
}
