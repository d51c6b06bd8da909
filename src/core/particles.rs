//! Decorative particle field generation
//!
//! A particle field is a fixed number of small tokens that float around a
//! section background. Every particle samples its motion path once, when the
//! field is generated; nothing is mutated afterwards. Callers are expected to
//! generate a field once per mount and keep it for the lifetime of the view.
//!
//! # Usage Example
//!
//! ```rust
//! use pixplorer::core::particles::{ParticleRanges, generate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let field = generate(8, &ParticleRanges::ambient(), &mut rng);
//! assert_eq!(field.len(), 8);
//! ```

use rand::Rng;
use std::ops::RangeInclusive;

/// Opacity keyframes used by the section backgrounds (fade in, fade out)
pub const AMBIENT_OPACITY: [f64; 3] = [0.0, 0.4, 0.0];

/// Opacity keyframes used by the hero sparkles and the drifting backgrounds
pub const SPARKLE_OPACITY: [f64; 3] = [0.0, 0.6, 0.0];

/// Opacity keyframes of the pricing card hover burst
pub const BURST_OPACITY: [f64; 3] = [0.0, 0.8, 0.0];

/// 2D offset in pixels relative to the field origin
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// A single decorative particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Where the particle starts
    pub origin_offset: Offset,
    /// Where the particle drifts to before reversing
    pub drift_target: Offset,
    /// Initial rotation in degrees
    pub rotation_deg: f64,
    /// Opacity sampled evenly across one animation cycle
    pub opacity_keyframes: Vec<f64>,
    /// Length of one animation cycle in seconds
    pub duration: f64,
    /// Delay before the first cycle starts, in seconds
    pub repeat_delay: f64,
}

impl Particle {
    /// Inline CSS custom properties consumed by the particle keyframes
    pub fn css_vars(&self) -> String {
        format!(
            "--px-from-x: {:.1}px; --px-from-y: {:.1}px; --px-to-x: {:.1}px; --px-to-y: {:.1}px; \
             --px-rotate: {:.1}deg; --px-peak: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.origin_offset.x,
            self.origin_offset.y,
            self.drift_target.x,
            self.drift_target.y,
            self.rotation_deg,
            self.peak_opacity(),
            self.duration,
            self.repeat_delay,
        )
    }

    /// Highest opacity the particle reaches during a cycle
    pub fn peak_opacity(&self) -> f64 {
        self.opacity_keyframes
            .iter()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}

/// Error returned for a preset whose ranges cannot be sampled
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParticleRangeError {
    #[error("range `{name}` is inverted ({start} > {end})")]
    Inverted {
        name: &'static str,
        start: f64,
        end: f64,
    },

    #[error("range `{name}` is not finite")]
    NotFinite { name: &'static str },

    #[error("rotation upper bound must be positive")]
    EmptyRotation,
}

/// Sampling ranges for a particle field
///
/// Rotation is sampled from the half-open range `[0, max_rotation)`; every
/// other field is sampled from an inclusive range.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleRanges {
    pub origin_x: RangeInclusive<f64>,
    pub origin_y: RangeInclusive<f64>,
    pub drift_x: RangeInclusive<f64>,
    pub drift_y: RangeInclusive<f64>,
    pub max_rotation: f64,
    /// Minimum cycle length in seconds
    pub duration_base: f64,
    /// Random extra cycle length in seconds
    pub duration_spread: f64,
    /// Upper bound of the start delay in seconds
    pub max_delay: f64,
    /// Extra start delay per particle index, in seconds
    pub stagger: f64,
    pub opacity_keyframes: Vec<f64>,
}

impl ParticleRanges {
    /// Floating diamonds behind the FAQ, contact, showcase and footer sections
    pub fn ambient() -> Self {
        Self {
            origin_x: -50.0..=150.0,
            origin_y: -50.0..=150.0,
            drift_x: -100.0..=200.0,
            drift_y: -100.0..=200.0,
            max_rotation: 360.0,
            duration_base: 15.0,
            duration_spread: 10.0,
            max_delay: 5.0,
            stagger: 0.0,
            opacity_keyframes: AMBIENT_OPACITY.to_vec(),
        }
    }

    /// Slower, longer-lived variant used by the service and testimonial sections
    pub fn drifting() -> Self {
        Self {
            duration_base: 20.0,
            duration_spread: 15.0,
            max_delay: 8.0,
            opacity_keyframes: SPARKLE_OPACITY.to_vec(),
            ..Self::ambient()
        }
    }

    /// Falling sparkles in the hero
    pub fn sparkle() -> Self {
        Self {
            origin_x: 0.0..=100.0,
            origin_y: -20.0..=-20.0,
            drift_x: -50.0..=50.0,
            drift_y: 100.0..=400.0,
            max_rotation: 360.0,
            duration_base: 10.0,
            duration_spread: 10.0,
            max_delay: 5.0,
            stagger: 0.0,
            opacity_keyframes: SPARKLE_OPACITY.to_vec(),
        }
    }

    /// Short burst around a hovered pricing card
    ///
    /// Tokens start at the card origin and scatter within 50px. The 5 s cycle
    /// is 2 s of motion followed by 3 s of rest; starts are staggered by 0.2 s.
    pub fn hover_burst() -> Self {
        Self {
            origin_x: 0.0..=0.0,
            origin_y: 0.0..=0.0,
            drift_x: -50.0..=50.0,
            drift_y: -50.0..=50.0,
            max_rotation: 360.0,
            duration_base: 5.0,
            duration_spread: 0.0,
            max_delay: 0.0,
            stagger: 0.2,
            opacity_keyframes: BURST_OPACITY.to_vec(),
        }
    }

    /// Range of cycle lengths this preset can produce
    pub fn duration_range(&self) -> RangeInclusive<f64> {
        self.duration_base..=self.duration_base + self.duration_spread
    }

    /// Check that every range can be sampled
    pub fn validate(&self) -> Result<(), ParticleRangeError> {
        let ranges = [
            ("origin_x", &self.origin_x),
            ("origin_y", &self.origin_y),
            ("drift_x", &self.drift_x),
            ("drift_y", &self.drift_y),
        ];
        for (name, range) in ranges {
            check_range(name, *range.start(), *range.end())?;
        }
        check_range("duration", self.duration_base, self.duration_base + self.duration_spread)?;
        check_range("delay", 0.0, self.max_delay)?;
        check_range("stagger", 0.0, self.stagger)?;

        if !self.max_rotation.is_finite() {
            return Err(ParticleRangeError::NotFinite {
                name: "rotation",
            });
        }
        if self.max_rotation <= 0.0 {
            return Err(ParticleRangeError::EmptyRotation);
        }
        Ok(())
    }
}

impl Default for ParticleRanges {
    fn default() -> Self {
        Self::ambient()
    }
}

fn check_range(name: &'static str, start: f64, end: f64) -> Result<(), ParticleRangeError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ParticleRangeError::NotFinite { name });
    }
    if start > end {
        return Err(ParticleRangeError::Inverted { name, start, end });
    }
    Ok(())
}

/// Sample from an inclusive range, tolerating a degenerate one
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    let (start, end) = (*range.start(), *range.end());
    if start >= end {
        start
    } else {
        rng.gen_range(start..=end)
    }
}

/// Generate `count` particles with independently sampled motion paths
///
/// Ranges are expected to have passed [`ParticleRanges::validate`]; an
/// inverted range collapses to its start instead of panicking.
pub fn generate<R: Rng + ?Sized>(count: usize, ranges: &ParticleRanges, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|index| Particle {
            origin_offset: Offset {
                x: sample(rng, &ranges.origin_x),
                y: sample(rng, &ranges.origin_y),
            },
            drift_target: Offset {
                x: sample(rng, &ranges.drift_x),
                y: sample(rng, &ranges.drift_y),
            },
            rotation_deg: if ranges.max_rotation > 0.0 {
                rng.gen_range(0.0..ranges.max_rotation)
            } else {
                0.0
            },
            opacity_keyframes: ranges.opacity_keyframes.clone(),
            duration: sample(rng, &ranges.duration_range()),
            repeat_delay: index as f64 * ranges.stagger + sample(rng, &(0.0..=ranges.max_delay)),
        })
        .collect()
}

/// Generate a field with the thread-local RNG
pub fn generate_with(count: usize, ranges: &ParticleRanges) -> Vec<Particle> {
    generate(count, ranges, &mut rand::thread_rng())
}

/// Generate a field with the default (ambient) ranges and the thread-local RNG
pub fn generate_default(count: usize) -> Vec<Particle> {
    generate_with(count, &ParticleRanges::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_within(index: usize, particle: &Particle, ranges: &ParticleRanges) {
        assert!(ranges.origin_x.contains(&particle.origin_offset.x));
        assert!(ranges.origin_y.contains(&particle.origin_offset.y));
        assert!(ranges.drift_x.contains(&particle.drift_target.x));
        assert!(ranges.drift_y.contains(&particle.drift_target.y));
        assert!(particle.rotation_deg >= 0.0 && particle.rotation_deg < ranges.max_rotation);
        assert!(ranges.duration_range().contains(&particle.duration));
        let first_start = index as f64 * ranges.stagger;
        assert!(particle.repeat_delay >= first_start);
        assert!(particle.repeat_delay <= first_start + ranges.max_delay);
        assert_eq!(particle.opacity_keyframes, ranges.opacity_keyframes);
    }

    #[test]
    fn test_generate_returns_exact_count() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in [0, 1, 6, 20, 250] {
            let field = generate(count, &ParticleRanges::ambient(), &mut rng);
            assert_eq!(field.len(), count);
        }
    }

    #[test]
    fn test_generate_zero_is_empty() {
        assert!(generate_default(0).is_empty());
    }

    #[test]
    fn test_default_ranges_match_observed_values() {
        let ranges = ParticleRanges::default();
        assert_eq!(ranges.origin_x, -50.0..=150.0);
        assert_eq!(ranges.origin_y, -50.0..=150.0);
        assert_eq!(ranges.drift_x, -100.0..=200.0);
        assert_eq!(ranges.drift_y, -100.0..=200.0);
        assert_eq!(ranges.duration_range(), 15.0..=25.0);
        assert_eq!(ranges.max_delay, 5.0);
        assert_eq!(ranges.opacity_keyframes, vec![0.0, 0.4, 0.0]);
    }

    #[test]
    fn test_sampled_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for ranges in [
            ParticleRanges::ambient(),
            ParticleRanges::drifting(),
            ParticleRanges::sparkle(),
            ParticleRanges::hover_burst(),
        ] {
            for (index, particle) in generate(500, &ranges, &mut rng).iter().enumerate() {
                assert_within(index, particle, &ranges);
            }
        }
    }

    #[test]
    fn test_hover_burst_scatters_from_origin_with_staggered_starts() {
        let ranges = ParticleRanges::hover_burst();
        let field = generate(5, &ranges, &mut StdRng::seed_from_u64(5));

        for (index, particle) in field.iter().enumerate() {
            assert_eq!(particle.origin_offset, Offset::default());
            assert!((-50.0..=50.0).contains(&particle.drift_target.x));
            assert!((-50.0..=50.0).contains(&particle.drift_target.y));
            assert_eq!(particle.duration, 5.0);
            assert!((particle.repeat_delay - index as f64 * 0.2).abs() < 1e-9);
            assert_eq!(particle.opacity_keyframes, vec![0.0, 0.8, 0.0]);
        }
    }

    #[test]
    fn test_drifting_is_slower_than_ambient() {
        let drifting = ParticleRanges::drifting();
        assert_eq!(drifting.duration_range(), 20.0..=35.0);
        assert_eq!(drifting.max_delay, 8.0);
        assert_eq!(drifting.opacity_keyframes, vec![0.0, 0.6, 0.0]);
        // Positions are shared with the ambient preset
        assert_eq!(drifting.origin_x, ParticleRanges::ambient().origin_x);
    }

    #[test]
    fn test_sparkle_starts_above_the_fold() {
        let mut rng = StdRng::seed_from_u64(3);
        for particle in generate(50, &ParticleRanges::sparkle(), &mut rng) {
            assert_eq!(particle.origin_offset.y, -20.0);
            assert!(particle.drift_target.y >= 100.0);
            assert_eq!(particle.opacity_keyframes, vec![0.0, 0.6, 0.0]);
            assert_eq!(particle.peak_opacity(), 0.6);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = generate(10, &ParticleRanges::ambient(), &mut StdRng::seed_from_u64(9));
        let b = generate(10, &ParticleRanges::ambient(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_regeneration_draws_new_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = generate(10, &ParticleRanges::ambient(), &mut rng);
        let second = generate(10, &ParticleRanges::ambient(), &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_validate_accepts_presets() {
        assert!(ParticleRanges::ambient().validate().is_ok());
        assert!(ParticleRanges::drifting().validate().is_ok());
        assert!(ParticleRanges::sparkle().validate().is_ok());
        assert!(ParticleRanges::hover_burst().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let ranges = ParticleRanges {
            drift_x: 200.0..=-100.0,
            ..ParticleRanges::ambient()
        };
        assert_eq!(
            ranges.validate(),
            Err(ParticleRangeError::Inverted {
                name: "drift_x",
                start: 200.0,
                end: -100.0,
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_spread_and_rotation() {
        let ranges = ParticleRanges {
            duration_spread: -20.0,
            ..ParticleRanges::ambient()
        };
        assert!(matches!(
            ranges.validate(),
            Err(ParticleRangeError::Inverted { name: "duration", .. })
        ));

        let ranges = ParticleRanges {
            max_rotation: 0.0,
            ..ParticleRanges::ambient()
        };
        assert_eq!(ranges.validate(), Err(ParticleRangeError::EmptyRotation));

        let ranges = ParticleRanges {
            stagger: -0.2,
            ..ParticleRanges::hover_burst()
        };
        assert!(matches!(
            ranges.validate(),
            Err(ParticleRangeError::Inverted { name: "stagger", .. })
        ));

        let ranges = ParticleRanges {
            origin_y: f64::NAN..=1.0,
            ..ParticleRanges::ambient()
        };
        assert_eq!(
            ranges.validate(),
            Err(ParticleRangeError::NotFinite { name: "origin_y" })
        );
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let ranges = ParticleRanges {
            origin_x: 10.0..=-10.0,
            max_rotation: 0.0,
            ..ParticleRanges::ambient()
        };
        let field = generate(5, &ranges, &mut StdRng::seed_from_u64(0));
        assert!(field.iter().all(|p| p.origin_offset.x == 10.0));
        assert!(field.iter().all(|p| p.rotation_deg == 0.0));
    }

    #[test]
    fn test_css_vars_carry_motion_path() {
        let particle = Particle {
            origin_offset: Offset { x: -12.0, y: 40.5 },
            drift_target: Offset { x: 150.0, y: -3.25 },
            rotation_deg: 90.0,
            opacity_keyframes: AMBIENT_OPACITY.to_vec(),
            duration: 17.5,
            repeat_delay: 2.0,
        };
        let css = particle.css_vars();
        assert!(css.contains("--px-from-x: -12.0px"));
        assert!(css.contains("--px-from-y: 40.5px"));
        assert!(css.contains("--px-to-x: 150.0px"));
        assert!(css.contains("--px-rotate: 90.0deg"));
        assert!(css.contains("--px-peak: 0.40"));
        assert!(css.contains("animation-duration: 17.50s"));
        assert!(css.contains("animation-delay: 2.00s"));
    }
}
