//! Roll impulse generation.
//!
//! Produces the randomized toss that kicks off a roll: a uniformly random
//! horizontal direction with horizontal and vertical magnitudes sampled
//! from configured ranges, plus a tumble torque for realistic spin. The
//! generator is stateless; every call samples fresh.

use std::f32::consts::TAU;

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

pub const ROLL_HORIZONTAL_MIN: f32 = 1.0;
pub const ROLL_HORIZONTAL_MAX: f32 = 3.0;
pub const ROLL_VERTICAL_MIN: f32 = 3.0;
pub const ROLL_VERTICAL_MAX: f32 = 5.0;
const ROLL_TORQUE_MAX: f32 = 5.0;

/// Magnitude ranges for generated roll impulses. Vertical bounds must stay
/// strictly positive so every toss lifts the die off the tray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseConfig {
    pub horizontal_min: f32,
    pub horizontal_max: f32,
    pub vertical_min: f32,
    pub vertical_max: f32,
}

impl Default for ImpulseConfig {
    fn default() -> Self {
        Self {
            horizontal_min: ROLL_HORIZONTAL_MIN,
            horizontal_max: ROLL_HORIZONTAL_MAX,
            vertical_min: ROLL_VERTICAL_MIN,
            vertical_max: ROLL_VERTICAL_MAX,
        }
    }
}

/// Stateless generator for roll impulses and tumble torques.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollImpulseGenerator {
    config: ImpulseConfig,
}

impl RollImpulseGenerator {
    pub fn new(config: ImpulseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImpulseConfig {
        &self.config
    }

    /// Generate a toss impulse: random horizontal heading, magnitudes from
    /// the configured ranges.
    pub fn generate(&self) -> Vec3 {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with(&self, rng: &mut impl Rng) -> Vec3 {
        let angle = rng.gen_range(0.0..TAU);
        let horizontal = rng.gen_range(self.config.horizontal_min..self.config.horizontal_max);
        let vertical = rng.gen_range(self.config.vertical_min..self.config.vertical_max);

        Vec3::new(angle.cos() * horizontal, vertical, angle.sin() * horizontal)
    }

    /// Generate a random angular impulse for tumbling.
    pub fn generate_torque(&self) -> Vec3 {
        self.generate_torque_with(&mut rand::thread_rng())
    }

    pub fn generate_torque_with(&self, rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-ROLL_TORQUE_MAX..ROLL_TORQUE_MAX),
            rng.gen_range(-ROLL_TORQUE_MAX..ROLL_TORQUE_MAX),
            rng.gen_range(-ROLL_TORQUE_MAX..ROLL_TORQUE_MAX),
        )
    }
}

/// Sample a scattered rest orientation. Headless hosts (tests, the CLI) use
/// this in place of a physics simulation when settling a die.
pub fn random_rest_orientation(rng: &mut impl Rng) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_impulse_in_range() {
        let generator = RollImpulseGenerator::default();
        for _ in 0..1000 {
            let impulse = generator.generate();
            let horizontal = (impulse.x * impulse.x + impulse.z * impulse.z).sqrt();
            assert!(
                horizontal >= ROLL_HORIZONTAL_MIN * 0.99,
                "Horizontal too small: {horizontal}"
            );
            assert!(
                horizontal <= ROLL_HORIZONTAL_MAX * 1.01,
                "Horizontal too large: {horizontal}"
            );
            assert!(impulse.y > 0.0, "Vertical must be positive: {}", impulse.y);
            assert!(impulse.y >= ROLL_VERTICAL_MIN, "Vertical too small: {}", impulse.y);
            assert!(impulse.y <= ROLL_VERTICAL_MAX, "Vertical too large: {}", impulse.y);
        }
    }

    #[test]
    fn test_impulses_are_not_repeated() {
        let generator = RollImpulseGenerator::default();
        let first = generator.generate();
        let distinct = (0..1000)
            .map(|_| generator.generate())
            .any(|impulse| impulse != first);
        assert!(distinct, "1000 tosses never produced a second distinct impulse");
    }

    #[test]
    fn test_custom_config_bounds() {
        let generator = RollImpulseGenerator::new(ImpulseConfig {
            horizontal_min: 0.5,
            horizontal_max: 0.6,
            vertical_min: 10.0,
            vertical_max: 11.0,
        });
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let impulse = generator.generate_with(&mut rng);
            let horizontal = (impulse.x * impulse.x + impulse.z * impulse.z).sqrt();
            assert!((0.49..=0.61).contains(&horizontal));
            assert!((10.0..11.0).contains(&impulse.y));
        }
    }

    #[test]
    fn test_torque_in_range() {
        let generator = RollImpulseGenerator::default();
        for _ in 0..200 {
            let torque = generator.generate_torque();
            for component in torque.to_array() {
                assert!(component.abs() <= ROLL_TORQUE_MAX);
            }
        }
    }

    #[test]
    fn test_rest_orientation_is_normalized() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let orientation = random_rest_orientation(&mut rng);
            assert!((orientation.length() - 1.0).abs() < 1e-4);
        }
    }
}
