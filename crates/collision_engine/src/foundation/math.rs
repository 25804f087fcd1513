//! Math utilities and types
//!
//! Provides the 2D math types used by the collision engine. Screen space is
//! Y-down: positive X is right, positive Y is down, angles are in degrees.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f64>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// Cosine and sine of an angle given in degrees
    pub fn cos_sin_deg(degrees: f64) -> (f64, f64) {
        let (sin, cos) = deg_to_rad(degrees).sin_cos();
        (cos, sin)
    }

    /// Round half up to the nearest whole unit
    pub fn round_half_up(value: f64) -> f64 {
        (value + 0.5).floor()
    }
}
