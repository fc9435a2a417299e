/// MAZECAST Project
/// `File` config.rs
/// `Description` Frame and movement tuning module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::util::fixed::Fixed;

/// Display width in character cells
pub const SCREEN_WIDTH: usize = 800 / 8;
/// Display height in character cells
pub const SCREEN_HEIGHT: usize = 600 / 8;

/// Movement gating policy
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    /// Move only if the destination cell is empty
    Cell,
    /// Move only if every solid block around the destination is at least
    /// `margin` away (Chebyshev distance)
    Clearance { margin: Fixed },
} // enum Collision

/// Frame loop parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Heading increment per frame with turn switch held, rotations
    pub turn_step: Fixed,
    /// Forward displacement per frame with move switch held, cells
    pub forward_speed: Fixed,
    /// Wall height clamp, in screen half-widths, must be positive
    pub max_height: Fixed,
    /// Goal blink period, frames
    pub blink_period: u32,
    /// Ray steps after which a ray counts as missed
    pub max_ray_steps: u32,
    pub collision: Collision,
} // struct Config

impl Config {
    pub const DEFAULT: Config = Config {
        turn_step: Fixed::from_f64(0.01),
        forward_speed: Fixed::from_f64(0.05),
        max_height: Fixed::from_int(10),
        blink_period: 10,
        max_ray_steps: 64,
        collision: Collision::Cell,
    };

    /// Parameter sanity checking function
    /// * Returns false if walls can never be drawn or rays never cast
    pub const fn is_valid(&self) -> bool {
        self.max_height.to_bits() > 0 && self.max_ray_steps > 0
    } // fn is_valid
} // impl Config

const _: () = assert!(Config::DEFAULT.is_valid(), "default config is invalid");

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}


// file config.rs
