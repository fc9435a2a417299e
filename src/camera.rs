/// MAZECAST Project
/// `File` camera.rs
/// `Description` Viewer pose and movement module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::config::{Collision, Config};
use crate::device::Buttons;
use crate::map::GridWorld;
use crate::math::{Vec2fx, Vec2si};
use crate::util::fixed::{sin_cos::SinCosTable, Fixed};

/// Viewer pose
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Camera {
    /// World position
    pub location: Vec2fx,
    /// Heading in rotations, [0, 1) range. Zero looks along +y
    pub rotation: Fixed,
} // struct Camera

impl Camera {
    pub const fn new(location: Vec2fx, rotation: Fixed) -> Self {
        Self {
            location,
            rotation: rotation.fract(),
        }
    } // fn new

    /// Turning function
    /// * `delta` - rotation increment, heading wraps into [0, 1)
    pub fn turn(&mut self, delta: Fixed) {
        self.rotation = (self.rotation + delta).fract();
    } // fn turn

    /// View to world direction conversion function
    pub fn to_world<const N: usize>(&self, table: &SinCosTable<N>, direction: Vec2fx) -> Vec2fx {
        table.rotate(direction, self.rotation)
    } // fn to_world

    /// Forward displacement getting function
    /// * `speed` - displacement length
    pub fn forward<const N: usize>(&self, table: &SinCosTable<N>, speed: Fixed) -> Vec2fx {
        self.to_world(table, Vec2fx::new(Fixed::ZERO, speed))
    } // fn forward

    /// Forward movement function, the move is either committed or dropped whole
    /// * Returns true if camera moved
    pub fn try_move<const N: usize, const W: usize, const H: usize>(
        &mut self,
        world: &GridWorld<W, H>,
        table: &SinCosTable<N>,
        speed: Fixed,
        collision: Collision,
    ) -> bool {
        let new_location = self.location + self.forward(table, speed);

        let passable = match collision {
            Collision::Cell => world.block(new_location.floor_int()).is_empty(),
            Collision::Clearance { margin } => clearance(world, new_location) >= margin,
        };

        if passable {
            self.location = new_location;
        }

        passable
    } // fn try_move

    /// Per-frame input application function
    /// * Returns true if camera moved
    pub fn update<const N: usize, const W: usize, const H: usize>(
        &mut self,
        buttons: Buttons,
        world: &GridWorld<W, H>,
        table: &SinCosTable<N>,
        config: &Config,
    ) -> bool {
        if buttons.contains(Buttons::TURN) {
            self.turn(config.turn_step);
        }

        buttons.contains(Buttons::MOVE) && self.try_move(world, table, config.forward_speed, config.collision)
    } // fn update
} // impl Camera

/// Distance to nearest solid block around point function
/// * `world` - world to look blocks in
/// * `point` - point to measure distance from
/// * Returns Chebyshev distance to the closest non-empty block of 3x3 neighbourhood
fn clearance<const W: usize, const H: usize>(world: &GridWorld<W, H>, point: Vec2fx) -> Fixed {
    let center = point.floor_int();
    let mut closest_distance = Fixed::MAX;

    for dy in -1..=1 {
        for dx in -1..=1 {
            let block_position = center + Vec2si::new(dx, dy);
            if world.block(block_position).is_empty() {
                continue;
            }

            let min = Vec2fx::new(Fixed::from_int(block_position.x), Fixed::from_int(block_position.y));
            let max = min + Vec2fx::splat(Fixed::ONE);
            let closest_position = Vec2fx::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y));

            let distance = (closest_position.x - point.x).abs().max((closest_position.y - point.y).abs());
            closest_distance = closest_distance.min(distance);
        }
    }

    closest_distance
} // fn clearance


// file camera.rs
