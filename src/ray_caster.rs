/// MAZECAST Project
/// `File` ray_caster.rs
/// `Description` Grid ray traversal (DDA) implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::map::{Block, GridWorld};
use crate::math::{Vec2fx, Vec2si};
use crate::util::fixed::Fixed;

/// Grid axis
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical boundary crossed, x step
    X = 0,
    /// Horizontal boundary crossed, y step
    Y = 1,
} // enum Axis

/// Per-axis traversal parameters
struct Dimension {
    next_t: Fixed,
    step_t: Fixed,
    delta_position: i32,
} // struct Dimension

impl Dimension {
    /// Axis traversal setup function
    /// * `direction` - ray direction component
    /// * `start` - ray start component
    /// * Returns parameters, all zero for zero direction.
    ///   Components too small for their reciprocal to fit saturate `step_t` to `Fixed::MAX`.
    fn new(direction: Fixed, start: Fixed) -> Self {
        if direction.is_zero() {
            return Self { next_t: Fixed::ZERO, step_t: Fixed::ZERO, delta_position: 0 };
        }

        let step_t = Fixed::ONE.saturating_div(direction.abs());
        let (target_position, delta_position) = if direction.is_negative() {
            (start.ceil_int() - 1, -1)
        } else {
            (start.floor_int() + 1, 1)
        };

        // boundary distance is in (0, 1], so the product never exceeds step_t
        Self {
            next_t: (Fixed::from_int(target_position) - start).abs() * step_t,
            step_t,
            delta_position,
        }
    } // fn new
} // impl Dimension

/// Single ray traversal state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RayCaster {
    ray_start_position: Vec2fx,
    ray_direction: Vec2fx,
    current_position: Vec2si,
    current_t: Fixed,
    next_t: Vec2fx,
    step_t: Vec2fx,
    delta_position: Vec2si,
    last_hit_dimension: Option<Axis>,
} // struct RayCaster

impl RayCaster {
    /// Ray caster create function
    /// * `ray_start_position` - ray origin, world units
    /// * `ray_direction` - ray direction, not necessarily normalized
    pub fn new(ray_start_position: Vec2fx, ray_direction: Vec2fx) -> Self {
        let x = Dimension::new(ray_direction.x, ray_start_position.x);
        let y = Dimension::new(ray_direction.y, ray_start_position.y);

        Self {
            ray_start_position,
            ray_direction,
            current_position: ray_start_position.floor_int(),
            current_t: Fixed::EPSILON,
            next_t: Vec2fx::new(x.next_t, y.next_t),
            step_t: Vec2fx::new(x.step_t, y.step_t),
            delta_position: Vec2si::new(x.delta_position, y.delta_position),
            last_hit_dimension: None,
        }
    } // fn new

    /// Next grid boundary crossing function.
    /// The axis with the nearer boundary advances, x wins ties.
    /// Zero direction axes never advance, boundary t saturates at `Fixed::MAX`.
    pub fn step(&mut self) {
        let direction = self.ray_direction;

        if !direction.x.is_zero() && (direction.y.is_zero() || self.next_t.x <= self.next_t.y) {
            self.current_t = self.next_t.x;
            self.next_t.x = self.next_t.x.saturating_add(self.step_t.x);
            self.current_position.x += self.delta_position.x;
            self.last_hit_dimension = Some(Axis::X);
        } else if !direction.y.is_zero() {
            self.current_t = self.next_t.y;
            self.next_t.y = self.next_t.y.saturating_add(self.step_t.y);
            self.current_position.y += self.delta_position.y;
            self.last_hit_dimension = Some(Axis::Y);
        }
    } // fn step

    pub fn ray_start_position(&self) -> Vec2fx {
        self.ray_start_position
    } // fn ray_start_position

    pub fn ray_direction(&self) -> Vec2fx {
        self.ray_direction
    } // fn ray_direction

    /// Cell the ray is currently in
    pub fn current_position(&self) -> Vec2si {
        self.current_position
    } // fn current_position

    /// Ray parameter of last crossed boundary, `EPSILON` before the first step
    pub fn current_t(&self) -> Fixed {
        self.current_t
    } // fn current_t

    pub fn next_t(&self) -> Vec2fx {
        self.next_t
    } // fn next_t

    pub fn step_t(&self) -> Vec2fx {
        self.step_t
    } // fn step_t

    pub fn delta_position(&self) -> Vec2si {
        self.delta_position
    } // fn delta_position

    pub fn last_hit_dimension(&self) -> Option<Axis> {
        self.last_hit_dimension
    } // fn last_hit_dimension
} // impl RayCaster

/// Ray cast result
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// Ray parameter of the boundary crossed into the hit cell
    pub t: Fixed,
    /// Crossed boundary axis, None if the ray started inside a solid cell
    pub axis: Option<Axis>,
    pub cell: Vec2si,
    pub block: Block,
    pub steps: u32,
} // struct RayHit

/// Ray casting function
/// * `world` - world to cast ray in
/// * `origin` - ray origin
/// * `direction` - ray direction
/// * `max_steps` - step limit
/// * Returns first non-empty cell hit or None if limit is exceeded
pub fn cast<const W: usize, const H: usize>(
    world: &GridWorld<W, H>,
    origin: Vec2fx,
    direction: Vec2fx,
    max_steps: u32,
) -> Option<RayHit> {
    let mut ray_caster = RayCaster::new(origin, direction);
    let mut block = world.block(ray_caster.current_position());
    let mut steps = 0;

    while block.is_empty() {
        if steps == max_steps {
            return None;
        }
        ray_caster.step();
        steps += 1;
        block = world.block(ray_caster.current_position());
    }

    Some(RayHit {
        t: ray_caster.current_t(),
        axis: ray_caster.last_hit_dimension(),
        cell: ray_caster.current_position(),
        block,
        steps,
    })
} // fn cast


// file ray_caster.rs
