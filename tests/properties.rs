use mazecast::config::{Collision, SCREEN_HEIGHT, SCREEN_WIDTH};
use mazecast::ray_caster::{self, Axis};
use mazecast::render::Frame;
use mazecast::{Camera, Fixed, Vec2fx, Vec2si, SAMPLE_MAZE, SIN_COS_TABLE};
use proptest::prelude::*;

/// Boundary t difference below which float and fixed traversals may order crossings differently
const TIE_TOLERANCE: f64 = 1e-3;

/// Float DDA over the sample maze
/// * Returns hit cell and t, None if some crossing is too close to a tie to compare
fn reference_cast(origin: Vec2fx, direction: Vec2fx) -> Option<(Vec2si, f64)> {
    let (ox, oy) = (origin.x.to_f64(), origin.y.to_f64());
    let (dx, dy) = (direction.x.to_f64(), direction.y.to_f64());

    let axis = |o: f64, d: f64| -> (f64, f64, i32) {
        if d > 0.0 {
            ((o.floor() + 1.0 - o) / d, 1.0 / d, 1)
        } else if d < 0.0 {
            ((o - (o.ceil() - 1.0)) / -d, -1.0 / d, -1)
        } else {
            (f64::INFINITY, f64::INFINITY, 0)
        }
    };
    let (mut next_x, step_x, delta_x) = axis(ox, dx);
    let (mut next_y, step_y, delta_y) = axis(oy, dy);

    let mut cell = origin.floor_int();
    let mut t = 0.0;

    for _ in 0..64 {
        if !SAMPLE_MAZE.block(cell).is_empty() {
            return Some((cell, t));
        }
        if (next_x - next_y).abs() < TIE_TOLERANCE {
            return None;
        }
        if next_x < next_y {
            t = next_x;
            next_x += step_x;
            cell.x += delta_x;
        } else {
            t = next_y;
            next_y += step_y;
            cell.y += delta_y;
        }
    }

    None
}

/// Center of some open cell of the sample maze
fn open_cell_center() -> impl Strategy<Value = Vec2fx> {
    (1..15i32, 1..15i32)
        .prop_filter("cell is open", |&(x, y)| SAMPLE_MAZE.block(Vec2si::new(x, y)).is_empty())
        .prop_map(|(x, y)| Vec2fx::new(Fixed::from_int(x) + Fixed::HALF, Fixed::from_int(y) + Fixed::HALF))
}

fn fixed() -> impl Strategy<Value = Fixed> {
    any::<i32>().prop_map(Fixed::from_bits)
}

/// Point strictly inside some open cell of the sample maze
fn open_point() -> impl Strategy<Value = Vec2fx> {
    (1..15i32, 1..15i32, 1..0xFFFFi32, 1..0xFFFFi32)
        .prop_filter("cell is open", |&(x, y, _, _)| SAMPLE_MAZE.block(Vec2si::new(x, y)).is_empty())
        .prop_map(|(x, y, fx, fy)| {
            Vec2fx::new(
                Fixed::from_int(x) + Fixed::from_bits(fx),
                Fixed::from_int(y) + Fixed::from_bits(fy),
            )
        })
}

proptest! {
    #[test]
    fn addition_is_reversible(a in fixed(), b in fixed()) {
        prop_assert_eq!(a + b - b, a);
    }

    #[test]
    fn floor_and_ceil_bracket_value(bits in i32::MIN..=(i32::MAX - 0xFFFF)) {
        let x = Fixed::from_bits(bits);
        prop_assert!(x.floor() <= x);
        prop_assert!(x <= x.ceil());
        prop_assert!(x.ceil() - x.floor() <= Fixed::ONE);
    }

    #[test]
    fn float_conversion_is_exact(x in fixed()) {
        prop_assert_eq!(Fixed::from_f64(x.to_f64()), x);
    }

    #[test]
    fn sqrt_is_nearest_from_below(bits in 0..=i32::MAX) {
        let root = Fixed::from_bits(bits).sqrt().to_bits() as i64;
        let square = (bits as i64) << Fixed::FRACTIONAL_BITS;

        prop_assert!(root >= 0);
        prop_assert!(root * root <= square);
        prop_assert!((root + 1) * (root + 1) > square);
    }

    #[test]
    fn trig_is_periodic(rotation in fixed()) {
        prop_assert_eq!(SIN_COS_TABLE.get(rotation), SIN_COS_TABLE.get(rotation + Fixed::ONE));
    }

    #[test]
    fn trig_stays_on_unit_circle(rotation in fixed()) {
        let (sin, cos) = SIN_COS_TABLE.get(rotation);
        let norm = sin.to_f64() * sin.to_f64() + cos.to_f64() * cos.to_f64();
        prop_assert!((norm - 1.0).abs() <= 1.0 / 512.0);
    }

    #[test]
    fn axis_aligned_rays_keep_their_axis(origin in open_point(), length in 0x1000..0x40000i32, along_x in any::<bool>()) {
        let length = Fixed::from_bits(length);
        let direction = if along_x {
            Vec2fx::new(length, Fixed::ZERO)
        } else {
            Vec2fx::new(Fixed::ZERO, -length)
        };

        let hit = ray_caster::cast(&SAMPLE_MAZE, origin, direction, 64).unwrap();
        prop_assert!(!hit.block.is_empty());
        prop_assert_eq!(hit.axis, Some(if along_x { Axis::X } else { Axis::Y }));
        prop_assert!(hit.t > Fixed::ZERO);
    }

    #[test]
    fn moves_never_enter_walls(origin in open_point(), heading in fixed(), clearance in any::<bool>()) {
        let collision = if clearance {
            Collision::Clearance { margin: Fixed::from_f64(0.1) }
        } else {
            Collision::Cell
        };
        let mut camera = Camera::new(origin, heading);
        let before = camera;

        if camera.try_move(&SAMPLE_MAZE, &SIN_COS_TABLE, Fixed::from_f64(0.05), collision) {
            prop_assert!(SAMPLE_MAZE.block(camera.location.floor_int()).is_empty());
            prop_assert_ne!(camera.location, before.location);
        } else {
            prop_assert_eq!(camera, before);
        }
    }

    #[test]
    fn every_column_matches_float_traversal(origin in open_cell_center(), heading in 0..65536i32) {
        let camera = Camera::new(origin, Fixed::from_bits(heading));

        for x in 0..SCREEN_WIDTH {
            let direction = camera.to_world(&SIN_COS_TABLE, Frame::<SCREEN_WIDTH, SCREEN_HEIGHT>::column_direction(x));
            let Some((cell, t)) = reference_cast(origin, direction) else {
                continue;
            };

            let hit = ray_caster::cast(&SAMPLE_MAZE, origin, direction, 64).unwrap();
            prop_assert_eq!(hit.cell, cell, "column {} direction {}", x, direction);
            prop_assert!((hit.t.to_f64() - t).abs() < TIE_TOLERANCE, "column {}: t {} vs {}", x, hit.t, t);
        }
    }
}
