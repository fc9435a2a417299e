use mazecast::device::{glyph, Buttons, CellBuffer, InputSource};
use mazecast::map::Block;
use mazecast::ray_caster::{self, Axis};
use mazecast::render::Frame;
use mazecast::{Camera, Config, Fixed, Game, Vec2fx, Vec2si, SAMPLE_MAZE, SIN_COS_TABLE};

/// Input source that replays one switch state forever
struct HeldButtons(Buttons);

impl InputSource for HeldButtons {
    fn read(&mut self) -> Buttons {
        self.0
    }
}

fn fx(value: f64) -> Fixed {
    Fixed::from_f64(value)
}

fn start_camera() -> Camera {
    Camera::new(Vec2fx::splat(fx(1.5)), Fixed::ZERO)
}

#[test]
fn center_ray_hits_far_border_across_y() {
    let camera = start_camera();
    let config = Config::DEFAULT;

    for direction in [Vec2fx::new(Fixed::ZERO, Fixed::ONE), Frame::<100, 75>::column_direction(50)] {
        let direction = camera.to_world(&SIN_COS_TABLE, direction);
        let hit = ray_caster::cast(&SAMPLE_MAZE, camera.location, direction, config.max_ray_steps).unwrap();

        assert_eq!(hit.cell, Vec2si::new(1, 15));
        assert_eq!(hit.block, Block::Wall);
        assert_eq!(hit.axis, Some(Axis::Y));
        assert!(hit.t > Fixed::ZERO);
        // far enough for the wall height not to be clamped
        assert!(hit.t > Fixed::ONE / config.max_height);
        assert!((hit.t.to_f64() - 13.5).abs() < 0.01);
    }
}

#[test]
fn first_frame_shows_corridor() {
    let mut game = Game::<16, 16>::new(&SAMPLE_MAZE, &SIN_COS_TABLE, start_camera(), Config::DEFAULT);
    let mut display = CellBuffer::<100, 75>::new();

    let stats = game.frame(&mut HeldButtons(Buttons::empty()), &mut display);
    assert_eq!(stats.misses, 0);
    assert!(!stats.moved);

    // far end of the corridor is low, the walls next to the viewer are tall
    let center = game.frame_buffers().column(50).unwrap();
    let edge = game.frame_buffers().column(0).unwrap();
    assert!(center.end - center.start < edge.end - edge.start);

    assert_eq!(display.cell(50, 0), Some(glyph::SPACE));
    assert_eq!(display.cell(50, 74), Some(glyph::DENSE));
    assert_eq!(display.cell(50, center.start as usize), Some(center.color));
    // last cell is never written
    assert_eq!(display.cursor(), 100 * 75 - 1);
    assert_eq!(display.cell(99, 74), Some(glyph::SPACE));
}

#[test]
fn walking_into_wall_keeps_position() {
    let camera = Camera::new(Vec2fx::new(fx(1.5), fx(1.02)), fx(0.5));
    let mut game = Game::<16, 16>::new(&SAMPLE_MAZE, &SIN_COS_TABLE, camera, Config::DEFAULT);
    let mut display = CellBuffer::<100, 75>::new();

    for _ in 0..10 {
        let stats = game.frame(&mut HeldButtons(Buttons::MOVE), &mut display);
        assert!(!stats.moved);
        assert_eq!(game.camera.location, camera.location);
    }
}

#[test]
fn walking_stops_at_corridor_end() {
    let mut game = Game::<16, 16>::new(&SAMPLE_MAZE, &SIN_COS_TABLE, start_camera(), Config::DEFAULT);
    let mut display = CellBuffer::<100, 75>::new();

    let mut moves = 0;
    for _ in 0..1000 {
        if game.frame(&mut HeldButtons(Buttons::MOVE), &mut display).moved {
            moves += 1;
        }
    }

    // rows 1..=14 are open along column 1
    assert_eq!(game.camera.location.floor_int(), Vec2si::new(1, 14));
    assert_eq!(game.camera.location.x, fx(1.5));
    assert!(moves > 200 && moves < 300);
}

#[test]
fn turning_every_frame_completes_a_revolution() {
    let mut game = Game::<16, 16>::new(&SAMPLE_MAZE, &SIN_COS_TABLE, start_camera(), Config::DEFAULT);
    let mut display = CellBuffer::<100, 75>::new();
    let mut input = HeldButtons(Buttons::TURN);

    let mut wraps = 0;
    let mut previous = game.camera.rotation;
    for _ in 0..250 {
        let stats = game.frame(&mut input, &mut display);
        assert_eq!(stats.misses, 0);
        assert!(game.camera.rotation < Fixed::ONE);
        if game.camera.rotation < previous {
            wraps += 1;
        }
        previous = game.camera.rotation;
    }

    assert_eq!(wraps, 2);
    assert_eq!(game.camera.location, Vec2fx::splat(fx(1.5)));
}

#[test]
fn goal_column_blinks() {
    // three quarters of a turn faces +x, toward the goal cell at (15, 1)
    let camera = Camera::new(Vec2fx::new(fx(12.5), fx(1.5)), fx(0.75));
    let mut game = Game::<16, 16>::new(&SAMPLE_MAZE, &SIN_COS_TABLE, camera, Config::DEFAULT);
    let mut display = CellBuffer::<100, 75>::new();
    let mut input = HeldButtons(Buttons::empty());

    let mut colors = Vec::new();
    for _ in 0..10 {
        game.frame(&mut input, &mut display);
        colors.push(game.frame_buffers().column(50).unwrap().color);
    }

    assert_eq!(colors.iter().filter(|&&color| color == glyph::GOAL_SIDE).count(), 5);
    assert_eq!(colors.iter().filter(|&&color| color == glyph::MEDIUM).count(), 5);
}

#[test]
fn long_turn_keeps_near_axis_columns_on_the_nearest_wall() {
    let mut game = Game::<16, 16>::new(&SAMPLE_MAZE, &SIN_COS_TABLE, start_camera(), Config::DEFAULT);
    let mut display = CellBuffer::<100, 75>::new();
    let mut input = HeldButtons(Buttons::TURN);

    for _ in 0..462 {
        assert_eq!(game.frame(&mut input, &mut display).misses, 0);
    }

    // column 95 looks almost exactly along -y here
    let direction = game.camera.to_world(&SIN_COS_TABLE, Frame::<100, 75>::column_direction(95));
    assert!(direction.x.abs() < Fixed::from_bits(4));

    let hit = ray_caster::cast(&SAMPLE_MAZE, game.camera.location, direction, 64).unwrap();
    assert_eq!(hit.cell, Vec2si::new(1, 0));
    assert_eq!(hit.axis, Some(Axis::Y));
    assert!((hit.t.to_f64() - 0.5 / -direction.y.to_f64()).abs() < 1e-3);
}
