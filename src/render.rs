/// MAZECAST Project
/// `File` render.rs
/// `Description` Column projection and frame output module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::camera::Camera;
use crate::config::{Config, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::device::{glyph, Display};
use crate::map::{Block, GridWorld};
use crate::math::Vec2fx;
use crate::ray_caster::{self, Axis, RayHit};
use crate::util::fixed::{sin_cos::SinCosTable, Fixed};

/// Single screen column span
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// First wall row
    pub start: u8,
    /// First floor row
    pub end: u8,
    /// Wall cell
    pub color: u8,
} // struct Column

impl Column {
    /// Row cell getting function
    /// * `y` - row
    /// * Returns ceiling, wall or floor cell
    pub fn cell(&self, y: usize) -> u8 {
        if y >= self.end as usize {
            glyph::DENSE
        } else if y >= self.start as usize {
            self.color
        } else {
            glyph::SPACE
        }
    } // fn cell
} // impl Column

/// Frame rendering statistics
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Columns whose ray exceeded the step limit
    pub misses: u32,
    /// Whether the camera moved this frame
    pub moved: bool,
} // struct FrameStats

/// Per-column frame buffers, `W` x `H` cells
#[derive(Clone, Debug)]
pub struct Frame<const W: usize = SCREEN_WIDTH, const H: usize = SCREEN_HEIGHT> {
    start_col: [u8; W],
    end_col: [u8; W],
    col_color: [u8; W],
    blink_counter: u32,
} // struct Frame

impl<const W: usize, const H: usize> Frame<W, H> {
    const VALID: () = assert!(W > 0 && H > 0 && H <= u8::MAX as usize, "unsupported screen size");

    /// x offset of column 0 center, in columns
    const COLUMN_BIAS: Fixed = Fixed::from_f64(0.5 - W as f64 / 2.0);
    /// Column to view plane scale, view plane spans [-1, 1]
    const COLUMN_SCALE: Fixed = Fixed::from_f64(2.0 / W as f64);
    /// Wall height to rows scale
    const HEIGHT_SCALE: Fixed = Fixed::from_f64(W as f64 / 2.0);

    pub const fn new() -> Self {
        let () = Self::VALID;

        Self {
            start_col: [0; W],
            end_col: [0; W],
            col_color: [glyph::SPARSE; W],
            blink_counter: 0,
        }
    } // fn new

    /// Blink counter advance function
    /// * `period` - blink period in frames
    pub fn tick_blink(&mut self, period: u32) {
        self.blink_counter += 1;
        if self.blink_counter >= period {
            self.blink_counter = 0;
        }
    } // fn tick_blink

    /// Is goal highlighted this frame
    pub fn blink_on(&self, period: u32) -> bool {
        self.blink_counter >= period / 2
    } // fn blink_on

    /// View space ray direction of column
    /// * `x` - screen column
    /// * Returns direction with unit forward (y) component
    pub fn column_direction(x: usize) -> Vec2fx {
        Vec2fx::new((Fixed::from_int(x as i32) + Self::COLUMN_BIAS) * Self::COLUMN_SCALE, Fixed::ONE)
    } // fn column_direction

    /// Column span calculation function.
    /// Non-positive `config.max_height` draws no wall.
    /// * `hit` - column ray hit, None if ray missed
    /// * `blink_on` - goal highlight flag
    /// * `config` - frame parameters
    /// * Returns column span and color
    pub fn project(hit: Option<&RayHit>, blink_on: bool, config: &Config) -> Column {
        let height = match hit {
            _ if config.max_height <= Fixed::ZERO => Fixed::ZERO,
            Some(hit) if hit.axis.is_some() && hit.t >= Fixed::ONE / config.max_height => {
                (Fixed::ONE / hit.t).min(config.max_height)
            }
            Some(_) => config.max_height,
            None => Fixed::ZERO,
        };

        let iheight = (height * Self::HEIGHT_SCALE).round_int().clamp(0, H as i32) as usize;

        let color = match hit {
            Some(hit) if hit.block == Block::Goal && blink_on => match hit.axis {
                Some(Axis::X) => glyph::GOAL_SIDE,
                _ => glyph::GOAL_FACE,
            },
            Some(RayHit { axis: Some(Axis::X), .. }) => glyph::MEDIUM,
            _ => glyph::SPARSE,
        };

        Column {
            start: (H / 2 - iheight / 2) as u8,
            end: (H / 2 + (iheight + 1) / 2) as u8,
            color,
        }
    } // fn project

    /// Column rendering function
    /// * `camera` - viewer pose
    /// * `world` - world to cast rays in
    /// * `table` - sine table
    /// * `config` - frame parameters
    /// * Returns frame statistics
    pub fn render_columns<const N: usize, const MW: usize, const MH: usize>(
        &mut self,
        camera: &Camera,
        world: &GridWorld<MW, MH>,
        table: &SinCosTable<N>,
        config: &Config,
    ) -> FrameStats {
        let blink_on = self.blink_on(config.blink_period);
        let mut stats = FrameStats::default();

        for x in 0..W {
            let ray_direction = camera.to_world(table, Self::column_direction(x));
            let hit = ray_caster::cast(world, camera.location, ray_direction, config.max_ray_steps);

            if hit.is_none() {
                stats.misses += 1;
            }

            let column = Self::project(hit.as_ref(), blink_on, config);
            self.start_col[x] = column.start;
            self.end_col[x] = column.end;
            self.col_color[x] = column.color;
        }

        stats
    } // fn render_columns

    /// Column getting function
    pub fn column(&self, x: usize) -> Option<Column> {
        Some(Column {
            start: *self.start_col.get(x)?,
            end: *self.end_col.get(x)?,
            color: *self.col_color.get(x)?,
        })
    } // fn column

    /// Column getting function, in range columns only
    fn column_at(&self, x: usize) -> Column {
        Column {
            start: self.start_col[x],
            end: self.end_col[x],
            color: self.col_color[x],
        }
    } // fn column_at

    /// Cell getting function
    /// * `x` - column
    /// * `y` - row
    /// * Returns ceiling, wall or floor cell, None outside the frame
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        if y >= H {
            return None;
        }
        self.column(x).map(|column| column.cell(y))
    } // fn cell

    /// Frame output function.
    /// The last row misses its last cell, so terminals never scroll.
    /// * `display` - display to put frame to
    pub fn present<D: Display + ?Sized>(&self, display: &mut D) {
        display.home();

        for y in 0..H {
            let x_end = if y == H - 1 { W - 1 } else { W };
            for x in 0..x_end {
                display.put(self.column_at(x).cell(y));
            }
        }
    } // fn present
} // impl Frame

impl<const W: usize, const H: usize> Default for Frame<W, H> {
    fn default() -> Self {
        Self::new()
    }
}


// file render.rs
