/// MAZECAST Project
/// `File` game.rs
/// `Description` Frame loop orchestration module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use crate::camera::Camera;
use crate::config::{Config, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::device::{Display, InputSource};
use crate::map::GridWorld;
use crate::render::{Frame, FrameStats};
use crate::util::fixed::sin_cos::SinCosTable;

/// Game state: pose, frame buffers and the read-only world data they use
pub struct Game<'a, const MW: usize, const MH: usize, const W: usize = SCREEN_WIDTH, const H: usize = SCREEN_HEIGHT> {
    pub camera: Camera,
    world: &'a GridWorld<MW, MH>,
    table: &'a SinCosTable,
    frame: Frame<W, H>,
    config: Config,
} // struct Game

impl<'a, const MW: usize, const MH: usize, const W: usize, const H: usize> Game<'a, MW, MH, W, H> {
    pub fn new(world: &'a GridWorld<MW, MH>, table: &'a SinCosTable, camera: Camera, config: Config) -> Self {
        Self {
            camera,
            world,
            table,
            frame: Frame::new(),
            config,
        }
    } // fn new

    pub fn config(&self) -> &Config {
        &self.config
    } // fn config

    pub fn frame_buffers(&self) -> &Frame<W, H> {
        &self.frame
    } // fn frame_buffers

    /// Single frame function: poll input, move, render and present
    /// * `input` - switch source
    /// * `display` - display to put frame to
    /// * Returns frame statistics
    pub fn frame<I, D>(&mut self, input: &mut I, display: &mut D) -> FrameStats
    where
        I: InputSource + ?Sized,
        D: Display + ?Sized,
    {
        self.frame.tick_blink(self.config.blink_period);

        let buttons = input.read();
        let moved = self.camera.update(buttons, self.world, self.table, &self.config);

        let mut stats = self.frame.render_columns(&self.camera, self.world, self.table, &self.config);
        stats.moved = moved;

        self.frame.present(display);

        stats
    } // fn frame
} // impl Game

// file game.rs
