/// MAZECAST Project
/// `File` sim/timer.rs
/// `Description` Frame rate measurement module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::time::{Duration, Instant};

/// Timer representation structure
pub struct Timer {
    time_point: Instant,
    fps_time_point: Instant,
    delta_time: f32,
    fps: f32,
    fps_counter: u32,
    fps_duration: Duration,
} // struct Timer

impl Timer {
    /// Timer constructor.
    /// * Returns newly created timer with count, starting from creation moment
    pub fn new() -> Self {
        Self::with_fps_duration(Duration::from_secs(1))
    } // fn new

    /// Timer constructor
    /// * `fps_duration` - FPS measurement window
    pub fn with_fps_duration(fps_duration: Duration) -> Self {
        let now = Instant::now();
        Self {
            time_point: now,
            fps_time_point: now,
            delta_time: 0.0,
            fps: 0.0,
            fps_counter: 0,
            fps_duration,
        }
    } // fn with_fps_duration

    /// Timer duration update function, called once per frame.
    /// * Returns true if FPS value is updated
    pub fn response(&mut self) -> bool {
        let now = Instant::now();

        self.delta_time = (now - self.time_point).as_secs_f32();
        self.time_point = now;
        self.fps_counter += 1;

        let fps_duration = now - self.fps_time_point;
        if fps_duration < self.fps_duration {
            return false;
        }

        self.fps = self.fps_counter as f32 / fps_duration.as_secs_f32();
        self.fps_time_point = now;
        self.fps_counter = 0;

        true
    } // fn response

    /// Time between neighbour updates getting function
    pub fn get_delta_time(&self) -> f32 {
        self.delta_time
    } // fn get_delta_time

    /// FPS getting function
    /// * Returns FPS, measured over the last window
    pub fn get_fps(&self) -> f32 {
        self.fps
    } // fn get_fps
} // impl Timer

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}


// file timer.rs
