#![cfg_attr(not(test), no_std)]

//! MAZECAST Project
//! `File` lib.rs
//! `Description` Fixed-point grid ray casting core
//! `Author` TioT2
//! `Last changed` 19.10.2026

pub mod util;
pub mod math;
pub mod map;
pub mod config;
pub mod device;
pub mod ray_caster;
pub mod camera;
pub mod render;
pub mod game;

pub use util::fixed::{Fixed, sin_cos::{SinCosTable, SIN_COS_TABLE}};
pub use math::{Vec2, Vec2fx, Vec2si};
pub use map::{Block, GridWorld, SAMPLE_MAZE};
pub use config::Config;
pub use camera::Camera;
pub use game::Game;

// file lib.rs
