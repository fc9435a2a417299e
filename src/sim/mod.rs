//! MAZECAST Project
//! `File` sim/mod.rs
//! `Description` Desktop board simulator module
//! `Author` TioT2
//! `Last changed` 19.10.2026

pub mod font;
pub mod input;
pub mod screenshot;
pub mod surface;
pub mod terminal;
pub mod timer;

/// Simulator setup error
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("window system error: {0}")]
    Window(String),
    #[error("pixel surface error: {0}")]
    Surface(String),
} // enum SimulatorError

impl SimulatorError {
    pub fn window(error: impl std::fmt::Display) -> Self {
        Self::Window(error.to_string())
    } // fn window

    pub fn surface(error: impl std::fmt::Display) -> Self {
        Self::Surface(error.to_string())
    } // fn surface
} // impl SimulatorError

// file mod.rs
