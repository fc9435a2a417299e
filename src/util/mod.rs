//! MAZECAST Project
//! `File` util/mod.rs
//! `Description` Utility module
//! `Author` TioT2
//! `Last changed` 19.10.2026

pub mod fixed;

// file mod.rs
