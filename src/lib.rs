//! # Object-Oriented Concepts in Rust
//!
//! Five independent demonstrations:
//!
//! ## Number 1: Override dispatch
//! - `Vehicle` trait with a default `start()`; `Car` and `Bike` override it
//!
//! ## Number 2: Polymorphic aggregation
//! - `Shape` trait objects summed by `total_area`
//!
//! ## Number 3: Deferred base initialization
//! - `FancyRectangle` initializes its `BaseShape` part on first `calculate_area()`
//!
//! ## Number 4: Capability traits
//! - `SoundMaker` implemented by `Dog` and `Cat`
//!
//! ## Question 5: File handlers
//! - Sealed `FileHandler` trait with text and binary strategies
//!
//! Run all of them with: `cargo run -- [config.toml]`

pub mod config;
pub mod demo;
pub mod error;
pub mod fancy_rectangle;
pub mod file_handler;
pub mod shape;
pub mod sound;
pub mod vehicle;

#[cfg(test)]
mod test_support;

pub use config::DemoConfig;
pub use demo::{greet, run_all, run_demo, Demo};
pub use error::{AttributeError, ConfigError, DemoError, FileError};
pub use fancy_rectangle::{AreaCalculator, BaseShape, BaseState, FancyRectangle};
pub use file_handler::{BinaryFileHandler, FileHandler, TextFileHandler};
pub use shape::{total_area, Circle, Rectangle, Shape};
pub use sound::{process_sound, Cat, Dog, SoundMaker};
pub use vehicle::{Bike, Car, GenericVehicle, Vehicle};
