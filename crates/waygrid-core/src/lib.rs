//! **waygrid-core** — grid pathfinding visualizer (core types).
//!
//! This crate provides the foundational types used across the *waygrid*
//! workspace: geometry primitives, the paintable cell canvas, colours and
//! palette, visualizer configuration, input events, and the model/driver
//! application contract.

pub mod app;
pub mod canvas;
pub mod cell;
pub mod config;
pub mod geom;
pub mod messages;
pub mod style;

pub use app::{ButtonView, Effect, Model, ViewFrame};
pub use canvas::Canvas;
pub use cell::CellState;
pub use config::VisualizerConfig;
pub use geom::{Point, Rect};
pub use messages::{Key, MouseAction, Msg};
pub use style::{Color, Palette};
