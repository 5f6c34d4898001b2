//! Integration layer
//!
//! This module wires the Elm core to the terminal:
//! - Runtime owning state and message queues
//! - Update cycle and render/resize coalescing
//! - Renderer and the main event loop

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
pub mod update_executor;
