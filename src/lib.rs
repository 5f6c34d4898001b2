//! # Folio - a portfolio page in the terminal
//!
//! A single scrolling page (hero, experience, projects and a career
//! timeline) with entrance animations, scroll-triggered reveals that play
//! once, and hover and press feedback, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (opening links, terminal work)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! Time is an input like any other: `update` receives the instant a message
//! is applied, and the view samples every animation at the instant it draws.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Instant;
//!
//! use folio::{
//!     core::{msg::{page::PageMsg, Msg}, state::AppState, update::update},
//!     domain::element::ElementId,
//! };
//!
//! let mount = Msg::Page(PageMsg::Mount { width: 100, height: 30 });
//! let (state, commands) = update(mount, AppState::default(), Instant::now());
//!
//! assert!(state.page.is_revealed(ElementId::Nav));
//! assert!(!commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, update and command execution
//! - [`domain`] - Page content, layout, motion and intersection
//! - [`infrastructure`] - Terminal, configuration, CLI and link opening
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
