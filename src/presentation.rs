//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components for the navigation bar, page and status bar
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
