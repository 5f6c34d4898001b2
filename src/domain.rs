//! Domain logic
//!
//! This module contains the page itself, independent of any terminal:
//! - Static portfolio content
//! - Element identities
//! - Motion presets and per-element state machines
//! - Page composition and hit testing
//! - Viewport intersection observation
//! - Text processing utilities

pub mod content;
pub mod document;
pub mod element;
pub mod motion;
pub mod observer;
pub mod text;
