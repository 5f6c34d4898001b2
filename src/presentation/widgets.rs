//! Reusable UI widgets
//!
//! This module contains widgets shared by the page and the navigation bar.

pub mod block_view;

pub use block_view::{BlockView, ViewContext};
