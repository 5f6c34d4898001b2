//! Infrastructure layer
//!
//! This module handles everything outside the page itself:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - Opening outbound links

pub mod cli;
pub mod config;
pub mod opener;
pub mod tui;
