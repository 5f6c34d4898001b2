//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

pub mod nav;
pub mod page;
pub mod status_bar;

pub use nav::NavComponent;
pub use page::PageComponent;
pub use status_bar::StatusBarComponent;
