//! folio: a scroll-synchronised terminal portfolio.
//!
//! The page is a single scroll container of sections. The route selects a section and scrolls
//! to it; scrolling by hand moves the active section without touching the route. The
//! [`tracker`] module holds the state machine that keeps the two from feeding back into each
//! other.

pub mod app_state;
pub mod clipboard;
pub mod config;
pub mod container;
pub mod content;
pub mod error;
pub mod nav;
pub mod platform;
pub mod registry;
pub mod section;
pub mod theme;
pub mod tracker;
pub mod ui;

pub use error::{Error, Result};
