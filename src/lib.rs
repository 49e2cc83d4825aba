//! Saved Views Library
//!
//! Role-filter buttons for the admin user workstation, plus the small Dioxus
//! shell that hosts them.

pub mod app;
pub mod storage;
pub mod types;
pub mod ui;
