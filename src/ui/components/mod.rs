//! Shared UI components
//!
//! Reusable primitives shared across the workstation widgets.

pub mod icons;
