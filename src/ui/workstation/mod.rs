//! Admin user workstation widgets

pub mod saved_views;

pub use saved_views::SavedViewsButtons;
