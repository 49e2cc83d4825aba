//! Shared data types

pub mod view;
