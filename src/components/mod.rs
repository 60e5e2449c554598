//! Reusable UI components.

pub mod loading_overlay;
